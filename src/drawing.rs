//! `image` backend: allocates the framebuffer on behalf of a display
//! collaborator and rasterizes into its raw bytes.

use {
  crate::{
    fractal::Fractal,
    geometry::Viewport,
    raster
  },
  image::RgbaImage,
  num_traits::Float
};

/// Allocate a `dim × dim` RGBA image and rasterize `fractal` into it.
pub fn render_image<T, F>(fractal: &F, viewport: Viewport<T>, dim: u32) -> RgbaImage
  where T: Float + Send + Sync,
        F: Fractal<T> + Sync
{
  let mut image = RgbaImage::new(dim, dim);
  let t0 = std::time::Instant::now();
  raster::render(fractal, viewport, &mut image, dim);
  log::debug!("{dim}×{dim} render: {}ms", t0.elapsed().as_millis());
  image
}

#[test] fn image_backend() {
  use crate::fractal::Julia;

  let image = render_image(&Julia::<f32>::default(), Viewport::default(), 32);
  assert_eq!(image.dimensions(), (32, 32));
  image.pixels().for_each(|pixel| assert_eq!(pixel.0[3], 0xFF));
}
