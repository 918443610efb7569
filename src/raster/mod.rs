//! .
//!
//! Fills a caller-owned RGBA framebuffer with the classification of every
//! pixel of a square grid. The buffer is a flat row-major byte sequence,
//! 4 bytes per pixel; pixel `(x, y)` owns the slice at `(x + y·dim)·CHANNELS`.
//! The rasterizer never allocates the buffer and keeps no reference to it
//! past a single pass.

use {
  crate::{
    fractal::Fractal,
    geometry::Viewport
  },
  euclid::{Point2D, Size2D},
  num_traits::Float,
  rayon::prelude::*
};

#[cfg(test)] mod tests;

/// Bytes per pixel, `(R, G, B, A)` order.
pub const CHANNELS: usize = 4;
/// Color of samples inside the set.
pub const INSIDE: [u8; CHANNELS] = [0xFF, 0x00, 0x00, 0xFF];
/// Color of escaped samples.
pub const OUTSIDE: [u8; CHANNELS] = [0x00, 0x00, 0x00, 0xFF];

/// Classify every pixel of a `dim × dim` grid and write its color, spreading
/// the pass across the rayon thread pool. Each task owns a disjoint 4-byte
/// slice of the framebuffer, so no synchronization happens beyond the final
/// join.
///
/// An undersized framebuffer or an empty grid is a programming error and
/// panics; there is no recoverable failure.
pub fn render<T, F>(fractal: &F, viewport: Viewport<T>, framebuffer: &mut [u8], dim: u32)
  where T: Float + Send + Sync,
        F: Fractal<T> + Sync
{
  assert!(dim > 0);
  assert_eq!(framebuffer.len(), dim as usize * dim as usize * CHANNELS);
  let resolution = Size2D::splat(dim);

  framebuffer.par_chunks_exact_mut(CHANNELS)
    .enumerate()
    .for_each(|(offset, pixel)| {
      let xy = Point2D::from([
        (offset % dim as usize) as u32,
        (offset / dim as usize) as u32
      ]);
      let color = if fractal.contains(viewport.sample(xy, resolution))
        { &INSIDE } else { &OUTSIDE };
      pixel.copy_from_slice(color);
    });
}

/// The scalar reference pass; byte-identical output to [`render`].
pub fn render_seq<T, F>(fractal: &F, viewport: Viewport<T>, framebuffer: &mut [u8], dim: u32)
  where T: Float,
        F: Fractal<T>
{
  assert!(dim > 0);
  assert_eq!(framebuffer.len(), dim as usize * dim as usize * CHANNELS);
  let resolution = Size2D::splat(dim);

  itertools::iproduct!(0..dim, 0..dim)
    .for_each(|(y, x)| {
      let offset = (x as usize + y as usize * dim as usize) * CHANNELS;
      let color = if fractal.contains(viewport.sample(Point2D::from([x, y]), resolution))
        { &INSIDE } else { &OUTSIDE };
      framebuffer[offset..offset + CHANNELS].copy_from_slice(color);
    });
}
