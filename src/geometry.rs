//! .
//!
//! The origin of the pixel grid is in the top-left corner; the visible
//! window onto the complex plane is centered on the origin of ℂ.

use {
  euclid::{Point2D, Size2D},
  num_complex::Complex,
  num_traits::Float
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// Affine window onto the complex plane.
///
/// A `dim × dim` grid maps to the square `[-scale, scale]²` with both axes
/// flipped (`re` grows leftward, `im` grows upward):
/// `re = scale·(half − x)/half`, `im = scale·(half − y)/half`, `half = dim/2`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport<T> {
  /// Half-width of the visible window, in plane units.
  pub scale: T
}

impl<T: Float> Viewport<T> {
  pub fn new(scale: T) -> Self {
    Self { scale }
  }

  /// Map a grid cell to its sample on the plane.
  /// Purely a function of `(pixel, resolution, scale)`.
  pub fn sample(
    &self,
    pixel: Point2D<u32, PixelSpace>,
    resolution: Size2D<u32, PixelSpace>
  ) -> Complex<T> {
    let half = resolution.to_vector().cast::<T>() / (T::one() + T::one());
    let pixel = pixel.cast::<T>();
    Complex::new(
      self.scale * (half.x - pixel.x) / half.x,
      self.scale * (half.y - pixel.y) / half.y
    )
  }
}

impl<T: Float> Default for Viewport<T> {
  /// The window of the original demo, `[-1.5, 1.5]²`.
  fn default() -> Self {
    Self { scale: T::from(1.5).unwrap() }
  }
}

#[test] fn window_mapping() {
  let resolution = Size2D::splat(4);
  let viewport = Viewport::<f32>::default();
  // grid center lands on the origin of ℂ
  assert_eq!(
    viewport.sample(Point2D::from([2, 2]), resolution),
    Complex::new(0.0, 0.0)
  );
  // top-left corner lands on scale·(1 + i)
  assert_eq!(
    viewport.sample(Point2D::from([0, 0]), resolution),
    Complex::new(1.5, 1.5)
  );
  assert_eq!(
    Viewport::new(1.0f64).sample(Point2D::from([0, 0]), resolution),
    Complex::new(1.0, 1.0)
  );
}
