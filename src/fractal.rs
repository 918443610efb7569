//! .
//!
//! Classification of points of the complex plane: does the orbit of a sample
//! stay bounded under the fractal's iteration?

use {
  num_complex::Complex,
  num_traits::Float
};

/// Membership test over the complex plane.
pub trait Fractal<T> {
  /// `true` if `z` belongs to the set.
  fn contains(&self, z: Complex<T>) -> bool;
}

/// Filled Julia set of `z ↦ z² + c`.
///
/// A sample belongs to the set if its orbit survives `max_iter` steps with
/// `|z|²` never exceeding `escape_radius_sqr`. The threshold is kept in
/// squared-magnitude terms, sparing a square root per step; it also bounds
/// orbit growth long before the float overflows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Julia<T> {
  pub c: Complex<T>,
  pub max_iter: u32,
  pub escape_radius_sqr: T
}

impl<T: Float> Julia<T> {
  pub fn new(c: Complex<T>) -> Self {
    Self { c, ..Self::default() }
  }

  pub fn with_max_iter(self, max_iter: u32) -> Self {
    Self { max_iter, ..self }
  }

  pub fn with_escape_radius_sqr(self, escape_radius_sqr: T) -> Self {
    Self { escape_radius_sqr, ..self }
  }
}

impl<T: Float> Default for Julia<T> {
  /// `c = -0.8 + 0.156i` — a connected set, 200 iterations, squared escape
  /// threshold of 1000.
  fn default() -> Self {
    Self {
      c: Complex::new(T::from(-0.8).unwrap(), T::from(0.156).unwrap()),
      max_iter: 200,
      escape_radius_sqr: T::from(1000.0).unwrap()
    }
  }
}

impl<T: Float> Fractal<T> for Julia<T> {
  fn contains(&self, z: Complex<T>) -> bool {
    let mut z = z;
    for _ in 0..self.max_iter {
      z = z * z + self.c;
      if z.norm_sqr() > self.escape_radius_sqr {
        return false;
      }
    }
    true
  }
}

#[test] fn origin_orbit_bounded() {
  // z₀ = 0 never escapes for a connected parameter
  assert!(Julia::<f64>::default().contains(Complex::new(0.0, 0.0)));
  assert!(Julia::<f32>::default().contains(Complex::new(0.0, 0.0)));
}

#[test] fn far_sample_escapes() {
  // the corner of the default window crosses the threshold within a few steps
  assert!(!Julia::<f64>::default().with_max_iter(10).contains(Complex::new(1.5, 1.5)));
}

#[test] fn totality() {
  use rand::prelude::*;

  let julia = Julia::<f32>::default();
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  // every finite sample is classified within the iteration budget
  for _ in 0..1000 {
    let z = Complex::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
    let _ = julia.contains(z);
  }
}
