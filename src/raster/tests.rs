use {
  super::*,
  crate::fractal::Julia,
  num_complex::Complex
};

/// Fractal stub with a constant classification.
struct Uniform(bool);
impl<T> Fractal<T> for Uniform {
  fn contains(&self, _: Complex<T>) -> bool { self.0 }
}

fn framebuffer(dim: u32) -> Vec<u8> {
  vec![0u8; (dim * dim) as usize * CHANNELS]
}

#[test] fn determinism() {
  let dim = 32;
  let julia = Julia::<f64>::default();
  let mut first = framebuffer(dim);
  // a dirty buffer must not show through
  let mut second = vec![0xAAu8; (dim * dim) as usize * CHANNELS];
  render(&julia, Viewport::default(), &mut first, dim);
  render(&julia, Viewport::default(), &mut second, dim);
  assert_eq!(first, second);
}

#[test] fn coverage() {
  let dim = 16;
  let mut buffer = framebuffer(dim);
  render(&Julia::<f32>::default(), Viewport::default(), &mut buffer, dim);
  buffer.chunks_exact(CHANNELS).for_each(|pixel| {
    assert!(pixel == INSIDE || pixel == OUTSIDE);
    assert_eq!(pixel[3], 0xFF);
  });
}

#[test] fn color_mapping() {
  let dim = 8;
  let mut buffer = framebuffer(dim);
  render::<f32, _>(&Uniform(true), Viewport::default(), &mut buffer, dim);
  buffer.chunks_exact(CHANNELS).for_each(|pixel| assert_eq!(pixel, INSIDE));
  render::<f32, _>(&Uniform(false), Viewport::default(), &mut buffer, dim);
  buffer.chunks_exact(CHANNELS).for_each(|pixel| assert_eq!(pixel, OUTSIDE));
}

#[test] fn center_pixel_inside() {
  let dim = 4;
  let mut buffer = framebuffer(dim);
  render(&Julia::<f32>::default(), Viewport::default(), &mut buffer, dim);
  let offset = (2 + 2 * dim) as usize * CHANNELS;
  assert_eq!(&buffer[offset..offset + CHANNELS], INSIDE);
}

#[test] fn corner_pixel_escapes() {
  let viewport = Viewport::<f64>::default();
  let corner = viewport.sample(Point2D::from([0, 0]), Size2D::splat(4));
  // ten iterations are enough for the far corner to cross the threshold
  assert!(!Julia::default().with_max_iter(10).contains(corner));

  let dim = 4;
  let mut buffer = framebuffer(dim);
  render(&Julia::<f64>::default(), Viewport::default(), &mut buffer, dim);
  assert_eq!(&buffer[0..CHANNELS], OUTSIDE);
}

#[test] fn parallel_equivalence() {
  let dim = 64;
  let julia = Julia::<f32>::default();
  let mut parallel = framebuffer(dim);
  let mut sequential = framebuffer(dim);
  render(&julia, Viewport::default(), &mut parallel, dim);
  render_seq(&julia, Viewport::default(), &mut sequential, dim);
  assert_eq!(parallel, sequential);
}

#[test] #[should_panic] fn undersized_framebuffer() {
  let mut buffer = vec![0u8; 2 * CHANNELS];
  render(&Julia::<f32>::default(), Viewport::default(), &mut buffer, 4);
}

#[test] #[should_panic] fn empty_grid() {
  render(&Julia::<f32>::default(), Viewport::default(), &mut [], 0);
}
