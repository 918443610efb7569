use escape_time::{
  error::Result,
  fractal::Julia,
  geometry::Viewport,
  drawing
};

/// Grid side length of the original demo.
const DIM: u32 = 1000;

fn main() -> Result<()> {
  env_logger::init();
  let path = "julia.png";
  let image = drawing::render_image(&Julia::<f32>::default(), Viewport::default(), DIM);
  image.save(path)?;
  open::that(path)?;
  Ok(())
}
