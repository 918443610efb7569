//! Escape-time fractal rasterization in ℝ².
//!
//! The crate is split into three small modules: [`fractal`] for classifying
//! points of the complex plane, [`geometry`] for mapping pixel coordinates
//! onto the plane, and [`raster`] for filling an RGBA framebuffer with the
//! classification of every pixel. An optional `drawing` module renders
//! into an `image::RgbaImage` (requires the `drawing` feature).
//!
//! # Basic usage
//! ```
//! use escape_time::{fractal::Julia, geometry::Viewport, raster};
//!
//! let dim = 64;
//! // The framebuffer is owned by the caller; the rasterizer only fills it.
//! let mut framebuffer = vec![0u8; (dim * dim) as usize * raster::CHANNELS];
//! raster::render(
//!   &Julia::<f32>::default(),
//!   Viewport::default(),
//!   &mut framebuffer,
//!   dim
//! );
//! ```
//! Every pixel is classified independently of all others, so
//! [`raster::render`] spreads the pass across all available cores;
//! [`raster::render_seq`] is the scalar reference pass, and both produce
//! byte-identical buffers.
//!
//! The visible window onto the plane, the Julia parameter `c`, and the
//! iteration budget are explicit immutable values ([`geometry::Viewport`],
//! [`fractal::Julia`]) — multiple independent renders share no state.

pub mod error;
pub mod fractal;
pub mod geometry;
pub mod raster;
#[cfg(feature = "drawing")]
pub mod drawing;
