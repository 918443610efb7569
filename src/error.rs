//! .
//!
//! The core is total over its inputs and reports no recoverable errors;
//! precondition violations abort via assertions. [`Result`] exists for the
//! IO boundary (saving rendered images, demo glue).

pub use anyhow::{Error, Result};
