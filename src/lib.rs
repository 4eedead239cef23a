//! Box-counting fractal dimension estimation for binary images
//!
//! The system converts a binary occupancy mask into foreground coordinates,
//! counts distinct occupied grid cells across a ladder of box sizes, and fits
//! the resulting scaling law to recover a dimension estimate.

#![forbid(unsafe_code)]

/// Core numerics: occupied-box counting, size ladders, and the scaling fit
pub mod algorithm;
/// Image ingestion and intensity thresholding
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Binary raster data model: occupancy masks and foreground coordinates
pub mod spatial;

pub use io::error::{BoxCountError, Result};
