//! Binary raster data model
//!
//! This module contains the occupancy representations consumed by the
//! counting core:
//! - Bit-packed binary masks
//! - Validated foreground coordinate sets

/// Bit-packed binary occupancy mask
pub mod mask;
/// Foreground coordinate sets with shape validation
pub mod points;

pub use mask::BinaryMask;
pub use points::ForegroundPoints;
