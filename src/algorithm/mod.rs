//! Core numerics for box-counting dimension estimation

/// Occupied-box counting over a ladder of grid sizes
pub mod counting;
/// End-to-end count-and-fit pipeline
pub mod estimate;
/// Log-log least-squares fit of the scaling law
pub mod regression;
/// Box-size ladder generation
pub mod sizes;

pub use estimate::DimensionEstimate;
pub use regression::PowerLawFit;
