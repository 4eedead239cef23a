//! Image ingestion and preprocessing for dimension estimation

/// Grayscale loading and intensity thresholding
pub mod binarize;
