//! Input/output operations and error handling
//!
//! Everything with a surface beyond pure computation lives here: the CLI
//! driver, error types, result export, plotting, and progress display.

/// Command-line interface and batch file processing
pub mod cli;
/// Runtime constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// CSV export of count sequences
pub mod export;
/// Log-log chart rendering to PNG
pub mod plot;
/// Batch progress display
pub mod progress;
