//! Input/output operations and error handling
//!
//! This module contains everything at the process boundary:
//! - Command-line interface and run orchestration
//! - Runtime constants
//! - Error types
//! - Image loading, cropping, and PNG export

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime constants and configuration defaults
pub mod configuration;
/// Error types for all operations
pub mod error;
/// Image loading, cropping, and PNG export
pub mod image;
