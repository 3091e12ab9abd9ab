//! Maze carving algorithm
//!
//! Hunt-and-kill spanning-tree generation where the walk's tie-breaking is a
//! deterministic choice driven by pixel-intensity differences instead of a
//! random draw.

/// Hunt-and-kill engine and generation loop
pub mod engine;
/// Packed pixel intensity sampling and grid sizing
pub mod intensity;
/// Candidate edge enumeration and intensity-scored selection
pub mod selection;

pub use engine::MazeEngine;
pub use intensity::IntensityField;
