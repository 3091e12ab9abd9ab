//! Image-guided perfect maze generation using intensity-biased hunt-and-kill
//!
//! The system samples pixel intensities from a source image, carves a spanning
//! tree over a grid derived from the image dimensions, and renders the
//! resulting corridors back into a raster of matching scale. The usual random
//! walk tie-break is replaced by a deterministic choice driven by local
//! intensity gradients, so corridors follow the structure of the input image.

#![forbid(unsafe_code)]

/// Maze carving: intensity sampling, candidate selection, and the hunt-and-kill engine
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Rasterization of completed mazes
pub mod render;
/// Grid coordinates, directions, and maze state management
pub mod spatial;

pub use io::error::{MazeError, Result};
