//! Rasterization of completed mazes
//!
//! Turns the abstract spanning tree back into pixels: corridor pixels at cell
//! centers, wall pixels left as background, plus fixed entrance and exit
//! openings on the boundary.

/// Corridor and opening painting onto pixel canvases
pub mod artist;

pub use artist::{paint_maze, render_maze};
