//! Spatial data structures for maze generation
//!
//! This module contains the grid-level building blocks:
//! - Cell coordinates and axis directions
//! - Candidate edges between adjacent cells
//! - Maze grid state management

/// Cell coordinates, directions, and candidate edges
pub mod cell;
/// Maze grid state management
pub mod grid;

pub use cell::{Cell, Direction, Edge};
pub use grid::{CellState, MazeGrid, ParentLink};
