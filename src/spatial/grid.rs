//! Maze grid state management
//!
//! The grid records, for every visited cell, how the carving walk entered it.
//! Visited status and the stored direction are one piece of state: a typed
//! variant rather than a numeric sentinel, so invalid encodings are
//! unrepresentable. Cells are written once during generation and read-only
//! afterwards.

use ndarray::Array2;

use crate::spatial::cell::{Cell, Direction};

/// Link from a visited cell back to its parent in the spanning tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentLink {
    /// This cell is the tree root and has no parent
    Root,
    /// The walk entered this cell from its parent travelling in the given
    /// direction; the parent therefore lies in the reversed direction
    Entered(Direction),
}

/// Per-cell state in the maze grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Not yet reached by any carving walk
    #[default]
    Unvisited,
    /// Reached; carries the link back toward the parent
    Visited(ParentLink),
}

/// Width × height grid of cell states forming the maze
///
/// Allocated once at the target size with every cell unvisited, fully
/// populated during generation, then handed to the renderer as an immutable
/// view. A completed grid is a spanning tree: every cell visited, parent
/// links cycle-free and converging on a single root.
#[derive(Debug, Clone)]
pub struct MazeGrid {
    cells: Array2<CellState>,
    dimensions: (usize, usize),
}

impl MazeGrid {
    /// Create a grid of the given size with every cell unvisited
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            // ndarray is row-major: indexed by (row, col) = (y, x)
            cells: Array2::default((height, width)),
            dimensions: (width, height),
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.dimensions.0
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.dimensions.1
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether the grid has no cells at all
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the cell lies within grid bounds
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && (cell.x as usize) < self.width()
            && cell.y >= 0
            && (cell.y as usize) < self.height()
    }

    /// State of the given cell; out-of-bounds cells read as unvisited
    pub fn state(&self, cell: Cell) -> CellState {
        self.cells
            .get((cell.y as usize, cell.x as usize))
            .copied()
            .unwrap_or(CellState::Unvisited)
    }

    /// Whether the given cell has been visited
    pub fn is_visited(&self, cell: Cell) -> bool {
        matches!(self.state(cell), CellState::Visited(_))
    }

    /// Mark a cell visited with its parent link
    ///
    /// Generation writes each cell exactly once; out-of-bounds writes are
    /// ignored.
    pub fn visit(&mut self, cell: Cell, link: ParentLink) {
        if let Some(state) = self.cells.get_mut((cell.y as usize, cell.x as usize)) {
            *state = CellState::Visited(link);
        }
    }
}
