//! Hunt-and-kill maze generation engine
//!
//! Alternates two phases until the grid is a complete spanning tree: a
//! directed walk ("kill") carving corridors along the steepest intensity
//! gradient, and a row-major scan ("hunt") for a fresh unvisited cell
//! adjacent to the carved region once the walk dead-ends.

use crate::algorithm::intensity::IntensityField;
use crate::algorithm::selection::{candidate_edges, select_edge};
use crate::spatial::cell::{Cell, Edge};
use crate::spatial::grid::{MazeGrid, ParentLink};

/// Owns the grid and intensity field and runs hunt-and-kill to completion
///
/// The engine exclusively owns the grid during generation and hands it off
/// by value once complete; the renderer only ever sees a finished grid.
#[derive(Debug)]
pub struct MazeEngine {
    grid: MazeGrid,
    field: IntensityField,
    /// Row-major resume position for the hunt scan. Monotonically
    /// non-decreasing across hunts and never reset, which bounds the total
    /// cost of advancing it to one full grid traversal per generation.
    hunt_cursor: usize,
}

impl MazeEngine {
    /// Create an engine for the grid size derived from the intensity field
    pub fn new(field: IntensityField) -> Self {
        let grid = MazeGrid::new(field.grid_width(), field.grid_height());
        Self {
            grid,
            field,
            hunt_cursor: 0,
        }
    }

    /// Run hunt-and-kill to completion and hand off the finished grid
    ///
    /// Terminates because every kill visits at least one unvisited cell and
    /// the grid is finite. A zero-size grid is a no-op maze.
    pub fn generate(mut self) -> MazeGrid {
        if self.grid.is_empty() {
            return self.grid;
        }

        // The first walk always roots the tree at (0, 0)
        self.kill(Cell::new(0, 0), ParentLink::Root);

        while let Some(target) = self.hunt() {
            self.kill(target.child, ParentLink::Entered(target.direction));
        }

        self.grid
    }

    /// Carve a walk starting at `start`, already linked to its parent
    ///
    /// Each step marks the best-scoring unvisited neighbor with the direction
    /// it was entered from; the walk ends when no unvisited neighbor remains.
    fn kill(&mut self, start: Cell, link: ParentLink) {
        self.grid.visit(start, link);

        let mut current = start;
        loop {
            let candidates = candidate_edges(&self.grid, current, false);
            let Some(edge) = select_edge(&self.field, &candidates) else {
                break;
            };
            self.grid.visit(edge.child, ParentLink::Entered(edge.direction));
            current = edge.child;
        }
    }

    /// Scan for the next unvisited cell adjacent to the carved region
    ///
    /// Returns the edge from the visited neighbor (parent) into the unvisited
    /// cell (child), or `None` when the grid is fully carved. The cursor only
    /// moves past cells that can never become hunt targets again; an
    /// unvisited cell without visited neighbors stays ahead of the cursor and
    /// is rescanned on a later hunt.
    fn hunt(&mut self) -> Option<Edge> {
        let total = self.grid.len();

        while self.hunt_cursor < total && self.grid.is_visited(self.cell_at(self.hunt_cursor)) {
            self.hunt_cursor += 1;
        }

        let mut index = self.hunt_cursor;
        while index < total {
            let cell = self.cell_at(index);
            if !self.grid.is_visited(cell) {
                let visited_neighbors = candidate_edges(&self.grid, cell, true);
                // Candidates are consulted newest-first
                if let Some(edge) = visited_neighbors.last() {
                    if index == self.hunt_cursor {
                        self.hunt_cursor += 1;
                    }
                    return Some(Edge::new(edge.child, edge.direction.reversed()));
                }
            }
            index += 1;
        }

        None
    }

    const fn cell_at(&self, index: usize) -> Cell {
        let width = self.grid.width();
        Cell::new((index % width) as i32, (index / width) as i32)
    }
}
