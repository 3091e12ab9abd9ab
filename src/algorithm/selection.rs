//! Candidate edge enumeration and intensity-scored selection
//!
//! Replaces the canonical hunt-and-kill uniform-random tie-break with a
//! deterministic score: the intensity difference between the candidate child
//! and its parent. The selection order is an observable part of the output
//! and must not change.

use crate::algorithm::intensity::IntensityField;
use crate::spatial::cell::{Cell, Direction, Edge};
use crate::spatial::grid::MazeGrid;

/// Enumeration order for candidate neighbors
///
/// Candidates are collected in this order and consulted newest-first, so on
/// equal scores later directions win (down over up over right over left).
/// This tie-break is deterministic and reproducible, not random.
pub const CANDIDATE_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

/// Collect in-bounds neighbors of a cell matching the given visited status
///
/// Returns candidate edges in `CANDIDATE_ORDER`; consumers iterate them in
/// reverse to honor the newest-first consultation order.
pub fn candidate_edges(grid: &MazeGrid, cell: Cell, visited: bool) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(CANDIDATE_ORDER.len());

    for direction in CANDIDATE_ORDER {
        let edge = Edge::new(cell, direction);
        if grid.contains(edge.child) && grid.is_visited(edge.child) == visited {
            edges.push(edge);
        }
    }

    edges
}

/// Score a candidate edge by the intensity gradient it follows
///
/// Positive scores point toward locally brighter packed values, biasing the
/// walk along the image's gradient structure.
pub fn score_edge(field: &IntensityField, edge: &Edge) -> i64 {
    field.sample(edge.child) - field.sample(edge.parent)
}

/// Select the strictly best-scoring candidate edge
///
/// Candidates are consulted newest-first and only a strictly greater score
/// displaces the current best, so ties keep the first candidate consulted.
/// Returns `None` when no candidates remain, which ends the walk.
pub fn select_edge(field: &IntensityField, candidates: &[Edge]) -> Option<Edge> {
    let mut best = None;
    let mut best_score = i64::MIN;

    for edge in candidates.iter().rev() {
        let score = score_edge(field, edge);
        if score > best_score {
            best_score = score;
            best = Some(*edge);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::grid::ParentLink;
    use ndarray::Array2;

    fn uniform_field() -> IntensityField {
        IntensityField::from_values(Array2::zeros((7, 7)))
    }

    #[test]
    fn test_candidate_edges_respect_bounds_and_order() {
        let grid = MazeGrid::new(3, 3);
        let edges = candidate_edges(&grid, Cell::new(0, 0), false);

        // Left and up are out of bounds at the corner
        assert_eq!(edges.len(), 2);
        assert_eq!(edges.first().map(|e| e.direction), Some(Direction::Right));
        assert_eq!(edges.get(1).map(|e| e.direction), Some(Direction::Down));
    }

    #[test]
    fn test_candidate_edges_filter_by_visited() {
        let mut grid = MazeGrid::new(3, 3);
        grid.visit(Cell::new(1, 0), ParentLink::Root);

        let unvisited = candidate_edges(&grid, Cell::new(1, 1), false);
        assert_eq!(unvisited.len(), 3);
        assert!(unvisited.iter().all(|e| e.child != Cell::new(1, 0)));

        let visited = candidate_edges(&grid, Cell::new(1, 1), true);
        assert_eq!(visited.len(), 1);
        assert_eq!(visited.first().map(|e| e.child), Some(Cell::new(1, 0)));
    }

    #[test]
    fn test_tie_break_prefers_newest_candidate() {
        let grid = MazeGrid::new(3, 3);
        let field = uniform_field();

        // All scores are zero: the last-collected candidate (down) must win
        let candidates = candidate_edges(&grid, Cell::new(1, 1), false);
        assert_eq!(candidates.len(), 4);
        let chosen = select_edge(&field, &candidates);
        assert_eq!(chosen.map(|e| e.direction), Some(Direction::Down));
    }

    #[test]
    fn test_strictly_greater_score_wins() {
        let grid = MazeGrid::new(3, 3);

        // Brighten the pixel under cell (2, 1) so the rightward edge scores highest
        let mut values = Array2::zeros((7, 7));
        if let Some(value) = values.get_mut((3, 5)) {
            *value = 100;
        }
        let field = IntensityField::from_values(values);

        let candidates = candidate_edges(&grid, Cell::new(1, 1), false);
        let chosen = select_edge(&field, &candidates);
        assert_eq!(chosen.map(|e| e.direction), Some(Direction::Right));
    }

    #[test]
    fn test_no_candidates_yields_none() {
        let field = uniform_field();
        assert_eq!(select_edge(&field, &[]), None);
    }
}
