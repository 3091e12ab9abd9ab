//! Grid coordinates and the shared direction-to-offset mapping

/// Axis-aligned direction between adjacent grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negative x
    Left,
    /// Positive x
    Right,
    /// Negative y
    Up,
    /// Positive y
    Down,
}

impl Direction {
    /// The opposite direction
    pub const fn reversed(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Unit offset `(dx, dy)` for this direction
    ///
    /// Single source of truth for the direction-to-offset mapping. Both the
    /// carving phase (`Cell::moved`) and the rendering phase (wall pixel
    /// placement) derive their offsets from this table, so the two phases
    /// cannot drift apart.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }
}

/// Zero-based grid coordinate pair
///
/// Immutable value type; translation produces a new cell. No bounds checking
/// is performed here, callers validate against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Cell {
    /// Create a cell at the given coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one unit away in the given direction
    pub const fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.step();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Directed candidate connection between two adjacent cells
///
/// `child` is always `parent.moved(direction)`. Edges are transient: they
/// describe candidate moves during carving and hunt targets, and are never
/// stored in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Starting cell
    pub parent: Cell,
    /// Direction of travel from parent to child
    pub direction: Direction,
    /// Resulting adjacent cell
    pub child: Cell,
}

impl Edge {
    /// Create an edge from a parent cell along a direction
    pub const fn new(parent: Cell, direction: Direction) -> Self {
        Self {
            parent,
            direction,
            child: parent.moved(direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_offsets() {
        let cell = Cell::new(3, 5);
        assert_eq!(cell.moved(Direction::Left), Cell::new(2, 5));
        assert_eq!(cell.moved(Direction::Right), Cell::new(4, 5));
        assert_eq!(cell.moved(Direction::Up), Cell::new(3, 4));
        assert_eq!(cell.moved(Direction::Down), Cell::new(3, 6));
    }

    #[test]
    fn test_reversed_is_involutive() {
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(direction.reversed().reversed(), direction);

            let (dx, dy) = direction.step();
            let (rx, ry) = direction.reversed().step();
            assert_eq!((dx + rx, dy + ry), (0, 0));
        }
    }

    #[test]
    fn test_edge_child_matches_direction() {
        let edge = Edge::new(Cell::new(1, 1), Direction::Down);
        assert_eq!(edge.child, Cell::new(1, 2));
        assert_eq!(edge.parent.moved(edge.direction), edge.child);
    }
}
