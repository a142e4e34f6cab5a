//! Cell positions on a rectangular grid.

use std::fmt;

/// A cell position on a rectangular grid.
///
/// Coordinates are signed so that neighbour arithmetic at the grid
/// boundary stays in range: `(0, 0).offset(-1, 0)` is a representable
/// (if out-of-bounds) position rather than an underflow. Containment
/// checks belong to the grid, not to the position itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column index, growing rightward from zero.
    pub x: i32,
    /// Row index, growing downward from zero.
    pub y: i32,
}

impl Pos {
    /// Creates a position from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance to `other`.
    ///
    /// This is the exact path cost between the two cells on an
    /// unobstructed 4-connected grid with unit step cost, which makes
    /// it an admissible and consistent heuristic for such grids.
    pub fn manhattan(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
