//! Error types for grid construction and editing.

use lodestar_core::Pos;
use std::fmt;

/// Errors arising from grid construction or cell edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension was zero or negative.
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// A dimension exceeds [`Grid::MAX_DIM`](crate::Grid::MAX_DIM).
    DimensionTooLarge {
        /// Which axis ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: i32,
        /// The maximum allowed.
        max: i32,
    },
    /// A position is outside the bounds of the grid.
    OutOfBounds {
        /// The offending position.
        pos: Pos,
        /// Grid width.
        width: i32,
        /// Grid height.
        height: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} out of bounds for {width}x{height} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
