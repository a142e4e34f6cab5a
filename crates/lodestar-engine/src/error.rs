//! Error types for search runs.

use lodestar_core::{GridInstanceId, Pos};
use std::error::Error;
use std::fmt;

/// Errors from starting or advancing a search run.
///
/// Exhausting the frontier is deliberately *not* represented here: "no
/// path exists" is the `Failed` terminal status, a normal outcome the
/// caller is expected to handle, not an error to propagate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The requested endpoints cannot seed a run.
    InvalidEndpoints {
        /// What is wrong with them.
        reason: EndpointError,
    },
    /// `step` was handed a grid other than the one the run was started on.
    GridMismatch {
        /// Identity of the grid bound at `start`.
        expected: GridInstanceId,
        /// Identity of the grid actually passed.
        actual: GridInstanceId,
    },
    /// Path reconstruction walked more parent links than the grid has
    /// cells, or a parent link left the grid.
    ///
    /// Either means the parent relation was corrupted between steps;
    /// the run moves to `Failed` and its path stays empty.
    CorruptParentChain {
        /// The hop cap that was exceeded (cell count + 1).
        limit: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints { reason } => {
                write!(f, "invalid endpoints: {reason}")
            }
            Self::GridMismatch { expected, actual } => {
                write!(
                    f,
                    "grid instance {actual} is not the bound instance {expected}"
                )
            }
            Self::CorruptParentChain { limit } => {
                write!(f, "parent chain exceeded {limit} hops during reconstruction")
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEndpoints { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Why a pair of endpoints was rejected by `start`.
///
/// Wrapped in [`SearchError::InvalidEndpoints`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointError {
    /// The endpoint lies outside the grid.
    OutOfBounds {
        /// `"start"` or `"goal"`.
        role: &'static str,
        /// The offending position.
        pos: Pos,
    },
    /// Start and goal are the same cell.
    Identical {
        /// The shared position.
        pos: Pos,
    },
    /// The endpoint cell is a wall at start time.
    ///
    /// Only start time matters: once a run is underway its endpoints are
    /// treated as walkable regardless of later wall edits.
    Blocked {
        /// `"start"` or `"goal"`.
        role: &'static str,
        /// The offending position.
        pos: Pos,
    },
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { role, pos } => write!(f, "{role} {pos} is out of bounds"),
            Self::Identical { pos } => write!(f, "start and goal are both {pos}"),
            Self::Blocked { role, pos } => write!(f, "{role} {pos} is blocked"),
        }
    }
}

impl Error for EndpointError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_endpoints_exposes_reason_as_source() {
        let err = SearchError::InvalidEndpoints {
            reason: EndpointError::Identical {
                pos: Pos::new(2, 2),
            },
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("start and goal are both (2, 2)"));
    }

    #[test]
    fn display_messages_name_the_offender() {
        let err = SearchError::InvalidEndpoints {
            reason: EndpointError::Blocked {
                role: "goal",
                pos: Pos::new(4, 1),
            },
        };
        assert_eq!(err.to_string(), "invalid endpoints: goal (4, 1) is blocked");
    }
}
