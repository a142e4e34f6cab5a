//! Search lifecycle status.

use std::fmt;

/// Lifecycle status of a search run.
///
/// The only transitions are `Idle -> Running` (a successful engine
/// `start`, which also re-arms from either terminal state),
/// `Running -> Succeeded` and `Running -> Failed`. Stepping an engine
/// that is not `Running` is a no-op that reports the current status
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// No run has been started yet.
    Idle,
    /// A run is in progress; each step expands at most one cell.
    Running,
    /// The goal was expanded and a path has been reconstructed.
    Succeeded,
    /// The frontier emptied (or reconstruction failed); no path exists.
    Failed,
}

impl SearchStatus {
    /// True for [`Succeeded`](Self::Succeeded) and [`Failed`](Self::Failed).
    ///
    /// Terminal states persist until the next successful start; stepping
    /// through them is a no-op.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
