//! Grid instance identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`GridInstanceId`] allocation.
static GRID_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a grid.
///
/// Allocated from a monotonic atomic counter via [`GridInstanceId::next`].
/// Two distinct grid instances always have different IDs, even when their
/// dimensions and walls are identical. The search engine records the ID of
/// the grid it was started on and refuses to advance against any other
/// instance, so a caller cannot accidentally step a run across a grid it
/// never seeded.
///
/// Grids carry mutable per-cell search state, so cloning one allocates a
/// fresh ID rather than sharing the original's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridInstanceId(u64);

impl GridInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(GRID_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GridInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
