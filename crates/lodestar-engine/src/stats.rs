//! Per-run search counters.
//!
//! [`SearchStats`] captures how much work a run has done so far, enabling
//! progress displays and performance assertions in tests. Counters are
//! zeroed by `start` and accumulate across every subsequent step of that
//! run.

/// Counters for a single search run.
///
/// The engine populates these fields as the run advances; read them back
/// through `SearchEngine::stats` at any point, mid-run or after a
/// terminal status.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    /// `step` calls that advanced a running search, including the final
    /// call that discovers an exhausted frontier.
    pub steps: u64,
    /// Cells moved from the open set to the closed set.
    pub expanded: u64,
    /// Relaxation writes: a neighbour's `g`/`parent` was set, either on
    /// first discovery or because a cheaper route to an open cell
    /// appeared. With unit step costs the second case cannot occur, so
    /// on any run this equals the number of cells discovered through
    /// expansion.
    pub relaxed: u64,
    /// Largest size the open set reached.
    pub peak_open: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let stats = SearchStats::default();
        assert_eq!(stats.steps, 0);
        assert_eq!(stats.expanded, 0);
        assert_eq!(stats.relaxed, 0);
        assert_eq!(stats.peak_open, 0);
    }
}
