//! Resumable A* search over a grid.
//!
//! [`SearchEngine`] is the primary user-facing API. A run is started with
//! explicit endpoints, then advanced one expansion at a time via
//! [`step()`](SearchEngine::step); between steps the open set, closed
//! set, per-cell annotations, and (after success) the reconstructed path
//! are all readable. Nothing inside the engine does I/O, takes time, or
//! spawns threads: suspension is simply the caller not calling `step`.
//!
//! # Ownership model
//!
//! The engine does not own the grid. Every mutating call borrows it
//! (`&mut Grid`) for exactly that call, so a caller can render, edit
//! walls, or clone the grid between steps without fighting the borrow
//! checker. The price of that freedom is an identity check: `start`
//! records the grid's [`GridInstanceId`] and every later `step` refuses
//! any other instance, turning "stepped the wrong grid" into a typed
//! error instead of silently mixed annotations.
//!
//! # Determinism
//!
//! Two runs over identical boards and endpoints expand identical cell
//! sequences. Frontier ties are broken by insertion order (earliest
//! enqueued wins), and insertion order is fixed by the grid's neighbour
//! order, so there is no hidden iteration-order nondeterminism to leak
//! through.

use indexmap::IndexSet;
use lodestar_core::{GridInstanceId, Pos, SearchStatus};
use lodestar_grid::Grid;

use crate::error::{EndpointError, SearchError};
use crate::stats::SearchStats;

// ── RunBinding ──────────────────────────────────────────────────

/// Identity and endpoints of the run in progress.
#[derive(Clone, Copy, Debug)]
struct RunBinding {
    grid: GridInstanceId,
    start: Pos,
    goal: Pos,
}

// ── SearchEngine ────────────────────────────────────────────────

/// A step-wise A* run over one grid.
///
/// Created idle via [`new()`](SearchEngine::new). A successful
/// [`start()`](SearchEngine::start) seeds the frontier and moves the
/// engine to `Running`; each [`step()`](SearchEngine::step) then expands
/// at most one cell until the run ends in `Succeeded` or `Failed`.
/// Terminal states persist, and stepping through them is a harmless
/// no-op, until the next `start` re-arms the engine (on the same grid or
/// a different one).
///
/// # Example
///
/// ```
/// use lodestar_core::{Pos, SearchStatus};
/// use lodestar_engine::SearchEngine;
/// use lodestar_grid::Grid;
///
/// let mut grid = Grid::new(5, 5).unwrap();
/// let mut engine = SearchEngine::new();
/// engine
///     .start(&mut grid, Pos::new(0, 0), Pos::new(4, 4))
///     .unwrap();
/// let status = engine.run_to_completion(&mut grid, None).unwrap();
/// assert_eq!(status, SearchStatus::Succeeded);
/// assert_eq!(engine.path().len(), 9);
/// ```
pub struct SearchEngine {
    status: SearchStatus,
    open: IndexSet<Pos>,
    closed: IndexSet<Pos>,
    path: Vec<Pos>,
    binding: Option<RunBinding>,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create an idle engine with empty sets and zeroed counters.
    pub fn new() -> Self {
        Self {
            status: SearchStatus::Idle,
            open: IndexSet::new(),
            closed: IndexSet::new(),
            path: Vec::new(),
            binding: None,
            stats: SearchStats::default(),
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Frontier cells in insertion order (earliest enqueued first).
    pub fn open_set(&self) -> impl Iterator<Item = Pos> + '_ {
        self.open.iter().copied()
    }

    /// Finalized cells in the order they were expanded.
    pub fn closed_set(&self) -> impl Iterator<Item = Pos> + '_ {
        self.closed.iter().copied()
    }

    /// The reconstructed path, ordered start to goal.
    ///
    /// Empty unless the run has `Succeeded`.
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// Counters for the current or most recent run.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Begin a run from `start` to `goal` on `grid`.
    ///
    /// Validation happens before any state is touched: on error the
    /// engine keeps its prior status, sets, and path, and the grid keeps
    /// every annotation — a failed `start` after a successful run does
    /// not disturb the finished run's results.
    ///
    /// On success the grid's annotations are reset, the engine binds the
    /// grid's identity, the frontier becomes `{start}` with `g = 0` and
    /// `h` the Manhattan distance to `goal`, counters are zeroed, and
    /// the status becomes `Running`.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidEndpoints`] when either endpoint is out of
    /// bounds, both are the same cell, or either is blocked at start
    /// time. Walls painted onto an endpoint *after* a run begins are
    /// ignored by traversal instead; see [`step()`](SearchEngine::step).
    pub fn start(&mut self, grid: &mut Grid, start: Pos, goal: Pos) -> Result<(), SearchError> {
        if !grid.contains(start) {
            return Err(SearchError::InvalidEndpoints {
                reason: EndpointError::OutOfBounds {
                    role: "start",
                    pos: start,
                },
            });
        }
        if !grid.contains(goal) {
            return Err(SearchError::InvalidEndpoints {
                reason: EndpointError::OutOfBounds {
                    role: "goal",
                    pos: goal,
                },
            });
        }
        if start == goal {
            return Err(SearchError::InvalidEndpoints {
                reason: EndpointError::Identical { pos: start },
            });
        }
        if grid.cell(start).blocked {
            return Err(SearchError::InvalidEndpoints {
                reason: EndpointError::Blocked {
                    role: "start",
                    pos: start,
                },
            });
        }
        if grid.cell(goal).blocked {
            return Err(SearchError::InvalidEndpoints {
                reason: EndpointError::Blocked {
                    role: "goal",
                    pos: goal,
                },
            });
        }

        grid.reset_annotations();
        self.open.clear();
        self.closed.clear();
        self.path.clear();
        self.stats = SearchStats::default();
        self.binding = Some(RunBinding {
            grid: grid.instance_id(),
            start,
            goal,
        });

        let cell = grid.cell_mut(start);
        cell.g = 0;
        cell.h = Some(start.manhattan(goal));
        cell.in_open = true;
        self.open.insert(start);
        self.stats.peak_open = 1;
        self.status = SearchStatus::Running;

        tracing::debug!(grid = %grid.instance_id(), %start, %goal, "search started");
        Ok(())
    }

    /// Advance a running search by exactly one expansion.
    ///
    /// The cheapest frontier cell (minimum `f`, ties to the earliest
    /// enqueued) moves to the closed set. If it is the goal, the path is
    /// reconstructed and the run ends `Succeeded`; otherwise its
    /// neighbours are relaxed and the run stays `Running`. An empty
    /// frontier ends the run `Failed` — that is the "no path" outcome,
    /// not an error.
    ///
    /// When the status is not `Running` the call is a no-op that returns
    /// the current status, so render loops may over-step freely.
    ///
    /// Blocked neighbours are never entered, with one exception: the
    /// run's own endpoints are always treated as walkable, so wall edits
    /// made mid-run (against the documented contract) cannot strand the
    /// search inside a wall.
    ///
    /// # Errors
    ///
    /// [`SearchError::GridMismatch`] when `grid` is not the instance the
    /// run was started on (the run itself is left untouched and stays
    /// `Running`). [`SearchError::CorruptParentChain`] when path
    /// reconstruction detects a broken parent relation; the run moves to
    /// `Failed` and the path stays empty.
    pub fn step(&mut self, grid: &mut Grid) -> Result<SearchStatus, SearchError> {
        if self.status != SearchStatus::Running {
            return Ok(self.status);
        }
        let binding = match self.binding {
            Some(binding) => binding,
            // start() is the only entry into Running and always installs
            // the binding, so a running engine cannot lack one.
            None => return Ok(self.status),
        };
        if grid.instance_id() != binding.grid {
            return Err(SearchError::GridMismatch {
                expected: binding.grid,
                actual: grid.instance_id(),
            });
        }
        self.stats.steps += 1;

        let current = match self.best_open(grid) {
            Some(pos) => pos,
            None => {
                self.status = SearchStatus::Failed;
                tracing::debug!(
                    steps = self.stats.steps,
                    expanded = self.stats.expanded,
                    "frontier exhausted without reaching the goal"
                );
                return Ok(self.status);
            }
        };

        self.open.shift_remove(&current);
        self.closed.insert(current);
        {
            let cell = grid.cell_mut(current);
            cell.in_open = false;
            cell.in_closed = true;
        }
        self.stats.expanded += 1;

        if current == binding.goal {
            match self.reconstruct(grid, binding.goal) {
                Ok(()) => {
                    self.status = SearchStatus::Succeeded;
                    tracing::debug!(
                        path_len = self.path.len(),
                        cost = grid.cell(binding.goal).g,
                        expanded = self.stats.expanded,
                        "goal reached"
                    );
                }
                Err(err) => {
                    self.status = SearchStatus::Failed;
                    tracing::warn!(error = %err, "path reconstruction failed");
                    return Err(err);
                }
            }
            return Ok(self.status);
        }

        self.relax_neighbours(grid, current, binding);
        self.stats.peak_open = self.stats.peak_open.max(self.open.len());
        Ok(self.status)
    }

    /// Step until the run leaves `Running` or the budget runs out.
    ///
    /// With `max_steps = None` the loop is unbounded; the search space is
    /// finite and cells are never reopened, so it always terminates. A
    /// budget of `Some(n)` performs at most `n` steps and may return with
    /// the run still `Running`. Calling this on a non-running engine is
    /// the same no-op as [`step()`](SearchEngine::step).
    ///
    /// # Errors
    ///
    /// Whatever the failing `step` returned, at the point it failed.
    pub fn run_to_completion(
        &mut self,
        grid: &mut Grid,
        max_steps: Option<u64>,
    ) -> Result<SearchStatus, SearchError> {
        let mut remaining = max_steps;
        while self.status == SearchStatus::Running {
            if let Some(budget) = remaining.as_mut() {
                if *budget == 0 {
                    break;
                }
                *budget -= 1;
            }
            self.step(grid)?;
        }
        Ok(self.status)
    }

    /// Frontier cell with minimum `f`; ties go to the earliest enqueued.
    ///
    /// A linear scan of the insertion-ordered set with a strict `<` is
    /// exactly the stable first-found minimum the tie-break contract
    /// requires, and the frontier stays small enough at interactive
    /// scales that a keyed heap would buy nothing.
    fn best_open(&self, grid: &Grid) -> Option<Pos> {
        let mut best: Option<(Pos, u32)> = None;
        for &pos in &self.open {
            let f = grid.cell(pos).f();
            match best {
                Some((_, best_f)) if f >= best_f => {}
                _ => best = Some((pos, f)),
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Offer `current` as predecessor to each of its neighbours.
    fn relax_neighbours(&mut self, grid: &mut Grid, current: Pos, binding: RunBinding) {
        let current_g = grid.cell(current).g;
        for next in grid.neighbours(current) {
            if self.closed.contains(&next) {
                continue;
            }
            if grid.cell(next).blocked && next != binding.start && next != binding.goal {
                continue;
            }
            let tentative = current_g + 1;
            let in_open = self.open.contains(&next);
            if in_open && tentative >= grid.cell(next).g {
                continue;
            }
            let cell = grid.cell_mut(next);
            cell.g = tentative;
            if cell.h.is_none() {
                cell.h = Some(next.manhattan(binding.goal));
            }
            cell.parent = Some(current);
            if !in_open {
                cell.in_open = true;
                // A relaxed cell that is already open keeps its original
                // queue position; only fresh discoveries append.
                self.open.insert(next);
            }
            self.stats.relaxed += 1;
        }
    }

    /// Walk parent links goal-to-start, then publish the path.
    ///
    /// The walk is capped at one hop more than the grid has cells; a
    /// longer chain, or a parent link that leaves the grid, means the
    /// relation is corrupt. `on_path` marks and the path vector are
    /// written only after the whole walk succeeds, so a failed
    /// reconstruction leaves no partial path behind.
    fn reconstruct(&mut self, grid: &mut Grid, goal: Pos) -> Result<(), SearchError> {
        let limit = grid.cell_count() + 1;
        let mut chain = Vec::new();
        let mut cursor = Some(goal);
        while let Some(pos) = cursor {
            if chain.len() >= limit || !grid.contains(pos) {
                return Err(SearchError::CorruptParentChain { limit });
            }
            chain.push(pos);
            cursor = grid.cell(pos).parent;
        }
        chain.reverse();
        for &pos in &chain {
            grid.cell_mut(pos).on_path = true;
        }
        self.path = chain;
        Ok(())
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("status", &self.status)
            .field("open", &self.open.len())
            .field("closed", &self.closed.len())
            .field("path", &self.path.len())
            .field("binding", &self.binding)
            .finish()
    }
}
