//! Lodestar: observable grid pathfinding, one step at a time.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Lodestar sub-crates. For most users, adding `lodestar` as a single
//! dependency is sufficient.
//!
//! Lodestar runs A* over a rectangular grid of walkable and blocked cells, but
//! unlike a conventional pathfinding library it does not hide the search
//! behind a single call. The engine advances one expansion per [`step`] and
//! leaves its working state readable between calls: the open frontier, the
//! closed set, per-cell costs and parents, and the reconstructed path are all
//! inspectable at any point. That makes it suited to visualisers, debuggers,
//! and teaching tools as much as to plain route queries, which
//! [`run_to_completion`] still serves in one call.
//!
//! [`step`]: engine::SearchEngine::step
//! [`run_to_completion`]: engine::SearchEngine::run_to_completion
//!
//! # Quick start
//!
//! ```rust
//! use lodestar::prelude::*;
//!
//! // A 5×5 board with no walls.
//! let mut grid = Grid::builder(5, 5)
//!     .start(Pos::new(0, 0))
//!     .goal(Pos::new(4, 4))
//!     .build()?;
//!
//! let mut engine = SearchEngine::new();
//! engine.start(&mut grid, Pos::new(0, 0), Pos::new(4, 4))?;
//! let status = engine.run_to_completion(&mut grid, None)?;
//!
//! assert_eq!(status, SearchStatus::Succeeded);
//! // Manhattan-optimal route: 8 moves, 9 cells including both endpoints.
//! assert_eq!(engine.path().len(), 9);
//! assert_eq!(grid.cell(Pos::new(4, 4)).g, 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lodestar-core` | Positions, grid instance IDs, search status |
//! | [`grid`] | `lodestar-grid` | The grid, its cells, builder, and rendering hooks |
//! | [`engine`] | `lodestar-engine` | The step-wise A* engine and its statistics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types shared by every layer (`lodestar-core`).
///
/// Contains [`types::Pos`] coordinates, [`types::GridInstanceId`] identity
/// tokens, and the [`types::SearchStatus`] lifecycle enum.
pub use lodestar_core as types;

/// Grid storage and editing (`lodestar-grid`).
///
/// Provides the [`grid::Grid`] itself, per-cell search annotations on
/// [`grid::Cell`], the validating [`grid::GridBuilder`], and
/// [`grid::CellClass`] for renderers.
pub use lodestar_grid as grid;

/// The step-wise search engine (`lodestar-engine`).
///
/// [`engine::SearchEngine`] owns a run's frontier, closed set, and path;
/// [`engine::SearchStats`] counts its work.
pub use lodestar_engine as engine;

/// Common imports for typical Lodestar usage.
///
/// ```rust
/// use lodestar::prelude::*;
/// ```
///
/// This imports the most frequently used types: the grid and its builder,
/// the engine, and the core coordinate and status types.
pub mod prelude {
    // Core types
    pub use lodestar_core::{GridInstanceId, Pos, SearchStatus};

    // Grid
    pub use lodestar_grid::{Cell, CellClass, Grid, GridBuilder, GridError};

    // Engine
    pub use lodestar_engine::{EndpointError, SearchEngine, SearchError, SearchStats};
}
