//! Grid container and per-cell search annotations for Lodestar.
//!
//! This crate defines [`Grid`] — a rectangular board of [`Cell`]s that
//! doubles as the searchable map (walls) and the search's working memory
//! (costs, parent links, membership flags). The engine crate mutates the
//! annotations; callers read them back between steps to inspect or render
//! the search frontier.
//!
//! # Layout
//!
//! Cells are stored row-major: `(x, y)` lives at index `y * width + x`.
//! `x` grows rightward and `y` grows downward, so the first text line of
//! an ASCII rendering is row `y = 0`.
//!
//! # Rendering
//!
//! [`Grid::classify`] collapses a cell's overlapping roles (a wall that is
//! also marked open, a start cell that is also closed) into the single
//! [`CellClass`] a renderer should draw, with a fixed precedence.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::{Cell, CellClass};
pub use error::GridError;
pub use grid::{Grid, GridBuilder};
