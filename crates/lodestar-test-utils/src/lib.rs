//! Test fixtures and oracles for Lodestar development.
//!
//! Provides ASCII map parsing and rendering ([`grid_from_ascii`],
//! [`render_grid`]) so scenario tests can draw their boards instead of
//! listing wall coordinates, plus a breadth-first [`bfs_distances`]
//! oracle for cross-checking search costs against ground truth.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{bfs_distances, grid_from_ascii, render_grid};
