//! Step-wise A* search engine over Lodestar grids.
//!
//! Provides [`SearchEngine`], a resumable A* run that expands exactly one
//! cell per [`step`](SearchEngine::step) and leaves its open set, closed
//! set, and reconstructed path readable between calls. Pacing is the
//! caller's business: render a frame per step, burst through
//! [`run_to_completion`](SearchEngine::run_to_completion), or anything in
//! between.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod stats;

pub use engine::SearchEngine;
pub use error::{EndpointError, SearchError};
pub use stats::SearchStats;
