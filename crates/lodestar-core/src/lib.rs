//! Core types for the Lodestar grid search toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid and engine crates: cell positions,
//! grid instance identity, and the search lifecycle status.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod pos;
pub mod status;

pub use id::GridInstanceId;
pub use pos::Pos;
pub use status::SearchStatus;
