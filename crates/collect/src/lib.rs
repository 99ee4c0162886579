//! File discovery for the unused asset scan.
//!
//! Walks a project tree, pruning well-known tool directories, and returns
//! every file whose name ends with one of a configured set of extensions.

pub mod error;
mod path;
mod walk;

pub use crate::path::relative as relative_path;
pub use crate::walk::{Collector, DEFAULT_EXCLUDED_DIRS};
