//! Core copy operations.
//!
//! This module provides the filtered tree copy and the single file and
//! symlink copiers it is built on.

mod file;
mod link;
mod tree;
mod utils;

// Re-export public API
pub use file::copy_file;
pub use link::copy_link;
pub use tree::{CopyStats, copy_tree};
