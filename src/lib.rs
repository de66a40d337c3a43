//! # pkgcopy
//!
//! Copy Go package source trees, keeping only the files the Go toolchain
//! reads.
//!
//! ## Core Features
//!
//! - **Filtered copying**: Only `.go`, C/C++/Objective-C sources and headers,
//!   assembler, SWIG and `.syso` files are copied
//! - **go tool ignore rules**: Hidden (`.`) and underscore (`_`) entries are
//!   skipped, except `_testdata`
//! - **Optional tests**: `*_test.go`, `testdata` and `_testdata` are copied
//!   only on request
//! - **Symlink aware**: Symlinks are recreated with their literal target,
//!   never followed
//! - **No partial trees**: A failed copy removes the destination before
//!   returning the error
//! - **Read-only tolerant removal**: [`remove_all`] clears read-only
//!   attributes on platforms that refuse to delete such files
//!
//! ## Quick Start with Builder API
//!
//! ```no_run
//! use pkgcopy::CopyBuilder;
//!
//! let stats = CopyBuilder::new("gopath/src/example.com/lib", "vendor/example.com/lib").run()?;
//! println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
//! # Ok::<(), pkgcopy::Error>(())
//! ```
//!
//! ## Function API
//!
//! ```no_run
//! use pkgcopy::{copy_tree, CopyOptions};
//! use std::path::Path;
//!
//! let options = CopyOptions::default().with_tests();
//! let stats = copy_tree(Path::new("src"), Path::new("dst"), &options)?;
//! println!("Copied {} files, filtered {}", stats.files_copied, stats.files_filtered);
//! # Ok::<(), pkgcopy::Error>(())
//! ```
//!
//! The name rules are available on their own in [`filter`].
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod copy;
mod error;
pub mod filter;
mod options;
mod remove;

pub use builder::CopyBuilder;
pub use copy::{CopyStats, copy_file, copy_link, copy_tree};
pub use error::{Error, Result};
pub use options::CopyOptions;
pub use remove::{needs_permission_repair, remove_all, remove_all_with};
