//! Builder API for tree copies.
//!
//! The builder pattern provides a fluent interface for configuring and
//! executing [`copy_tree`]. This is often more convenient than constructing
//! [`CopyOptions`] by hand.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use pkgcopy::CopyBuilder;
//!
//! // Library sources only, no tests
//! let stats = CopyBuilder::new("src/github.com/pkg/errors", "vendor/github.com/pkg/errors").run()?;
//! println!("Copied {} files", stats.files_copied);
//! # Ok::<(), pkgcopy::Error>(())
//! ```
//!
//! ## Keeping Tests
//!
//! ```no_run
//! use pkgcopy::CopyBuilder;
//!
//! let stats = CopyBuilder::new("src", "dst")
//!     .include_tests()
//!     .on_warning(|msg| eprintln!("warning: {}", msg))
//!     .run()?;
//! # Ok::<(), pkgcopy::Error>(())
//! ```

use crate::copy::{CopyStats, copy_tree};
use crate::error::Result;
use crate::options::CopyOptions;
use std::path::{Path, PathBuf};

/// A builder for configuring and executing a filtered tree copy.
#[derive(Debug, Clone)]
pub struct CopyBuilder {
    src: PathBuf,
    dst: PathBuf,
    options: CopyOptions,
}

impl CopyBuilder {
    /// Create a new `CopyBuilder` with the given source and destination paths.
    ///
    /// Uses default options (tests excluded, warnings to `tracing`).
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Self {
        Self {
            src: src.as_ref().to_path_buf(),
            dst: dst.as_ref().to_path_buf(),
            options: CopyOptions::default(),
        }
    }

    /// Copy `*_test.go` files and `testdata`/`_testdata` directories too.
    #[must_use]
    pub fn include_tests(mut self) -> Self {
        self.options = self.options.with_tests();
        self
    }

    /// Leave test files and test data out (default behavior).
    #[must_use]
    pub fn exclude_tests(mut self) -> Self {
        self.options.include_tests = false;
        self
    }

    /// Set a warning handler for non-fatal issues.
    ///
    /// The handler is called for skipped special files and for a failed
    /// cleanup after an aborted copy.
    #[must_use]
    pub fn on_warning(mut self, handler: fn(&str)) -> Self {
        self.options = self.options.with_warn_handler(handler);
        self
    }

    /// Get a reference to the current options.
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Execute the copy.
    ///
    /// # Errors
    ///
    /// See [`copy_tree`]. On error the destination has been removed.
    pub fn run(self) -> Result<CopyStats> {
        copy_tree(&self.src, &self.dst, &self.options)
    }
}

// =============================================================================
// Tests
// =============================================================================
