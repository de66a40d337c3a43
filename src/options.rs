//! Configuration options for tree copies.
//!
//! # Example
//!
//! ```
//! use pkgcopy::CopyOptions;
//!
//! let options = CopyOptions::default().with_tests();
//! assert!(options.include_tests);
//! ```

/// Options for [`copy_tree`](crate::copy_tree).
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `include_tests` | `false` | Drop `*_test.go`, `testdata`, `_testdata` |
/// | `warn_handler` | `None` | Warnings go to `tracing` (if enabled) |
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyOptions {
    /// Whether to copy test files and test data directories (default: false)
    pub include_tests: bool,

    /// Callback for warnings (optional)
    ///
    /// If not set and `tracing` feature is enabled, warnings are logged via tracing.
    /// Otherwise, warnings are silently ignored.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warn_handler: Option<fn(&str)>,
}

impl CopyOptions {
    /// Copy `*_test.go` files and `testdata`/`_testdata` directories too
    #[must_use]
    pub fn with_tests(mut self) -> Self {
        self.include_tests = true;
        self
    }

    /// Create options with a warning handler
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }
}
