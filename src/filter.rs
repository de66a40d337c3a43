//! Name-based inclusion policy for Go package trees.
//!
//! The rules follow `go help packages`: directories and files whose names
//! begin with `.` or `_` are ignored by the go tool, as are `testdata`
//! directories. `_testdata` is the one underscore name that is kept, and
//! only when tests are wanted.
//!
//! All checks operate on a single path component (the base name) and are
//! exact, case-sensitive byte comparisons.
//!
//! # Example
//!
//! ```
//! use pkgcopy::filter::{is_excluded, is_go_file};
//!
//! assert!(is_go_file("main.go"));
//! assert!(!is_go_file("setup.py"));
//! assert!(is_excluded(".git", true));
//! assert!(is_excluded("main_test.go", false));
//! assert!(!is_excluded("main_test.go", true));
//! ```

use std::ffi::OsStr;

/// File extensions the go tool reads when building a package.
///
/// See <https://golang.org/cmd/go/#hdr-File_types>.
pub const GO_FILE_TYPES: &[&str] = &[
    ".go", ".c", ".h", ".cc", ".cpp", ".cxx", ".hh", ".hpp", ".hxx", ".m", ".s", ".S", ".swig",
    ".swigcxx", ".syso",
];

/// Name of the directory kept despite its leading underscore.
pub const UNDERSCORE_TESTDATA: &str = "_testdata";

/// Name of the conventional Go test fixture directory.
pub const TESTDATA: &str = "testdata";

/// Suffix that marks a Go test file.
pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Check whether `name` should be pruned from the walk.
///
/// This is the per-name decision applied to both files and directories; a
/// pruned directory is not descended into. The underscore rule and the test
/// rule are evaluated independently, so `_testdata` escapes the former but
/// is still caught by the latter when `include_tests` is false.
pub fn is_excluded<S: AsRef<OsStr> + ?Sized>(name: &S, include_tests: bool) -> bool {
    let name = name.as_ref().as_encoded_bytes();

    let hidden = name.starts_with(b".");
    let underscore = name.starts_with(b"_") && name != UNDERSCORE_TESTDATA.as_bytes();
    let test_artifact = !include_tests
        && (name == UNDERSCORE_TESTDATA.as_bytes()
            || name == TESTDATA.as_bytes()
            || name.ends_with(TEST_FILE_SUFFIX.as_bytes()));

    hidden || underscore || test_artifact
}

/// Check whether a file name ends with one of [`GO_FILE_TYPES`].
pub fn is_go_file<S: AsRef<OsStr> + ?Sized>(name: &S) -> bool {
    let name = name.as_ref().as_encoded_bytes();
    GO_FILE_TYPES
        .iter()
        .any(|ext| name.ends_with(ext.as_bytes()))
}

/// Full decision for a file: not excluded and a Go toolchain file.
#[inline]
pub fn is_included_file<S: AsRef<OsStr> + ?Sized>(name: &S, include_tests: bool) -> bool {
    !is_excluded(name, include_tests) && is_go_file(name)
}
