//! Filtered tree copy.
//!
//! This module walks a Go source tree and copies only the entries the go
//! tool would read, preserving the relative layout under the destination.

use crate::error::{Error, Result};
use crate::filter::{is_excluded, is_go_file};
use crate::options::CopyOptions;
use crate::remove::remove_all;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use super::file::copy_file;
use super::link::copy_link;

/// Statistics from a tree copy.
///
/// Returned by [`copy_tree`] to describe what was copied and what was
/// filtered out.
///
/// # Example
///
/// ```no_run
/// use pkgcopy::{copy_tree, CopyOptions};
/// use std::path::Path;
///
/// let stats = copy_tree(Path::new("src"), Path::new("vendor/pkg"), &CopyOptions::default())?;
/// println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
/// # Ok::<(), pkgcopy::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of regular files copied
    pub files_copied: u64,
    /// Number of symlinks recreated
    pub symlinks_copied: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Files and directories pruned by name (hidden, underscore, tests)
    pub entries_excluded: u64,
    /// Files skipped because their extension is not a Go file type
    pub files_filtered: u64,
    /// Duration of the copy operation
    pub duration: std::time::Duration,
}

/// Copy the Go-relevant parts of `src` into `dst`.
///
/// The walk is pre-order, visits directory entries in file name order, and
/// never follows symlinks below the root. For every entry below `src`:
///
/// 1. Names starting with `.`, or with `_` other than `_testdata`, are
///    skipped. A skipped directory is not descended into.
/// 2. Unless `options.include_tests` is set, `_testdata`, `testdata` and
///    `*_test.go` are skipped as well.
/// 3. Files whose names do not end in one of
///    [`GO_FILE_TYPES`](crate::filter::GO_FILE_TYPES) are skipped.
/// 4. Remaining symlinks are recreated with [`copy_link`]; remaining regular
///    files are copied with [`copy_file`].
///
/// Directories are created only as parents of copied entries, so a
/// directory with nothing to copy does not appear in `dst`. The root itself
/// is not checked against the name rules.
///
/// # Errors
///
/// The first error stops the walk: a traversal failure ([`Error::Walk`]) or
/// any error from the file or symlink copier. Before returning it, `dst` is
/// removed with [`remove_all`](crate::remove_all) so no partial tree is
/// left behind. A failure of that cleanup is reported through the warning
/// channel and does not replace the original error.
pub fn copy_tree(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    let start_time = Instant::now();
    let mut stats = CopyStats::default();

    match walk_and_copy(src, dst, options, &mut stats) {
        Ok(()) => {
            stats.duration = start_time.elapsed();

            #[cfg(feature = "tracing")]
            tracing::debug!(
                src = %src.display(),
                dst = %dst.display(),
                files = stats.files_copied,
                symlinks = stats.symlinks_copied,
                bytes = stats.bytes_copied,
                "copied tree"
            );

            Ok(stats)
        }
        Err(e) => {
            // Leave nothing half-written behind
            if let Err(cleanup) = remove_all(dst) {
                options.warn(&format!(
                    "Failed to remove partial copy {}: {}",
                    dst.display(),
                    cleanup
                ));
            }
            Err(e)
        }
    }
}

fn walk_and_copy(
    src: &Path,
    dst: &Path,
    options: &CopyOptions,
    stats: &mut CopyStats,
) -> Result<()> {
    let include_tests = options.include_tests;
    let mut entries_excluded = 0u64;

    let walker = WalkDir::new(src)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !is_excluded(entry.file_name(), include_tests) {
                return true;
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(path = %entry.path().display(), "excluded by name");

            entries_excluded += 1;
            false
        });

    for entry in walker {
        let entry = entry?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            continue;
        }

        if !is_go_file(entry.file_name()) {
            #[cfg(feature = "tracing")]
            tracing::trace!(path = %entry.path().display(), "not a Go file type");

            stats.files_filtered += 1;
            continue;
        }

        let target = destination(src, dst, entry.path())?;

        if file_type.is_symlink() {
            copy_link(entry.path(), &target)?;
            stats.symlinks_copied += 1;
        } else if file_type.is_file() {
            stats.bytes_copied += copy_file(entry.path(), &target)?;
            stats.files_copied += 1;
        } else {
            // Sockets, FIFOs and devices would block or fail on open
            options.warn(&format!(
                "Skipping special file: {}",
                entry.path().display()
            ));
        }
    }

    stats.entries_excluded = entries_excluded;
    Ok(())
}

/// Map a walked path to its place under `dst`.
fn destination(src: &Path, dst: &Path, path: &Path) -> Result<PathBuf> {
    let relative = path
        .strip_prefix(src)
        .map_err(|_| Error::PathOutsideRoot {
            path: path.to_path_buf(),
            root: src.to_path_buf(),
        })?;

    // A file root maps onto dst itself
    if relative.as_os_str().is_empty() {
        Ok(dst.to_path_buf())
    } else {
        Ok(dst.join(relative))
    }
}

// =============================================================================
// Tests
// =============================================================================
