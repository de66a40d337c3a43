//! Recursive removal that tolerates read-only entries.
//!
//! Windows refuses to delete a file whose read-only attribute is set, so
//! [`remove_all`] clears that attribute across the tree before deleting it.
//! On other platforms removal goes straight to [`std::fs::remove_dir_all`].
//!
//! The platform decision is made by [`needs_permission_repair`]; use
//! [`remove_all_with`] to pick the behavior explicitly.

use crate::error::Result;
use std::fs::{self, Permissions};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Whether read-only entries must be made writable before they can be deleted.
#[inline]
pub fn needs_permission_repair() -> bool {
    cfg!(windows)
}

/// Remove `path` and everything below it.
///
/// `path` may be a directory, a file or a symlink (the link is removed, not
/// its target). A path that does not exist is not an error.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the final removal fails.
///
/// # Example
///
/// ```no_run
/// use pkgcopy::remove_all;
/// use std::path::Path;
///
/// remove_all(Path::new("vendor/stale"))?;
/// # Ok::<(), pkgcopy::Error>(())
/// ```
pub fn remove_all(path: &Path) -> Result<()> {
    remove_all_with(path, needs_permission_repair())
}

/// Remove `path` and everything below it, optionally granting owner write
/// permission to every entry first.
///
/// With `repair_permissions`, a single direct removal is tried first; if
/// that works (or nothing is there) the tree is never walked. Otherwise
/// every entry missing the owner write bit gets it. The repair pass is best
/// effort: an entry that cannot be read or changed is logged and passed
/// over, and the final recursive removal reports whatever is still wrong.
pub fn remove_all_with(path: &Path, repair_permissions: bool) -> Result<()> {
    if repair_permissions {
        match remove_entry(path) {
            Ok(()) => return Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(_) => {}
        }
        make_writable(path);
    }

    match remove_tree(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Remove a file, a symlink or an empty directory.
fn remove_entry(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

fn remove_tree(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

fn make_writable(path: &Path) {
    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, "permission repair walk error");
                continue;
            }
        };

        // chmod on a link would change its target
        if entry.path_is_symlink() {
            continue;
        }

        let mut perms = match entry.metadata() {
            Ok(meta) => meta.permissions(),
            Err(_) => continue,
        };
        if !grant_owner_write(&mut perms) {
            continue;
        }

        if let Err(_e) = fs::set_permissions(entry.path(), perms) {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %entry.path().display(), error = %_e, "failed to make writable");
        }
    }
}

/// Add the owner write bit. Returns false if it was already set.
#[cfg(unix)]
fn grant_owner_write(perms: &mut Permissions) -> bool {
    use std::os::unix::fs::PermissionsExt;

    let mode = perms.mode();
    if mode & 0o200 != 0 {
        return false;
    }
    perms.set_mode(mode | 0o200);
    true
}

/// Clear the read-only attribute. Returns false if it was not set.
#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn grant_owner_write(perms: &mut Permissions) -> bool {
    if !perms.readonly() {
        return false;
    }
    perms.set_readonly(false);
    true
}

// =============================================================================
// Tests
// =============================================================================
