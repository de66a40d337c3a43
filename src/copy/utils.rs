//! Helpers shared by the file and symlink copiers.

use crate::error::{Error, Result};
use std::fs::DirBuilder;
use std::io;
use std::path::Path;

/// Permissions for directories created on the way to a destination.
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

// =============================================================================
// Directory utilities
// =============================================================================

/// Create the parent directory chain of `path`.
///
/// Existing directories are left alone. A bare file name has no parent to
/// create.
pub(crate) fn create_parent(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    mkdir_all(parent).map_err(|source| Error::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

fn mkdir_all(dir: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(dir)
}

// =============================================================================
// Symlink utilities
// =============================================================================

#[cfg(unix)]
pub(crate) use std::os::unix::fs::symlink;

/// Windows needs the link kind up front. Only whitelisted file names reach
/// the symlink copier, so links are created as file links.
#[cfg(windows)]
pub(crate) fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "Symlinks not supported on this platform",
    ))
}

// =============================================================================
// Tests
// =============================================================================
