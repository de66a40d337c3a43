//! Symlink copy.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

use super::utils::{create_parent, symlink};

/// Recreate the symlink `src` at `dst`.
///
/// The new link gets the same literal target string. Relative targets are
/// not resolved or rebased, so `../shared/lib.c` stays `../shared/lib.c`.
///
/// # Errors
///
/// - `src` is not a symlink or cannot be read ([`Error::ReadLink`])
/// - The parent directory cannot be created ([`Error::CreateDir`])
/// - The link cannot be created, e.g. `dst` exists ([`Error::Symlink`])
pub fn copy_link(src: &Path, dst: &Path) -> Result<()> {
    let target = fs::read_link(src).map_err(|source| Error::ReadLink {
        path: src.to_path_buf(),
        source,
    })?;

    create_parent(dst)?;

    symlink(&target, dst).map_err(|source| Error::Symlink {
        path: dst.to_path_buf(),
        target: target.clone(),
        source,
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(src = %src.display(), dst = %dst.display(), target = %target.display(), "copied symlink");

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
