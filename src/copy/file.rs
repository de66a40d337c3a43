//! Single file copy.

use crate::error::{Error, Result};
use std::fs::File;
use std::io;
use std::path::Path;

use super::utils::create_parent;

/// Copy the contents of one regular file.
///
/// Missing parent directories of `dst` are created. An existing `dst` is
/// truncated. Permissions, timestamps and ownership are not carried over.
///
/// Both handles are closed before this returns, whether or not the copy
/// succeeded.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// - The parent directory cannot be created ([`Error::CreateDir`])
/// - `src` cannot be opened ([`Error::Open`])
/// - `dst` cannot be created ([`Error::Create`])
/// - Reading or writing fails mid-stream ([`Error::Io`])
///
/// # Example
///
/// ```no_run
/// use pkgcopy::copy_file;
/// use std::path::Path;
///
/// let bytes = copy_file(Path::new("src/main.go"), Path::new("vendor/pkg/main.go"))?;
/// # Ok::<(), pkgcopy::Error>(())
/// ```
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    create_parent(dst)?;

    let mut reader = File::open(src).map_err(|source| Error::Open {
        path: src.to_path_buf(),
        source,
    })?;
    let mut writer = File::create(dst).map_err(|source| Error::Create {
        path: dst.to_path_buf(),
        source,
    })?;

    let bytes = io::copy(&mut reader, &mut writer)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(src = %src.display(), dst = %dst.display(), bytes, "copied file");

    Ok(bytes)
}

// =============================================================================
// Tests
// =============================================================================
