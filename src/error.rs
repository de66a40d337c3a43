//! Error types for pkgcopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during copy and removal operations, and the [`Result`]
//! type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Traversal | [`Error::Walk`], [`Error::PathOutsideRoot`] |
//! | Copy | [`Error::CreateDir`], [`Error::Open`], [`Error::Create`], [`Error::Io`] |
//! | Symlink | [`Error::ReadLink`], [`Error::Symlink`] |
//!
//! Skipping a file because of the filter is never an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for pkgcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during copy and removal operations.
///
/// Every variant except [`Error::Io`] names the path that failed.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error while streaming bytes or removing a tree
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The directory walk could not stat or list an entry
    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failed to create the parent directory chain of a destination
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to open a source file for reading
    #[error("Failed to open {path}: {source}")]
    Open {
        /// Source file path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to create or truncate a destination file
    #[error("Failed to create {path}: {source}")]
    Create {
        /// Destination file path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to read the target of a source symlink
    #[error("Failed to read symlink {path}: {source}")]
    ReadLink {
        /// Source symlink path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to create a symlink at the destination
    #[error("Failed to create symlink {path} -> {target}: {source}")]
    Symlink {
        /// Destination link path
        path: PathBuf,
        /// Literal link target
        target: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The walk produced a path that is not below the walk root
    #[error("Path {path} is not inside {root}")]
    PathOutsideRoot {
        /// Offending path
        path: PathBuf,
        /// Walk root
        root: PathBuf,
    },
}

impl Error {
    /// Return the underlying IO error, if there is one.
    ///
    /// Walk errors caused by a symlink loop carry no IO error.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::Io(e) => Some(e),
            Error::Walk(e) => e.io_error(),
            Error::CreateDir { source, .. }
            | Error::Open { source, .. }
            | Error::Create { source, .. }
            | Error::ReadLink { source, .. }
            | Error::Symlink { source, .. } => Some(source),
            Error::PathOutsideRoot { .. } => None,
        }
    }
}
