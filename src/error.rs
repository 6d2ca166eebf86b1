//! Error types for scanning and exporting

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while analyzing a directory tree.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot access '{}': {source}", .path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Writing progress or listing output failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl ScanError {
    /// The path this error occurred at, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Inaccessible { path, .. } | Self::NotADirectory(path) => Some(path),
            Self::Output(_) => None,
        }
    }

    /// Whether the traversal can continue past this error.
    ///
    /// A subtree that vanished or became unreadable is left as a leaf and the
    /// walk keeps going. Output failures halt the whole analysis.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Inaccessible { .. } | Self::NotADirectory(_))
    }
}

/// Errors raised while writing JSON or HTML exports.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot serialize result tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
