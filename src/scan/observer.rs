//! Callbacks fired while a directory tree is being analyzed.

use std::io;
use std::path::Path;

use crate::error::ScanError;

use super::ranker::DirEntry;

/// Receives traversal events for progress display and streaming output.
///
/// Every method has a no-op default so implementors only handle what they
/// display. Returning an error from a method aborts the analysis.
pub trait ScanObserver {
    /// A subdirectory is about to be sized.
    fn sizing_directory(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    /// The size walk reached a file in a directory it had not visited yet.
    fn sizing_file(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    /// `path` has been listed and its subdirectories ranked.
    fn level_ranked(&mut self, _path: &Path, _entries: &[DirEntry]) -> io::Result<()> {
        Ok(())
    }

    /// The analyzer is about to expand `path`.
    fn descending(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    /// Expanding `path` failed; it is kept as a leaf.
    fn descent_failed(&mut self, _path: &Path, _error: &ScanError) -> io::Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ScanObserver for Silent {}

impl<O: ScanObserver + ?Sized> ScanObserver for &mut O {
    fn sizing_directory(&mut self, path: &Path) -> io::Result<()> {
        (**self).sizing_directory(path)
    }

    fn sizing_file(&mut self, path: &Path) -> io::Result<()> {
        (**self).sizing_file(path)
    }

    fn level_ranked(&mut self, path: &Path, entries: &[DirEntry]) -> io::Result<()> {
        (**self).level_ranked(path, entries)
    }

    fn descending(&mut self, path: &Path) -> io::Result<()> {
        (**self).descending(path)
    }

    fn descent_failed(&mut self, path: &Path, error: &ScanError) -> io::Result<()> {
        (**self).descent_failed(path, error)
    }
}
