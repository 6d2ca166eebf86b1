//! Recursive byte totals for a directory subtree

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use super::observer::{ScanObserver, Silent};

/// Outcome of a size walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkTotal {
    /// Sum of the lengths of every non-directory entry.
    pub bytes: u64,
    /// Entries that could not be read or stat'ed.
    pub skipped: usize,
}

/// Total bytes of all non-directory entries reachable from `path`.
///
/// Never fails: unreadable entries contribute nothing.
pub fn walk_size(path: &Path) -> u64 {
    walk_size_with(path, &mut Silent)
        .map(|total| total.bytes)
        .unwrap_or_default()
}

/// Walk `path`, reporting files to `observer` whenever the walk moves into a
/// new directory.
///
/// Only errors returned by the observer are propagated.
pub fn walk_size_with<O: ScanObserver>(path: &Path, observer: &mut O) -> io::Result<WalkTotal> {
    let mut total = WalkTotal::default();
    let mut last_dir: Option<PathBuf> = None;

    let walker = WalkBuilder::new(path)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry under {}: {}", path.display(), err);
                total.skipped += 1;
                continue;
            }
        };

        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }

        let parent = entry.path().parent();
        if parent != last_dir.as_deref() {
            observer.sizing_file(entry.path())?;
            last_dir = parent.map(Path::to_path_buf);
        }

        match entry.metadata() {
            Ok(meta) => total.bytes = total.bytes.saturating_add(meta.len()),
            Err(err) => {
                debug!("cannot stat {}: {}", entry.path().display(), err);
                total.skipped += 1;
            }
        }
    }

    Ok(total)
}
