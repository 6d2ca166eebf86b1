//! Ranking of immediate subdirectories by total size

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::config::TraversalConfig;
use super::observer::{ScanObserver, Silent};
use super::walker::walk_size_with;

/// A subdirectory together with its total walked size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub size: u64,
}

/// Rank the immediate subdirectories of `path`, largest first.
///
/// An unreadable `path` yields no entries.
pub fn rank(path: &Path, config: &TraversalConfig) -> Vec<DirEntry> {
    rank_with(path, config, &mut Silent).unwrap_or_default()
}

/// Like [`rank`], notifying `observer` as each subdirectory is sized.
pub fn rank_with<O: ScanObserver>(
    path: &Path,
    config: &TraversalConfig,
    observer: &mut O,
) -> io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for dir in list_subdirectories(path) {
        observer.sizing_directory(&dir)?;
        let total = walk_size_with(&dir, observer)?;
        if total.skipped > 0 {
            debug!("{} entries skipped under {}", total.skipped, dir.display());
        }
        entries.push(DirEntry {
            path: dir,
            size: total.bytes,
        });
    }

    // stable: equal sizes keep name order
    entries.sort_by(|a, b| b.size.cmp(&a.size));
    entries.truncate(config.level_limit(entries.len()));
    Ok(entries)
}

/// Subdirectories of `path` in file name order. Symlinks are not followed.
fn list_subdirectories(path: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(path) {
        Ok(e) => e,
        Err(err) => {
            debug!("cannot list {}: {}", path.display(), err);
            return Vec::new();
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());

    entries
        .into_iter()
        .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_dir()))
        .map(|entry| entry.path())
        .collect()
}
