//! Resolution of the root argument to an absolute, clean path

use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and clean it.
///
/// Symlinks are not resolved.
pub fn resolve_root(path: &Path) -> io::Result<PathBuf> {
    Ok(clean_path(&std::path::absolute(path)?))
}

/// Lexically clean a path: drop `.` components and trailing separators, and
/// let each `..` remove the component before it. `..` at the root stays at
/// the root.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    cleaned.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if at_root {
                    if !cleaned.has_root() {
                        cleaned.push("..");
                    }
                } else if cleaned.ends_with("..") {
                    cleaned.push("..");
                } else {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other),
        }
    }
    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}
