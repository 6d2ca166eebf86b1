//! Shared formatting helpers

use std::path::Path;

const UNIT: u64 = 1024;
const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Format a byte count with binary units and one decimal place.
///
/// `1023` becomes `"1023 B"`, `1536` becomes `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT && exp + 1 < PREFIXES.len() {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}

/// Format a size either as raw bytes or human-readable.
pub fn display_size(bytes: u64, human_readable: bool) -> String {
    if human_readable {
        format_size(bytes)
    } else {
        bytes.to_string()
    }
}

/// Label for `path` within a listing of `parent`: the path with the parent
/// prefix removed, or `"."` if nothing is left.
pub fn relative_label(path: &Path, parent: &Path) -> String {
    let full = path.to_string_lossy();
    let prefix = parent.to_string_lossy();
    let rel = full.strip_prefix(prefix.as_ref()).unwrap_or(&full);
    if rel.is_empty() {
        ".".to_string()
    } else {
        rel.to_string()
    }
}

/// Shorten `path` to at most `max_len` characters by cutting out the middle.
pub fn shorten_path(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        return path.to_string();
    }
    let keep = (max_len / 2).saturating_sub(3);
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}...{}", head, tail)
}
