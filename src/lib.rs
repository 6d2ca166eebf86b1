//! ndu - disk usage per directory, largest first, with JSON and HTML export

pub mod error;
pub mod output;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ExportError, ScanError};
pub use output::{OutputConfig, ProgressLine, TextPrinter, format_size, write_html, write_json};
pub use scan::{
    Analyzer, DirEntry, ResultNode, TraversalConfig, analyze, rank, resolve_root, walk_size,
};
