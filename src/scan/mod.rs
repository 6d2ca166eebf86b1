//! Directory size analysis
//!
//! Leaf-first:
//!
//! - `walker`: sums the bytes under a path, skipping anything unreadable
//! - `ranker`: sizes the immediate subdirectories of a path and keeps the largest
//! - `engine`: ranks level by level within depth and breadth bounds
//! - `result`: the tree handed to the output formatters
//! - `root`: turns the root argument into a clean absolute path

mod config;
mod engine;
mod observer;
mod ranker;
mod result;
mod root;
mod walker;

pub use config::TraversalConfig;
pub use engine::{Analyzer, analyze};
pub use observer::{ScanObserver, Silent};
pub use ranker::{DirEntry, rank, rank_with};
pub use result::ResultNode;
pub use root::{clean_path, resolve_root};
pub use walker::{WalkTotal, walk_size, walk_size_with};
