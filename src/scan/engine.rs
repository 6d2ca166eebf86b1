//! Depth- and breadth-bounded analysis of a directory tree
//!
//! Each level is ranked with [`rank_with`]. The top `recursion_breadth`
//! entries are expanded until `recursion_depth` is reached; the rest stay
//! leaves carrying their walked size.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::ScanError;

use super::config::TraversalConfig;
use super::observer::{ScanObserver, Silent};
use super::ranker::rank_with;
use super::result::ResultNode;

/// Analyze `path` with no observer attached.
pub fn analyze(path: &Path, config: &TraversalConfig) -> Result<ResultNode, ScanError> {
    Analyzer::new(*config).analyze(path)
}

/// Builds a [`ResultNode`] tree for a root directory.
pub struct Analyzer<O = Silent> {
    config: TraversalConfig,
    observer: O,
}

impl Analyzer<Silent> {
    pub fn new(config: TraversalConfig) -> Self {
        Self {
            config,
            observer: Silent,
        }
    }
}

impl<O: ScanObserver> Analyzer<O> {
    /// Attach an observer that receives traversal events.
    pub fn with_observer<P: ScanObserver>(self, observer: P) -> Analyzer<P> {
        Analyzer {
            config: self.config,
            observer,
        }
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Consume the analyzer and return its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Analyze `root`. Fails only if `root` itself is not an accessible
    /// directory or the observer reports an output error.
    pub fn analyze(&mut self, root: &Path) -> Result<ResultNode, ScanError> {
        let node = self.analyze_level(root, 0)?;
        info!(
            "analyzed {}: {} bytes across {} ranked directories",
            root.display(),
            node.size,
            node.children.len()
        );
        Ok(node)
    }

    fn analyze_level(&mut self, path: &Path, depth: usize) -> Result<ResultNode, ScanError> {
        ensure_directory(path)?;

        let entries = rank_with(path, &self.config, &mut self.observer)?;
        self.observer.level_ranked(path, &entries)?;

        if depth >= self.config.recursion_depth {
            return Ok(ResultNode::from_ranking(path, &entries));
        }

        let breadth = self.config.breadth_limit(entries.len());
        let mut children = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            if index >= breadth {
                children.push(ResultNode::from(entry));
                continue;
            }

            self.observer.descending(&entry.path)?;
            let child = match self.analyze_level(&entry.path, depth + 1) {
                Ok(subtree) => ResultNode {
                    path: entry.path.clone(),
                    size: entry.size,
                    children: subtree.children,
                },
                Err(err) if err.is_recoverable() => {
                    warn!("leaving {} unexpanded: {}", entry.path.display(), err);
                    self.observer.descent_failed(&entry.path, &err)?;
                    ResultNode::from(entry)
                }
                Err(err) => return Err(err),
            };
            children.push(child);
        }

        Ok(ResultNode::with_children(path, children))
    }
}

fn ensure_directory(path: &Path) -> Result<(), ScanError> {
    let meta = fs::metadata(path).map_err(|source| ScanError::Inaccessible {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }
    fs::read_dir(path).map_err(|source| ScanError::Inaccessible {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
