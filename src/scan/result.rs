//! Result tree produced by the analyzer

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ranker::DirEntry;

/// One directory in the analysis result.
///
/// A node built from a ranked level has `size` equal to the sum of its
/// children. A leaf carries the full walked size of its directory but no
/// children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultNode {
    pub path: PathBuf,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResultNode>,
}

impl ResultNode {
    /// A node with no children.
    pub fn leaf(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
            children: Vec::new(),
        }
    }

    /// A node whose size is the sum of `children`.
    pub fn with_children(path: impl Into<PathBuf>, children: Vec<ResultNode>) -> Self {
        let size = children.iter().map(|c| c.size).sum();
        Self {
            path: path.into(),
            size,
            children,
        }
    }

    /// A node for `path` whose children are leaves for each ranked entry.
    pub fn from_ranking(path: &Path, entries: &[DirEntry]) -> Self {
        Self::with_children(path, entries.iter().map(ResultNode::from).collect())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels below this node (0 for a leaf).
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Find a node by path anywhere in this subtree.
    pub fn find(&self, path: &Path) -> Option<&ResultNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(path))
    }
}

impl From<&DirEntry> for ResultNode {
    fn from(entry: &DirEntry) -> Self {
        Self::leaf(entry.path.clone(), entry.size)
    }
}
