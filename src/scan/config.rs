//! Configuration types for directory analysis

/// Bounds applied to one analysis run.
///
/// A value of `0` for `max_dirs_per_level` or `recursion_breadth` means
/// "no limit".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalConfig {
    /// How many ranked subdirectories are kept at each level.
    pub max_dirs_per_level: usize,
    /// Deepest level at which subdirectories are still expanded.
    pub recursion_depth: usize,
    /// How many of the top-ranked subdirectories are expanded per level.
    pub recursion_breadth: usize,
}

impl TraversalConfig {
    /// Number of entries to keep out of `available` ranked ones.
    pub fn level_limit(&self, available: usize) -> usize {
        cap(self.max_dirs_per_level, available)
    }

    /// Number of entries to expand out of `available` ranked ones.
    pub fn breadth_limit(&self, available: usize) -> usize {
        cap(self.recursion_breadth, available)
    }
}

fn cap(limit: usize, available: usize) -> usize {
    if limit == 0 {
        available
    } else {
        limit.min(available)
    }
}
