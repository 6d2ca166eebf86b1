//! Output configuration types

/// Configuration for the text listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Show sizes as "1.5 KB" and align columns.
    pub human_readable: bool,
}
