//! Presentation and export of analysis results
//!
//! - `config` - Output configuration types
//! - `utils` - Size formatting, path labels and shortening
//! - `progress` - Verbose status line with an injected width source
//! - `text` - Level-by-level listing on stdout
//! - `json` - JSON export
//! - `html` - HTML export with an interactive pie chart

mod config;
mod html;
mod json;
mod progress;
mod text;
mod utils;

pub use config::OutputConfig;
pub use html::{render_html, write_html};
pub use json::{to_json, write_json};
pub use progress::{DEFAULT_WIDTH, FixedWidth, ProgressLine, TerminalWidth, WidthProvider};
pub use text::TextPrinter;
pub use utils::{display_size, format_size, relative_label, shorten_path};
