//! Single-line progress display for verbose mode

use std::io::{self, Write};
use std::path::Path;

use terminal_size::{Width, terminal_size};

use super::utils::shorten_path;

/// Width assumed when the terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Room reserved for the status label and margin.
const LABEL_MARGIN: usize = 20;

const CLEAR_LINE: &str = "\r\x1b[K";

/// Source of the display width used to shorten progress paths.
pub trait WidthProvider {
    fn width(&self) -> Option<usize>;
}

/// Width of the terminal attached to the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalWidth;

impl WidthProvider for TerminalWidth {
    fn width(&self) -> Option<usize> {
        terminal_size().map(|(Width(w), _)| w as usize)
    }
}

/// A fixed width, independent of the environment.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub usize);

impl WidthProvider for FixedWidth {
    fn width(&self) -> Option<usize> {
        Some(self.0)
    }
}

/// Status line that is overwritten in place while scanning.
pub struct ProgressLine {
    width: Box<dyn WidthProvider>,
    active: bool,
}

impl ProgressLine {
    pub fn new(width: impl WidthProvider + 'static) -> Self {
        Self {
            width: Box::new(width),
            active: false,
        }
    }

    /// Longest path shown before it is shortened.
    pub fn max_path_len(&self) -> usize {
        self.width
            .width()
            .unwrap_or(DEFAULT_WIDTH)
            .saturating_sub(LABEL_MARGIN)
    }

    /// Replace the current status with `label: path`.
    pub fn show<W: Write>(&mut self, out: &mut W, label: &str, path: &Path) -> io::Result<()> {
        let shown = shorten_path(&path.to_string_lossy(), self.max_path_len());
        write!(out, "{}{}: {}", CLEAR_LINE, label, shown)?;
        out.flush()?;
        self.active = true;
        Ok(())
    }

    /// Erase the status line if one is showing.
    pub fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.active {
            write!(out, "{}", CLEAR_LINE)?;
            self.active = false;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for ProgressLine {
    fn default() -> Self {
        Self::new(TerminalWidth)
    }
}
