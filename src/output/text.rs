//! Level-by-level text listing
//!
//! `TextPrinter` receives traversal events from the analyzer and writes each
//! ranked level as soon as it is known, interleaved with the optional
//! progress line.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::ScanError;
use crate::scan::{DirEntry, ScanObserver};

use super::config::OutputConfig;
use super::progress::ProgressLine;
use super::utils::{display_size, relative_label};

pub struct TextPrinter<W: WriteColor = StandardStream> {
    config: OutputConfig,
    out: W,
    progress: Option<ProgressLine>,
}

impl TextPrinter<StandardStream> {
    /// Printer writing to stdout.
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::with_writer(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TextPrinter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self {
            config,
            out,
            progress: None,
        }
    }

    /// Show a progress line while directories are being sized.
    pub fn with_progress(mut self, progress: ProgressLine) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Clear any progress output and flush.
    pub fn finish(&mut self) -> io::Result<()> {
        if let Some(progress) = self.progress.as_mut() {
            if progress.is_active() {
                progress.clear(&mut self.out)?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear_progress(&mut self) -> io::Result<()> {
        match self.progress.as_mut() {
            Some(progress) => progress.clear(&mut self.out),
            None => Ok(()),
        }
    }

    fn show_progress(&mut self, label: &str, path: &Path) -> io::Result<()> {
        match self.progress.as_mut() {
            Some(progress) => progress.show(&mut self.out, label, path),
            None => Ok(()),
        }
    }

    fn write_level(&mut self, parent: &Path, entries: &[DirEntry]) -> io::Result<()> {
        let rows: Vec<(String, String)> = entries
            .iter()
            .map(|e| {
                (
                    relative_label(&e.path, parent),
                    display_size(e.size, self.config.human_readable),
                )
            })
            .collect();

        if !self.config.human_readable {
            for (label, size) in &rows {
                writeln!(self.out, "{}\t{}", label, size)?;
            }
            return Ok(());
        }

        let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
        let size_width = rows.iter().map(|(_, s)| s.chars().count()).max().unwrap_or(0);
        for (label, size) in &rows {
            write!(self.out, "{:<width$}  ", label, width = label_width)?;
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.out, "{:>width$}", size, width = size_width)?;
            self.out.reset()?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: WriteColor> ScanObserver for TextPrinter<W> {
    fn sizing_directory(&mut self, path: &Path) -> io::Result<()> {
        self.show_progress("Processing directory", path)
    }

    fn sizing_file(&mut self, path: &Path) -> io::Result<()> {
        self.show_progress("Processing", path)
    }

    fn level_ranked(&mut self, path: &Path, entries: &[DirEntry]) -> io::Result<()> {
        self.clear_progress()?;
        self.write_level(path, entries)
    }

    fn descending(&mut self, path: &Path) -> io::Result<()> {
        self.clear_progress()?;
        writeln!(self.out)?;
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(self.out, "=> {}", path.display())?;
        self.out.reset()?;
        writeln!(self.out)
    }

    fn descent_failed(&mut self, path: &Path, error: &ScanError) -> io::Result<()> {
        self.clear_progress()?;
        self.out.flush()?;
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "ndu: cannot analyze '{}': {}", path.display(), error)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::NoColor;

    use super::*;
    use crate::output::progress::FixedWidth;

    fn entries() -> Vec<DirEntry> {
        vec![
            DirEntry {
                path: PathBuf::from("/data/photos"),
                size: 1_572_864,
            },
            DirEntry {
                path: PathBuf::from("/data/src"),
                size: 1536,
            },
        ]
    }

    fn render(
        config: OutputConfig,
        f: impl FnOnce(&mut TextPrinter<NoColor<Vec<u8>>>),
    ) -> String {
        let mut printer = TextPrinter::with_writer(config, NoColor::new(Vec::new()));
        f(&mut printer);
        String::from_utf8(printer.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_plain_level_uses_tabs_and_bytes() {
        let out = render(OutputConfig::default(), |p| {
            p.level_ranked(Path::new("/data"), &entries()).unwrap();
        });
        assert_eq!(out, "/photos\t1572864\n/src\t1536\n");
    }

    #[test]
    fn test_human_level_is_aligned() {
        let config = OutputConfig {
            human_readable: true,
            ..Default::default()
        };
        let out = render(config, |p| {
            p.level_ranked(Path::new("/data"), &entries()).unwrap();
        });
        assert_eq!(out, "/photos  1.5 MB\n/src     1.5 KB\n");
    }

    #[test]
    fn test_descent_header() {
        let out = render(OutputConfig::default(), |p| {
            p.descending(Path::new("/data/photos")).unwrap();
        });
        assert_eq!(out, "\n=> /data/photos\n");
    }

    #[test]
    fn test_empty_level_prints_nothing() {
        let out = render(OutputConfig::default(), |p| {
            p.level_ranked(Path::new("/data"), &[]).unwrap();
        });
        assert!(out.is_empty());
    }

    #[test]
    fn test_progress_cleared_before_level() {
        let mut printer =
            TextPrinter::with_writer(OutputConfig::default(), NoColor::new(Vec::new()))
                .with_progress(ProgressLine::new(FixedWidth(80)));
        printer.sizing_directory(Path::new("/data/src")).unwrap();
        printer.level_ranked(Path::new("/data"), &entries()[1..]).unwrap();
        printer.finish().unwrap();
        let out = String::from_utf8(printer.into_inner().into_inner()).unwrap();

        assert_eq!(out, "\r\x1b[KProcessing directory: /data/src\r\x1b[K/src\t1536\n\n");
    }
}
