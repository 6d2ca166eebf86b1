//! CLI entry point for ndu

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use ndu::output::TerminalWidth;
use ndu::{
    Analyzer, OutputConfig, ProgressLine, ResultNode, ScanError, TextPrinter, TraversalConfig,
    resolve_root, write_html, write_json,
};

/// HTML file written by `--auto` unless `--html` names another.
const AUTO_HTML_FILE: &str = "auto.html";

/// Environment variable holding the log level (error, warn, info, debug, trace).
const LOG_ENV: &str = "NDU_LOG";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ndu")]
#[command(about = "Disk usage per directory, largest first, with JSON and HTML export")]
#[command(version, disable_help_flag = true)]
#[command(after_help = "A root that is missing or not a directory is an error (exit status 1).\n\n\
Examples:\n  ndu -h -n 3 /\n  ndu -h -n 3 -r 2 -d 1 /\n  ndu -j results.json /")]
struct Args {
    /// Directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Display sizes in human readable format (e.g. 1.2 GB)
    #[arg(short = 'h', long = "human-readable")]
    human_readable: bool,

    /// Show only the COUNT largest directories at each level (0 or less = all)
    #[arg(short = 'n', long = "max-dirs", value_name = "COUNT", default_value = "0")]
    #[arg(allow_negative_numbers = true)]
    max_dirs: i64,

    /// Analyze subdirectories recursively up to DEPTH levels
    #[arg(short = 'r', long = "recursive", value_name = "DEPTH", default_value = "0")]
    #[arg(allow_negative_numbers = true)]
    recursive: i64,

    /// Expand only the COUNT largest directories at each level (0 or less = all)
    #[arg(short = 'd', long = "recursive-dirs", value_name = "COUNT", default_value = "0")]
    #[arg(allow_negative_numbers = true)]
    recursive_dirs: i64,

    /// Show the directory currently being processed
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Export results to a JSON file
    #[arg(short = 'j', long = "json", value_name = "FILE")]
    json: Option<PathBuf>,

    /// Export results to an HTML file with a pie chart visualization
    #[arg(long = "html", value_name = "FILE")]
    html: Option<PathBuf>,

    /// Reasonable defaults (-h -n 10 -r 4 -d 5 -v --html auto.html), then
    /// open the HTML report in the default browser
    #[arg(long = "auto")]
    auto: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    /// Overwrite flags with the `--auto` preset.
    fn apply_auto_preset(&mut self) {
        self.human_readable = true;
        self.max_dirs = 10;
        self.recursive = 4;
        self.recursive_dirs = 5;
        self.verbose = true;
        if self.html.is_none() {
            self.html = Some(PathBuf::from(AUTO_HTML_FILE));
        }
    }

    fn traversal_config(&self) -> TraversalConfig {
        TraversalConfig {
            max_dirs_per_level: limit(self.max_dirs),
            recursion_depth: limit(self.recursive),
            recursion_breadth: limit(self.recursive_dirs),
        }
    }

    fn output_config(&self) -> OutputConfig {
        OutputConfig {
            use_color: should_use_color(self.color),
            human_readable: self.human_readable,
        }
    }
}

/// Negative flag values behave like 0.
fn limit(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Install a stderr log subscriber; level from `NDU_LOG`, default warn.
fn init_logging() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("ndu: {}", message);
    process::exit(1);
}

fn main() {
    init_logging();

    let mut args = Args::parse();
    if args.auto {
        args.apply_auto_preset();
    }

    let root = resolve_root(&args.path).unwrap_or_else(|e| {
        fail(format_args!("cannot access '{}': {}", args.path.display(), e))
    });

    let mut printer = TextPrinter::new(args.output_config());
    if args.verbose {
        printer = printer.with_progress(ProgressLine::new(TerminalWidth));
    }

    let tree = run_analysis(&root, args.traversal_config(), &mut printer);

    if let Err(e) = printer.finish() {
        fail(format_args!("error writing output: {}", e));
    }

    export(&tree, &args);
}

fn run_analysis(root: &Path, config: TraversalConfig, printer: &mut TextPrinter) -> ResultNode {
    let mut analyzer = Analyzer::new(config).with_observer(printer);
    match analyzer.analyze(root) {
        Ok(tree) => tree,
        Err(ScanError::Output(e)) => fail(format_args!("error writing output: {}", e)),
        Err(e) => fail(e),
    }
}

fn export(tree: &ResultNode, args: &Args) {
    if let Some(path) = &args.json {
        if let Err(e) = write_json(tree, path) {
            fail(e);
        }
    }

    if let Some(path) = &args.html {
        if let Err(e) = write_html(tree, path) {
            fail(e);
        }
        tracing::info!("wrote HTML report to {}", path.display());

        if args.auto {
            if let Err(e) = open::that(path) {
                eprintln!("ndu: cannot open browser: {}", e);
            }
        }
    }
}
