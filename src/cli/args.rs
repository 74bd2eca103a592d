/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::report::{MergeConfig, ReportError};

/// toolvers — merge per-architecture tool version tables into one report.
///
/// Either name the inputs with `--amd64` / `--arm64` (at least one) and an
/// optional `--output`, or pass all three paths positionally:
/// `toolvers <AMD64_FILE> <ARM64_FILE> <OUTPUT_FILE>`.
#[derive(Debug, Parser)]
#[command(
    name = "toolvers",
    about = "Merge amd64/arm64 tool version tables into one markdown report",
    version
)]
pub struct Cli {
    /// Path to the amd64 tool versions report.
    #[arg(long, value_name = "PATH")]
    pub amd64: Option<PathBuf>,

    /// Path to the arm64 tool versions report.
    #[arg(long, value_name = "PATH")]
    pub arm64: Option<PathBuf>,

    /// Path to save the unified report to. Parent directories are created.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Positional form: <AMD64_FILE> <ARM64_FILE> <OUTPUT_FILE>.
    #[arg(value_name = "FILES", conflicts_with_all = ["amd64", "arm64", "output"])]
    pub files: Vec<PathBuf>,

    /// Format of the report printed to stdout. The saved file is always markdown.
    #[arg(long, value_name = "FORMAT", default_value = "markdown")]
    pub format: OutputFormat,

    /// Shorthand for --format json.
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Print per-stage timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Resolve the named or positional inputs into a `MergeConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Usage` if no architecture is selected or the
    /// positional form has the wrong number of paths.
    pub fn merge_config(&self) -> Result<MergeConfig, ReportError> {
        if self.files.is_empty() {
            MergeConfig::from_named(self.amd64.clone(), self.arm64.clone(), self.output.clone())
        } else {
            MergeConfig::from_positional(&self.files)
        }
    }
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// The markdown document, exactly as written to --output.
    #[default]
    Markdown,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned terminal table.
    Table,
}
