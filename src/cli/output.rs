/// Output formatting: markdown, JSON, table. Warnings, errors, debug timers.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::OutputFormat;
use crate::report::{MergedReport, NOT_FOUND};
use crate::types::{ErrorOutput, ReportOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to the command.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// When true, print stage timing to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: impl Into<String>) -> DebugTimer {
        DebugTimer::new(label.into(), self.debug)
    }
}

// --- Report output ---

/// Write the unified report to stdout.
///
/// `markdown` is the rendered document; it is printed verbatim in the default
/// format so stdout matches the saved file byte for byte.
pub fn write_report(report: &MergedReport, markdown: &str, generated_on: &str, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Markdown => print!("{markdown}"),
        OutputFormat::Json => print_json(&ReportOutput::from_report(report, generated_on)),
        OutputFormat::Compact => {
            print_compact_json(&ReportOutput::from_report(report, generated_on));
        }
        OutputFormat::Table => write_report_table(report),
    }
}

fn write_report_table(report: &MergedReport) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    let mut header = vec!["Tool".to_owned()];
    header.extend(report.architectures().iter().map(|a| a.label().to_owned()));
    table.set_header(header);

    for (tool, cells) in report.rows() {
        let mut row = vec![tool.to_owned()];
        row.extend(cells.into_iter().map(|c| c.unwrap_or(NOT_FOUND).to_owned()));
        table.add_row(row);
    }

    println!("{table}");
}

// --- Warnings and errors ---

/// Write a non-fatal warning to stderr.
pub fn write_warning(message: &str) {
    eprintln!("Warning: {message}");
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, ctx: &OutputCtx) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match ctx.format {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Markdown | OutputFormat::Table => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: String,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: String, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
