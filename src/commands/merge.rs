/// `merge`: read the per-architecture tables, merge, render, save, print.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::output::{write_report, write_warning};
use crate::report::{
    MergeConfig, MergedReport, ReportError, ToolVersions, parse_table_file, render_markdown,
    save_report, timestamp_now,
};

/// Run one merge.
///
/// A selected input that doesn't exist contributes an empty report and a
/// warning. The markdown document is saved to `config.output` (if set) before
/// anything is printed.
///
/// # Errors
///
/// Returns `ReportError::Read` for an unreadable input and
/// `ReportError::Write` if the output can't be saved.
pub fn run(config: &MergeConfig, ctx: &OutputCtx) -> Result<(), ReportError> {
    let generated_on = timestamp_now();

    let mut reports = Vec::new();
    for arch in config.architectures() {
        if let Some(path) = config.input(arch) {
            let _t = ctx.timer(format!("parse_{arch}"));
            reports.push((arch, load(path)?));
        }
    }

    let _t_merge = ctx.timer("merge");
    let report = MergedReport::merge(reports);
    drop(_t_merge);

    let _t_render = ctx.timer("render");
    let markdown = render_markdown(&report, &generated_on);
    drop(_t_render);

    if let Some(output) = &config.output {
        let _t_write = ctx.timer("write");
        save_report(output, &markdown)?;
    }

    write_report(&report, &markdown, &generated_on, ctx);
    Ok(())
}

fn load(path: &Path) -> Result<ToolVersions, ReportError> {
    match parse_table_file(path)? {
        Some(versions) => Ok(versions),
        None => {
            write_warning(&format!("{} not found.", path.display()));
            Ok(ToolVersions::new())
        }
    }
}
