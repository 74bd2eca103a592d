/// Markdown rendering of a merged report.
use chrono::Local;

use super::merge::MergedReport;

/// Cell text for a tool absent from an architecture's report.
pub const NOT_FOUND: &str = "Not found";

/// Document title line.
pub const TITLE: &str = "# Tool Versions";

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn push_row<'a>(out: &mut String, cells: impl IntoIterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}

/// Render the unified report as a markdown document.
///
/// The table has a `Tool` column plus one column per selected architecture.
/// Missing versions render as [`NOT_FOUND`]. The document ends with a single
/// newline.
#[must_use]
pub fn render_markdown(report: &MergedReport, generated_on: &str) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str("Generated on ");
    out.push_str(generated_on);
    out.push_str("\n\n");

    let archs = report.architectures();
    push_row(
        &mut out,
        std::iter::once("Tool").chain(archs.iter().map(|a| a.label())),
    );
    push_row(&mut out, std::iter::repeat_n(":---", archs.len() + 1));

    for (tool, cells) in report.rows() {
        push_row(
            &mut out,
            std::iter::once(tool).chain(cells.into_iter().map(|c| c.unwrap_or(NOT_FOUND))),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::table::parse_table;
    use crate::report::{Arch, ToolVersions};

    const NOW: &str = "2024-05-01 12:30:00";

    fn versions(pairs: &[(&str, &str)]) -> ToolVersions {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_both_archs() {
        let report = MergedReport::merge([
            (Arch::Amd64, versions(&[("git", "2.40"), ("curl", "8.1")])),
            (Arch::Arm64, versions(&[("curl", "8.0"), ("make", "4.3")])),
        ]);
        let expected = "\
# Tool Versions
Generated on 2024-05-01 12:30:00

| Tool | amd64 | arm64 |
| :--- | :--- | :--- |
| git | 2.40 | Not found |
| curl | 8.1 | 8.0 |
| make | Not found | 4.3 |
";
        assert_eq!(render_markdown(&report, NOW), expected);
    }

    #[test]
    fn test_amd64_only() {
        let report = MergedReport::merge([(Arch::Amd64, versions(&[("go", "1.21")]))]);
        let expected = "\
# Tool Versions
Generated on 2024-05-01 12:30:00

| Tool | amd64 |
| :--- | :--- |
| go | 1.21 |
";
        assert_eq!(render_markdown(&report, NOW), expected);
    }

    #[test]
    fn test_arm64_only() {
        let report = MergedReport::merge([(Arch::Arm64, versions(&[("go", "1.22")]))]);
        let out = render_markdown(&report, NOW);
        assert!(out.contains("| Tool | arm64 |\n| :--- | :--- |\n| go | 1.22 |\n"));
        assert!(!out.contains("amd64"));
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let report = MergedReport::merge([(Arch::Amd64, ToolVersions::new())]);
        let out = render_markdown(&report, NOW);
        assert!(out.ends_with("| Tool | amd64 |\n| :--- | :--- |\n"));
    }

    #[test]
    fn test_single_arch_round_trip() {
        let source = versions(&[("git", "2.40"), ("curl", "8.1"), ("jq", "1.7")]);
        let report = MergedReport::merge([(Arch::Amd64, source.clone())]);
        let reparsed = parse_table(&render_markdown(&report, NOW));
        assert_eq!(reparsed, source);
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
