/// Shared serializable output types.
///
/// These are what gets written to stdout/stderr in the JSON formats. They are
/// decoupled from the internal `MergedReport` / `ReportError` types.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::report::{Arch, MergedReport, ReportError};

/// The unified report in JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    /// Local timestamp the report was generated at (`YYYY-MM-DD HH:MM:SS`).
    pub generated_on: String,
    /// Selected architectures, in column order.
    pub architectures: Vec<Arch>,
    /// One entry per tool, in merged order.
    pub tools: Vec<ToolRowOutput>,
}

/// One tool and its version on each selected architecture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRowOutput {
    /// Tool name.
    pub tool: String,
    /// Version per architecture; null when the tool wasn't found there.
    #[serde(flatten)]
    pub versions: BTreeMap<Arch, Option<String>>,
}

impl ReportOutput {
    /// Construct from a `MergedReport`.
    #[must_use]
    pub fn from_report(report: &MergedReport, generated_on: &str) -> Self {
        let tools = report
            .rows()
            .map(|(tool, cells)| ToolRowOutput {
                tool: tool.to_owned(),
                versions: report
                    .architectures()
                    .iter()
                    .copied()
                    .zip(cells.into_iter().map(|c| c.map(str::to_owned)))
                    .collect(),
            })
            .collect();
        Self {
            generated_on: generated_on.to_owned(),
            architectures: report.architectures().to_vec(),
            tools,
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// File involved in the failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `ReportError`.
    #[must_use]
    pub fn from_report_error(err: &ReportError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                path: err.path().map(|p| p.display().to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ToolVersions;

    #[test]
    fn test_report_json_shape() {
        let amd64: ToolVersions = [("git", "2.40")].into_iter().collect();
        let arm64: ToolVersions = [("make", "4.3")].into_iter().collect();
        let report = MergedReport::merge([(Arch::Amd64, amd64), (Arch::Arm64, arm64)]);
        let output = ReportOutput::from_report(&report, "2024-05-01 12:30:00");

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["generated_on"], "2024-05-01 12:30:00");
        assert_eq!(value["architectures"], serde_json::json!(["amd64", "arm64"]));
        assert_eq!(
            value["tools"],
            serde_json::json!([
                {"tool": "git", "amd64": "2.40", "arm64": null},
                {"tool": "make", "amd64": null, "arm64": "4.3"}
            ])
        );
    }

    #[test]
    fn test_error_envelope() {
        let err = ReportError::usage("At least one of --amd64 or --arm64 must be provided.");
        let value = serde_json::to_value(ErrorOutput::from_report_error(&err)).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "usage");
        assert!(value["error"].get("path").is_none());
    }
}
