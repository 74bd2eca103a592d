/// Invocation config and the ordered union of per-architecture reports.
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use super::arch::Arch;
use super::errors::ReportError;
use super::table::ToolVersions;

/// Which files to read and where to write the unified report.
///
/// Both the named-flag and positional invocations resolve into this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeConfig {
    pub amd64: Option<PathBuf>,
    pub arm64: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl MergeConfig {
    /// Build from `--amd64` / `--arm64` / `--output`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Usage` when neither architecture is given.
    pub fn from_named(
        amd64: Option<PathBuf>,
        arm64: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self, ReportError> {
        if amd64.is_none() && arm64.is_none() {
            return Err(ReportError::usage(
                "At least one of --amd64 or --arm64 must be provided.",
            ));
        }
        Ok(Self {
            amd64,
            arm64,
            output,
        })
    }

    /// Build from `<amd64_file> <arm64_file> <output_file>`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Usage` unless exactly three paths are given.
    pub fn from_positional(files: &[PathBuf]) -> Result<Self, ReportError> {
        match files {
            [amd64, arm64, output] => Ok(Self {
                amd64: Some(amd64.clone()),
                arm64: Some(arm64.clone()),
                output: Some(output.clone()),
            }),
            _ => Err(ReportError::usage(format!(
                "Expected 3 positional arguments <amd64_file> <arm64_file> <output_file>, got {}",
                files.len()
            ))),
        }
    }

    /// Input path for `arch`, if that architecture was selected.
    #[must_use]
    pub fn input(&self, arch: Arch) -> Option<&Path> {
        match arch {
            Arch::Amd64 => self.amd64.as_deref(),
            Arch::Arm64 => self.arm64.as_deref(),
        }
    }

    /// Selected architectures, in column order.
    #[must_use]
    pub fn architectures(&self) -> Vec<Arch> {
        Arch::ALL
            .into_iter()
            .filter(|arch| self.input(*arch).is_some())
            .collect()
    }
}

/// Ordered union of tool names plus each selected architecture's versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedReport {
    architectures: Vec<Arch>,
    tools: Vec<String>,
    versions: BTreeMap<Arch, ToolVersions>,
}

impl MergedReport {
    /// Merge the reports of the selected architectures.
    ///
    /// Tool order is amd64's order first, then tools first seen in arm64,
    /// regardless of the order `reports` is given in. Selecting the same
    /// architecture twice keeps the last report.
    #[must_use]
    pub fn merge(reports: impl IntoIterator<Item = (Arch, ToolVersions)>) -> Self {
        let versions: BTreeMap<Arch, ToolVersions> = reports.into_iter().collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut tools = Vec::new();
        for report in versions.values() {
            for tool in report.tools() {
                if seen.insert(tool) {
                    tools.push(tool.to_owned());
                }
            }
        }

        Self {
            architectures: versions.keys().copied().collect(),
            tools,
            versions,
        }
    }

    /// Architectures that were selected, in column order.
    #[must_use]
    pub fn architectures(&self) -> &[Arch] {
        &self.architectures
    }

    /// Version of `tool` on `arch`, or `None` when absent.
    #[must_use]
    pub fn version(&self, tool: &str, arch: Arch) -> Option<&str> {
        self.versions.get(&arch)?.get(tool)
    }

    /// One row per tool: the tool name and one optional version per selected architecture.
    pub fn rows(&self) -> impl Iterator<Item = (&str, Vec<Option<&str>>)> {
        self.tools.iter().map(|tool| {
            let cells = self
                .architectures
                .iter()
                .map(|arch| self.version(tool, *arch))
                .collect();
            (tool.as_str(), cells)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(pairs: &[(&str, &str)]) -> ToolVersions {
        pairs.iter().copied().collect()
    }

    fn tools(report: &MergedReport) -> Vec<&str> {
        report.rows().map(|(tool, _)| tool).collect()
    }

    fn sample() -> MergedReport {
        MergedReport::merge([
            (Arch::Amd64, versions(&[("git", "2.40"), ("curl", "8.1")])),
            (Arch::Arm64, versions(&[("curl", "8.0"), ("make", "4.3")])),
        ])
    }

    #[test]
    fn test_union_order() {
        let report = sample();
        assert_eq!(tools(&report), ["git", "curl", "make"]);
    }

    #[test]
    fn test_union_order_independent_of_argument_order() {
        let report = MergedReport::merge([
            (Arch::Arm64, versions(&[("make", "4.3"), ("curl", "8.0")])),
            (Arch::Amd64, versions(&[("git", "2.40")])),
        ]);
        assert_eq!(tools(&report), ["git", "make", "curl"]);
        assert_eq!(report.architectures(), [Arch::Amd64, Arch::Arm64]);
    }

    #[test]
    fn test_rows_with_missing_cells() {
        let report = sample();
        let rows: Vec<_> = report.rows().collect();
        assert_eq!(
            rows,
            vec![
                ("git", vec![Some("2.40"), None]),
                ("curl", vec![Some("8.1"), Some("8.0")]),
                ("make", vec![None, Some("4.3")]),
            ]
        );
    }

    #[test]
    fn test_single_arch() {
        let report = MergedReport::merge([(Arch::Arm64, versions(&[("go", "1.21")]))]);
        assert_eq!(report.architectures(), [Arch::Arm64]);
        assert_eq!(report.rows().collect::<Vec<_>>(), vec![("go", vec![Some("1.21")])]);
        assert_eq!(report.version("go", Arch::Amd64), None);
    }

    #[test]
    fn test_selected_but_empty_keeps_column() {
        let report = MergedReport::merge([
            (Arch::Amd64, ToolVersions::new()),
            (Arch::Arm64, versions(&[("jq", "1.7")])),
        ]);
        assert_eq!(report.architectures(), [Arch::Amd64, Arch::Arm64]);
        assert_eq!(
            report.rows().collect::<Vec<_>>(),
            vec![("jq", vec![None, Some("1.7")])]
        );
    }

    #[test]
    fn test_named_requires_an_arch() {
        let result = MergeConfig::from_named(None, None, Some(PathBuf::from("out.md")));
        assert!(matches!(result, Err(ReportError::Usage { .. })));
    }

    #[test]
    fn test_named_single_arch() {
        let config = MergeConfig::from_named(None, Some(PathBuf::from("arm.md")), None).unwrap();
        assert_eq!(config.architectures(), vec![Arch::Arm64]);
        assert_eq!(config.input(Arch::Arm64), Some(Path::new("arm.md")));
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_positional_three() {
        let files: Vec<PathBuf> = ["a.md", "b.md", "out/c.md"].iter().map(PathBuf::from).collect();
        let config = MergeConfig::from_positional(&files).unwrap();
        assert_eq!(config.architectures(), vec![Arch::Amd64, Arch::Arm64]);
        assert_eq!(config.output, Some(PathBuf::from("out/c.md")));
    }

    #[test]
    fn test_positional_wrong_count() {
        let files = vec![PathBuf::from("a.md"), PathBuf::from("b.md")];
        let err = MergeConfig::from_positional(&files).unwrap_err();
        assert!(matches!(err, ReportError::Usage { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
