/// Markdown table parsing into an insertion-ordered tool → version map.
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::errors::ReportError;

// | <tool> | <version> |
static ROW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|\s*(.*?)\s*\|\s*(.*?)\s*\|$").unwrap());

/// Tool → version mapping that remembers the order tools were first seen.
///
/// Re-inserting an existing tool replaces its version but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolVersions {
    order: Vec<String>,
    versions: HashMap<String, String>,
}

impl ToolVersions {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the version for `tool`.
    pub fn insert(&mut self, tool: impl Into<String>, version: impl Into<String>) {
        let tool = tool.into();
        if !self.versions.contains_key(&tool) {
            self.order.push(tool.clone());
        }
        self.versions.insert(tool, version.into());
    }

    /// Version recorded for `tool`, if any.
    #[must_use]
    pub fn get(&self, tool: &str) -> Option<&str> {
        self.versions.get(tool).map(String::as_str)
    }

    /// Tool names in first-seen order.
    pub fn tools(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(tool, version)` pairs in first-seen order.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|tool| (tool.as_str(), self.versions[tool].as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ToolVersions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (tool, version) in iter {
            map.insert(tool, version);
        }
        map
    }
}

/// Match one line against the row shape, returning the trimmed columns.
fn parse_row(line: &str) -> Option<(&str, &str)> {
    let caps = ROW_PATTERN.captures(line)?;
    let tool = caps.get(1)?.as_str().trim();
    let version = caps.get(2)?.as_str().trim();
    Some((tool, version))
}

/// Header (`| Tool | ... |`) and alignment (`| :--- | ... |`) rows.
fn is_reserved(tool: &str) -> bool {
    tool.eq_ignore_ascii_case("tool") || tool == ":---"
}

/// Parse markdown text into a `ToolVersions` map.
///
/// Lines that don't look like `| <tool> | <version> |` are ignored. Header and
/// separator rows are skipped. A repeated tool keeps its first position but
/// takes the later version.
#[must_use]
pub fn parse_table(text: &str) -> ToolVersions {
    let mut map = ToolVersions::new();
    for (tool, version) in text.lines().filter_map(parse_row) {
        if is_reserved(tool) {
            continue;
        }
        map.insert(tool, version);
    }
    map
}

/// Read and parse a markdown table file.
///
/// Returns `Ok(None)` when nothing exists at `path`, including when a parent
/// component is a regular file, so callers can degrade to an empty report.
///
/// # Errors
///
/// Returns `ReportError::Read` if the file exists but cannot be read as UTF-8.
pub fn parse_table_file(path: &Path) -> Result<Option<ToolVersions>, ReportError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(parse_table(&text))),
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            Ok(None)
        }
        Err(source) => Err(ReportError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
