/// Writing the unified report to disk.
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::errors::ReportError;

/// Write `content` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// The file handle is flushed and closed before returning on every path.
///
/// # Errors
///
/// Returns `ReportError::Write` if a directory cannot be created or the file
/// cannot be written.
pub fn save_report(path: &Path, content: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    writer.write_all(content.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)
}
