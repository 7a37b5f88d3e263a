//! Directory enumeration for batch jobs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Workbook extensions accepted by the sheet-reading jobs
pub const WORKBOOK_EXTENSIONS: &[&str] = &["xls", "xlsx"];

/// List the plain files in `dir` whose extension matches one of
/// `extensions` (case-insensitive), sorted by path for a deterministic
/// batch order.
pub fn files_with_extension(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if extensions.iter().any(|want| extension.eq_ignore_ascii_case(want)) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// The file name of a path, for progress messages
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
