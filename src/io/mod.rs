//! The imperative shell: subprocesses, files and terminal output.

pub mod extractor;
pub mod report;

pub use extractor::{ensure_manifest, parse_interface, InterfaceExtractor};
pub use report::{render_report, InspectReport, ReportFormat};

use crate::core::errors::{Result, ResultExt};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
}

/// Write `content`, creating missing parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content).context(format!("Failed to write {}", path.display()))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).context(format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
