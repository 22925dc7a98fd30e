use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;

/// Write the assembled report to `path`, replacing any previous file
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, contents)?;
    info!("Report written to {}", path.display());
    Ok(())
}
