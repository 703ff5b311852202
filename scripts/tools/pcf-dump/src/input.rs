//! Input file discovery and reading

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use pcf_config::InputSection;
use tracing::debug;

/// Files named on the command line, or else every matching file in the
/// configured input directory, sorted by name
pub fn collect_inputs(files: &[PathBuf], input: &InputSection) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files.to_vec());
    }

    let Some(directory) = &input.directory else {
        bail!("No input files given and no input.directory configured");
    };

    let mut found = Vec::new();
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to read input directory {}", directory.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", directory.display()))?
            .path();
        if path.is_file() && has_extension(&path, &input.extension) {
            found.push(path);
        }
    }
    found.sort();

    debug!(directory = %directory.display(), count = found.len(), "collected input files");
    Ok(found)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(wanted))
}

/// Whole message file
pub fn read_message(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
