//! Utility functions for helm

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(anyhow!("Path exists but is not a directory: {:?}", path));
    }
    Ok(())
}

/// Get the XDG config directory for helm
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine config directory"))?
        .join("helm");

    Ok(config_dir)
}

/// Expand `~` and environment variables in a path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::full(&path_str)
        .map_err(|e| anyhow!("Failed to expand {}: {}", path_str, e))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Find files under `dir` whose extension is one of `extensions`, sorted by path.
///
/// Symlinks are followed; an entry that can't be read is an error.
pub fn find_files_with_extensions(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(anyhow!("Not a directory: {:?}", dir));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| anyhow!("Failed to scan {:?}: {}", dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        let matches = path
            .extension()
            .map(|ext| extensions.iter().any(|wanted| ext == wanted.as_str()))
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Split a `key=value` argument
pub fn parse_key_value(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(anyhow!("Expected KEY=VALUE, got '{}'", arg)),
    }
}

/// Format duration as human readable string
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs > 0 {
        format!("{secs}.{millis:03}s")
    } else {
        format!("{millis}ms")
    }
}
