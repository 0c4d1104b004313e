//! Persisting a path list as UTF-8 text.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Join the path list with newlines. No newline follows the last path.
pub fn render_path_list(paths: &[String]) -> String {
    paths.join("\n")
}

/// Write `paths` to `output`, replacing whatever is there.
///
/// The destination is made absolute against the working directory first; that
/// absolute path is returned. Missing parent directories are not created.
pub fn write_path_list(paths: &[String], output: &Path) -> Result<PathBuf> {
    let target = std::path::absolute(output)
        .with_context(|| format!("{}: failed to resolve output path", output.display()))?;

    fs::write(&target, render_path_list(paths))
        .with_context(|| format!("{}: failed to write path list", target.display()))?;

    debug!("wrote {} lines to {}", paths.len(), target.display());
    Ok(target)
}
