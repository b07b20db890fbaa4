use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolve a descriptor path to an absolute path.
///
/// Relative paths are joined onto `cwd`, or the current directory when no
/// `cwd` is given. The file is not required to exist and symlinks are kept.
pub fn resolve_descriptor_path(path: &str, cwd: Option<&str>) -> Result<PathBuf> {
    let path = Path::new(path);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let current_dir = || env::current_dir().context("Failed to get current directory");
    let base = match cwd {
        Some(cwd) if Path::new(cwd).is_absolute() => PathBuf::from(cwd),
        Some(cwd) => current_dir()?.join(cwd),
        None => current_dir()?,
    };

    Ok(base.join(path))
}
