use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Refuse to replace an existing file unless `force` is set, and make sure
/// the parent directory exists.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is a directory",
            path.display()
        )));
    }

    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}
