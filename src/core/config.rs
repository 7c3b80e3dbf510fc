use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Open `path` in the requested editor, falling back to `$EDITOR`,
    /// `$VISUAL`, then the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let mut candidates = Vec::new();
        if let Some(ed) = editor {
            candidates.push(ed.clone());
        }
        if !candidates.contains(&default_editor) {
            candidates.push(default_editor);
        }

        for ed in &candidates {
            if let Ok(status) = Command::new(ed).arg(path).status()
                && status.success()
            {
                return Ok(ed.clone());
            }
        }

        Err(AppError::Config(format!(
            "no usable editor among: {}",
            candidates.join(", ")
        )))
    }
}
