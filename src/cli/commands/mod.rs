pub mod add;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod policy;

use crate::config::Config;
use crate::core::reconcile::ImportSummary;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::sqlite::SqliteBackend;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore<SqliteBackend>> {
    Ok(RecordStore::new(SqliteBackend::open(&cfg.database)?))
}

pub(crate) fn report_summary(summary: &ImportSummary) {
    if summary.changed() {
        success(format!("{} punch(es) applied", summary.applied));
    } else {
        info("No changes: every punch was already recorded");
    }
    if summary.duplicates > 0 {
        info(format!("{} duplicate(s) ignored", summary.duplicates));
    }
    if summary.conflicts > 0 {
        warning(format!(
            "{} punch(es) conflict with a time already set and were ignored",
            summary.conflicts
        ));
    }
    if summary.skipped > 0 {
        warning(format!("{} malformed item(s) skipped", summary.skipped));
    }
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub(crate) fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}
