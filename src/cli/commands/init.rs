use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::sqlite::SqliteBackend;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode) and the
/// SQLite database with its tables.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rPunchlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {db}");

    let mut store = RecordStore::new(SqliteBackend::open(&db)?);
    store.audit("init", "", &format!("Database initialized at {db}"));

    success(format!("Database initialized at {db}"));
    Ok(())
}
