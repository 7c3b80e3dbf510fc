use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".rpunchlog";
const CONFIG_FILE: &str = "rpunchlog.conf";
const DATABASE_FILE: &str = "rpunchlog.sqlite";

/// Application settings read from `~/.rpunchlog/rpunchlog.conf`.
///
/// The overtime policy is not kept here: it lives in the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// `~/.rpunchlog`, or `%APPDATA%\rpunchlog` on Windows.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rpunchlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// First character of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Read the configuration file, or return defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Create the config directory, write the config file (unless in test
    /// mode) and return the resolved database path.
    ///
    /// A relative `custom_db` is placed inside the config directory.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() || is_test {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
