use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn default_branch() -> String {
    "main".to_string()
}
fn default_busy_timeout() -> u64 {
    5_000
}
fn default_class_code() -> String {
    "1234".to_string()
}
fn default_daily_limit() -> i64 {
    10
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub archive_dir: String,
    #[serde(default = "default_branch")]
    pub archive_branch: String,
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_ms: u64,
    #[serde(default = "default_class_code")]
    pub default_class_code: String,
    #[serde(default = "default_daily_limit")]
    pub default_daily_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            archive_dir: Self::archive_dir().to_string_lossy().to_string(),
            archive_branch: default_branch(),
            busy_timeout_ms: default_busy_timeout(),
            default_class_code: default_class_code(),
            default_daily_limit: default_daily_limit(),
        }
    }
}

impl Config {
    /// Standard configuration directory for the current platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rollbook")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollbook.conf")
    }

    /// Full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rollbook.sqlite")
    }

    /// Root of the local snapshot archive.
    pub fn archive_dir() -> PathBuf {
        Self::config_dir().join("archive")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("could not parse '{}': {e}", path.display())))
    }

    /// Report configuration keys missing from the file on disk; the loader
    /// fills them with defaults, but `config --check` wants to name them.
    pub fn missing_keys() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::ConfigLoad);
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let doc: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("could not parse '{}': {e}", path.display())))?;

        let keys = [
            "database",
            "archive_dir",
            "archive_branch",
            "busy_timeout_ms",
            "default_class_code",
            "default_daily_limit",
        ];
        Ok(keys
            .into_iter()
            .filter(|k| doc.get(*k).is_none())
            .collect())
    }

    /// Initialize configuration, database and archive directories.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        // Write config file (skipped under --test so test runs never touch
        // the operator's real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
