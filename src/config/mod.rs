use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Connection settings for the attendance collection.
///
/// The MongoDB URI is the only secret the tool needs; it lives in the
/// config file (or is overridden with the global `--uri` flag).
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub mongo_uri: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_database() -> String {
    "asistencia".to_string()
}

fn default_collection() -> String {
    "asistencias".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_uri: "mongodb://localhost:27017".to_string(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("asistreport")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".asistreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("asistreport.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the configuration file with placeholder values
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AppError::Config(format!("failed to serialize defaults: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        println!("✅ Config file: {:?}", Self::config_file());
        println!("   Edit it and set `mongo_uri` to your connection string.");

        Ok(())
    }

    /// Check that the loaded configuration has usable values
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.mongo_uri.trim().is_empty() {
            problems.push("mongo_uri is empty".to_string());
        }
        if !self.mongo_uri.starts_with("mongodb://") && !self.mongo_uri.starts_with("mongodb+srv://")
        {
            problems.push("mongo_uri does not look like a MongoDB connection string".to_string());
        }
        if self.database.trim().is_empty() {
            problems.push("database name is empty".to_string());
        }
        if self.collection.trim().is_empty() {
            problems.push("collection name is empty".to_string());
        }

        problems
    }
}
