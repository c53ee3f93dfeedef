//! Configuration module for the community board core.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-key storage files
    pub data_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("BOARD_DATA_DIR")
            .unwrap_or_else(|_| "./data/board".to_string())
            .into();

        let log_level = env::var("BOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            data_dir,
            log_level,
        }
    }
}
