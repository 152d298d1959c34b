use std::path::PathBuf;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON document replacing the built-in reference tables.
    pub reference_data_path: Option<PathBuf>,
    pub max_batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            reference_data_path: None,
            max_batch_size: 100,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            reference_data_path: optional_env("REFERENCE_DATA_PATH").map(PathBuf::from),
            max_batch_size: match optional_env("MAX_BATCH_SIZE") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MAX_BATCH_SIZE must be a positive integer")?,
                None => defaults.max_batch_size,
            },
        };
        ensure!(config.max_batch_size > 0, "MAX_BATCH_SIZE must be a positive integer");
        Ok(config)
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
