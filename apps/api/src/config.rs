use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a working default so the service starts bare.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted jobs document.
    pub data_file: PathBuf,
    /// Bearer token required on mutating requests. `None` leaves them open.
    pub admin_token: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_file: std::env::var("DATA_FILE")
                .unwrap_or_else(|_| "data/jobs.json".to_string())
                .into(),
            admin_token: std::env::var("ADMIN_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
