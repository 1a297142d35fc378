use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value falls back to a local-development default.
#[derive(Debug, Clone)]
pub struct Config {
    pub hr_service_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hr_service_url: std::env::var("HR_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
