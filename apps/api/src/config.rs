use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every key has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub allowed_origins: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            allowed_origins: env_or(
                "ALLOWED_ORIGINS",
                "http://localhost:5173,http://localhost:3000",
            ),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Splits `ALLOWED_ORIGINS` on commas, trimming whitespace and
    /// dropping empty entries.
    pub fn allowed_origins_list(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
