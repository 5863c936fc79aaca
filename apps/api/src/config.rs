use anyhow::{Context, Result};

use crate::feedback::report::DEFAULT_MIN_JOB_DESCRIPTION_CHARS;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Minimum job-description length before keywords are extracted.
    pub jd_min_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            jd_min_chars: match std::env::var("JD_MIN_CHARS") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("JD_MIN_CHARS must be a non-negative integer")?,
                Err(_) => DEFAULT_MIN_JOB_DESCRIPTION_CHARS,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
