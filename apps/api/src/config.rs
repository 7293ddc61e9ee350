use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// A missing required variable fails startup — never a mid-session crash.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Optional access code gating the welcome page. `None` means the gate is open.
    pub access_code: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = optional_env("PORT").unwrap_or_else(|| "8080".to_string());
        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            access_code: optional_env("ACCESS_CODE"),
            port: port.parse::<u16>().context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("required environment variable {key} is missing"))
}

/// Unset and empty are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
