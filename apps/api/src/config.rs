use anyhow::{Context, Result};

/// Placeholder value some deployment templates ship for the job-search key;
/// treated the same as the variable being unset.
const RAPIDAPI_KEY_PLACEHOLDER: &str = "your-rapidapi-key-here";

/// Application configuration loaded from environment variables.
/// The optional upstream collaborators (live job search, resume assistant)
/// stay disabled when their keys are absent — the service degrades to the
/// baked-in fallbacks rather than failing to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rapidapi_key: Option<String>,
    pub rapidapi_host: String,
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            rapidapi_key: std::env::var("RAPIDAPI_KEY")
                .ok()
                .filter(|k| !k.is_empty() && k != RAPIDAPI_KEY_PLACEHOLDER),
            rapidapi_host: std::env::var("RAPIDAPI_HOST")
                .unwrap_or_else(|_| "jsearch.p.rapidapi.com".to_string()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
