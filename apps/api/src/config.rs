use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL};

/// Default cosine threshold applied on top of the engine minimum.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.35;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog lives in memory when unset.
    pub redis_url: Option<String>,
    pub redis_prefix: String,
    /// Generation endpoints are disabled when unset.
    pub openrouter_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_model: String,
    pub similarity_threshold: f64,
    pub seed_default_modules: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let similarity_threshold = match optional_env("SIMILARITY_THRESHOLD") {
            Some(raw) => raw
                .parse::<f64>()
                .context("SIMILARITY_THRESHOLD must be a number")?,
            None => DEFAULT_SIMILARITY_THRESHOLD,
        };
        if !similarity_threshold.is_finite() {
            bail!("SIMILARITY_THRESHOLD must be finite");
        }

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            redis_prefix: optional_env("REDIS_PREFIX").unwrap_or_else(|| "organizer".to_string()),
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            llm_api_url: optional_env("LLM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            similarity_threshold,
            seed_default_modules: match optional_env("SEED_DEFAULT_MODULES") {
                Some(raw) => parse_bool(&raw)
                    .with_context(|| format!("SEED_DEFAULT_MODULES must be true or false, got '{raw}'"))?,
                None => true,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("not a boolean"),
    }
}
