use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a sensible local default — the service runs offline
/// against a local inference server out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory for the SQLite file and exports.
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
    /// Base URL of the local Ollama-compatible inference server.
    pub model_base_url: String,
    pub model_name: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = PathBuf::from(env_or("DATA_DIR", "./data"));
        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("profiles.db"));

        Ok(Config {
            port: parse_env("PORT", "8080")?,
            data_dir,
            database_path,
            model_base_url: env_or("MODEL_BASE_URL", "http://127.0.0.1:11434"),
            model_name: env_or("MODEL_NAME", "tinyllama"),
            max_tokens: parse_env("MAX_TOKENS", "200")?,
            temperature: parse_env("TEMPERATURE", "0.7")?,
            top_p: parse_env("TOP_P", "0.9")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env_or(key, default)
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value"))
}
