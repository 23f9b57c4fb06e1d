use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// `None` keeps candidates in memory only.
    pub storage_dir: Option<PathBuf>,
    pub storage_disabled: bool,
    pub max_campaigns: usize,
    pub max_candidates_per_campaign: usize,
    pub generation_delay_ms: u64,
    /// `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            storage_dir: None,
            storage_disabled: false,
            max_campaigns: 10,
            max_candidates_per_campaign: 50,
            generation_delay_ms: 1500,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: parse_or("PORT", &lookup, defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            storage_dir: non_empty(lookup("STORAGE_DIR")).map(PathBuf::from),
            storage_disabled: parse_or("STORAGE_DISABLED", &lookup, defaults.storage_disabled)?,
            max_campaigns: parse_or("MAX_CAMPAIGNS", &lookup, defaults.max_campaigns)?,
            max_candidates_per_campaign: parse_or(
                "MAX_CANDIDATES_PER_CAMPAIGN",
                &lookup,
                defaults.max_candidates_per_campaign,
            )?,
            generation_delay_ms: parse_or(
                "GENERATION_DELAY_MS",
                &lookup,
                defaults.generation_delay_ms,
            )?,
            catalog_path: non_empty(lookup("CATALOG_PATH")).map(PathBuf::from),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
