use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absent key means the LLM quality grader is disabled.
    pub groq_api_key: Option<String>,
    pub grader_timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            groq_api_key: lookup("GROQ_API_KEY").filter(|k| !k.trim().is_empty()),
            grader_timeout: Duration::from_secs(parse_or(&lookup, "ATS_GRADER_TIMEOUT_SECS", 30)?),
            cache_ttl: Duration::from_secs(parse_or(&lookup, "ATS_CACHE_TTL_SECS", 86_400)?),
            cache_capacity: parse_or(&lookup, "ATS_CACHE_CAPACITY", 1_000)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Defaults only, ignoring the process environment.
    pub fn defaults() -> Self {
        Self::from_lookup(|_| None).expect("defaults always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::defaults();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.groq_api_key.is_none());
        assert_eq!(config.grader_timeout, Duration::from_secs(30));
        assert_eq!(config.cache_ttl, Duration::from_secs(86_400));
        assert_eq!(config.cache_capacity, 1_000);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("GROQ_API_KEY", "gsk_test"),
            ("ATS_GRADER_TIMEOUT_SECS", " 5 "),
            ("ATS_CACHE_CAPACITY", "10"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.grader_timeout, Duration::from_secs(5));
        assert_eq!(config.cache_capacity, 10);
    }

    #[test]
    fn test_blank_api_key_disables_grader() {
        let config = config_from(&[("GROQ_API_KEY", "  ")]).unwrap();
        assert!(config.groq_api_key.is_none());
    }

    #[test]
    fn test_malformed_number_names_the_variable() {
        let err = config_from(&[("ATS_CACHE_TTL_SECS", "a day")]).unwrap_err();
        assert!(err.to_string().contains("ATS_CACHE_TTL_SECS"));
    }
}
