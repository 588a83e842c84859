use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_APPLY_DELAY_MS: u64 = 2000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Artificial latency of the simulated job application.
    pub apply_delay: Duration,
    /// Upper bound on request bodies, uploaded resume files included.
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            apply_delay: Duration::from_millis(DEFAULT_APPLY_DELAY_MS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            apply_delay: Duration::from_millis(
                parse_env("APPLY_DELAY_MS", DEFAULT_APPLY_DELAY_MS)
                    .context("APPLY_DELAY_MS must be a whole number of milliseconds")?,
            ),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

/// Reads `key` and parses it, returning `default` when the variable is unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.apply_delay, Duration::from_secs(2));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_parse_env_unset_falls_back_to_default() {
        let value: u64 = parse_env("TAILOR_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_reads_and_trims_value() {
        std::env::set_var("TAILOR_TEST_DELAY_VALUE", " 1500 ");
        let value: u64 = parse_env("TAILOR_TEST_DELAY_VALUE", 0).unwrap();
        assert_eq!(value, 1500);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("TAILOR_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("TAILOR_TEST_BAD_PORT", 8080);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("TAILOR_TEST_BAD_PORT"), "got: {err}");
    }
}
