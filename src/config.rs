use crate::services::DEFAULT_MAX_SENTENCES;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub max_text_bytes: usize,
    pub summary_sentences: usize,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            max_text_bytes: 10_000,
            summary_sentences: DEFAULT_MAX_SENTENCES,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| {
            let port = lookup("PORT").unwrap_or_else(|| "5000".to_string());
            format!("0.0.0.0:{}", port)
        });

        Ok(Self {
            bind_addr,
            max_text_bytes: positive(&lookup, "MAX_TEXT_BYTES", defaults.max_text_bytes)?,
            summary_sentences: positive(&lookup, "SUMMARY_SENTENCES", defaults.summary_sentences)?,
            request_timeout_secs: positive(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
        })
    }
}

fn positive<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::InvalidNumber { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.max_text_bytes, 10_000);
        assert_eq!(config.summary_sentences, 3);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_port_and_bind_addr() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");

        let config = config_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1:9000")]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_numeric_overrides() {
        let config = config_from(&[("MAX_TEXT_BYTES", "2048"), ("SUMMARY_SENTENCES", " 5 ")]).unwrap();
        assert_eq!(config.max_text_bytes, 2048);
        assert_eq!(config.summary_sentences, 5);
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        assert!(matches!(
            config_from(&[("SUMMARY_SENTENCES", "0")]),
            Err(ConfigError::InvalidNumber { var: "SUMMARY_SENTENCES", .. })
        ));
        assert!(config_from(&[("MAX_TEXT_BYTES", "lots")]).is_err());
        assert!(config_from(&[("REQUEST_TIMEOUT_SECS", "-1")]).is_err());
    }
}
