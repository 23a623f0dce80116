//! Runtime configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use halflife_observability::LogFormat;

pub const DATA_PATH_VAR: &str = "HALFLIFE_DATA_PATH";
pub const BIND_ADDR_VAR: &str = "HALFLIFE_BIND_ADDR";
pub const EAGER_LOAD_VAR: &str = "HALFLIFE_EAGER_LOAD";
pub const LOG_FORMAT_VAR: &str = "HALFLIFE_LOG_FORMAT";
pub const CSV_DELIMITER_VAR: &str = "HALFLIFE_CSV_DELIMITER";

pub const DEFAULT_DATA_PATH: &str = "skill_half_life_ai.csv";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CSV_DELIMITER: u8 = b',';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must be true or false (got {value})")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidLogFormat { var: &'static str, message: String },

    #[error("{var} must be a single ASCII character or `tab` (got {value:?})")]
    InvalidDelimiter { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// CSV dataset location.
    pub data_path: PathBuf,
    /// Field separator of the dataset file.
    pub csv_delimiter: u8,
    pub bind_addr: SocketAddr,
    /// Load the dataset before accepting requests (fail fast on a bad file).
    pub eager_load: bool,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup(DATA_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

        let csv_delimiter = match lookup(CSV_DELIMITER_VAR) {
            None => DEFAULT_CSV_DELIMITER,
            Some(v) => parse_delimiter(&v).ok_or(ConfigError::InvalidDelimiter {
                var: CSV_DELIMITER_VAR,
                value: v.clone(),
            })?,
        };

        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_raw.clone(),
            })?;

        let eager_load = match lookup(EAGER_LOAD_VAR) {
            None => false,
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidBool {
                var: EAGER_LOAD_VAR,
                value: v.clone(),
            })?,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(v) => v.parse::<LogFormat>().map_err(|message| ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_VAR,
                message,
            })?,
        };

        Ok(Self {
            data_path: PathBuf::from(data_path),
            csv_delimiter,
            bind_addr,
            eager_load,
            log_format,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_delimiter(value: &str) -> Option<u8> {
    if value.eq_ignore_ascii_case("tab") || value == "\\t" {
        return Some(b'\t');
    }
    match value.as_bytes() {
        [b] if b.is_ascii() && !b.is_ascii_alphanumeric() => Some(*b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(cfg.csv_delimiter, b',');
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert!(!cfg.eager_load);
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            (DATA_PATH_VAR, "/data/skills.csv"),
            (CSV_DELIMITER_VAR, ";"),
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (EAGER_LOAD_VAR, "yes"),
            (LOG_FORMAT_VAR, "pretty"),
        ]))
        .unwrap();

        assert_eq!(cfg.data_path, PathBuf::from("/data/skills.csv"));
        assert_eq!(cfg.csv_delimiter, b';');
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert!(cfg.eager_load);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ApiConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));

        let err = ApiConfig::from_lookup(lookup(&[(EAGER_LOAD_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));

        let err = ApiConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat { .. }));

        for bad in ["", ";;", "a", "é"] {
            let err = ApiConfig::from_lookup(lookup(&[(CSV_DELIMITER_VAR, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidDelimiter { .. }), "{bad:?}");
        }
    }

    #[test]
    fn tab_delimiter_is_spelled_out() {
        for spelling in ["tab", "TAB", "\\t", "\t"] {
            let cfg = ApiConfig::from_lookup(lookup(&[(CSV_DELIMITER_VAR, spelling)])).unwrap();
            assert_eq!(cfg.csv_delimiter, b'\t', "{spelling:?}");
        }
    }
}
