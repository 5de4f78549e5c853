use crate::errors::ConfigError;
use std::env;
use std::time::Duration;

pub const DEFAULT_OLLAMA_API_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_api_url: String,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama_api_url: DEFAULT_OLLAMA_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let request_timeout = match lookup("OLLAMA_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "OLLAMA_TIMEOUT_SECS",
                        expected: "a positive number of seconds",
                        value,
                    })
                }
            },
            None => defaults.request_timeout,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "MAX_BODY_BYTES",
                        expected: "a positive number of bytes",
                        value,
                    })
                }
            },
            None => defaults.max_body_bytes,
        };

        let port = match lookup("SERVER_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "SERVER_PORT",
                expected: "a port number",
                value,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            ollama_api_url: lookup("OLLAMA_API_URL").unwrap_or(defaults.ollama_api_url),
            request_timeout,
            max_body_bytes,
            host: lookup("SERVER_HOST").unwrap_or(defaults.host),
            port,
        })
    }
}
