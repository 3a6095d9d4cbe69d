mod cors;
mod server;
mod url;

pub use cors::CorsConfig;
pub use server::ServerConfig;
pub use self::url::UrlConfig;

use crate::error::{AppError, AppResult};
use crate::services::short_code::{DEFAULT_LENGTH, DEFAULT_MAX_ATTEMPTS};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub url: UrlConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to their defaults; present but unparsable
    /// values are a configuration error.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port: u16 = parse_or(&lookup, "SERVER_PORT", 5000)?;

        let base_url = lookup("BASE_URL")
            .unwrap_or_else(|| default_base_url(server_port))
            .trim_end_matches('/')
            .to_string();
        let short_code_length = parse_or(&lookup, "SHORT_CODE_LENGTH", DEFAULT_LENGTH)?;
        let short_code_max_attempts =
            parse_or(&lookup, "SHORT_CODE_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;

        // CORS config
        let cors = CorsConfig::parse(&lookup("ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string()));

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            url: UrlConfig {
                short_code_length,
                base_url,
                short_code_max_attempts,
            },
            cors,
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        self.url.validate().map_err(AppError::Configuration)?;

        if self.cors.allowed_origins.is_empty() {
            return Err(AppError::Configuration(
                "ALLOWED_ORIGINS must list at least one origin".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply command-line bind overrides.
    ///
    /// A base URL that was derived from the old port follows the new one; an
    /// explicitly configured `BASE_URL` is left alone.
    pub fn with_bind_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }

        if let Some(port) = port {
            if self.url.base_url == default_base_url(self.server.port) {
                self.url.base_url = default_base_url(port);
            }
            self.server.port = port;
        }

        self
    }
}

fn default_base_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppResult<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.url.base_url, "http://localhost:5000");
        assert_eq!(config.url.short_code_length, 6);
        assert_eq!(config.url.short_code_max_attempts, 10);
        assert!(config.cors.allows_any());
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("SERVER_PORT", "not_a_port")]).unwrap_err();
        assert!(matches!(err, AppError::Configuration(msg) if msg == "Invalid SERVER_PORT"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let config = config_from(&[("BASE_URL", "https://sn.ap/")]).unwrap();
        assert_eq!(config.url.base_url, "https://sn.ap");
    }

    #[test]
    fn test_bind_overrides_follow_derived_base_url() {
        let config = config_from(&[])
            .unwrap()
            .with_bind_overrides(Some("127.0.0.1".to_string()), Some(8080));

        assert_eq!(config.server.addr(), "127.0.0.1:8080");
        assert_eq!(config.url.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_bind_overrides_keep_explicit_base_url() {
        let config = config_from(&[("BASE_URL", "https://sn.ap")])
            .unwrap()
            .with_bind_overrides(None, Some(8080));

        assert_eq!(config.url.base_url, "https://sn.ap");
    }
}
