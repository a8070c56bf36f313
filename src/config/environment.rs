// ABOUTME: Environment configuration for the listener, the USDA client, and the cache
// ABOUTME: Reads process variables after an optional .env file and validates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Environment-based configuration

use crate::cache::CacheConfig;
use crate::constants::{cache, defaults, usda};
use crate::errors::{AppError, AppResult};
use crate::external::UsdaClientConfig;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Allowed CORS origin (`*` for any)
    pub client_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: defaults::HTTP_HOST.to_owned(),
            port: defaults::HTTP_PORT,
            client_url: defaults::CLIENT_URL.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listener settings
    pub http: HttpConfig,
    /// Upstream provider settings
    pub usda: UsdaClientConfig,
    /// Response cache settings
    pub cache: CacheConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present;
    /// variables already set in the process take precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if `USDA_API_KEY` is unset or blank, and
    /// `ConfigInvalid` if a numeric variable does not parse or is out of range
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let api_key = lookup("USDA_API_KEY")
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::config_missing("USDA_API_KEY"))?;

        let http = HttpConfig {
            host: lookup("HTTP_HOST").unwrap_or_else(|| defaults::HTTP_HOST.to_owned()),
            port: parse_var(&lookup, "PORT", defaults::HTTP_PORT)?,
            client_url: lookup("CLIENT_URL").unwrap_or_else(|| defaults::CLIENT_URL.to_owned()),
        };

        let usda = UsdaClientConfig {
            api_key,
            base_url: lookup("USDA_API_BASE").unwrap_or_else(|| usda::DEFAULT_BASE_URL.to_owned()),
            timeout_secs: parse_seconds(
                &lookup,
                "USDA_TIMEOUT_SECS",
                usda::DEFAULT_TIMEOUT_SECS,
                usda::MAX_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_seconds(
                &lookup,
                "USDA_CONNECT_TIMEOUT_SECS",
                usda::DEFAULT_CONNECT_TIMEOUT_SECS,
                usda::MAX_TIMEOUT_SECS,
            )?,
        };

        let cache = CacheConfig {
            default_ttl: Duration::from_secs(parse_seconds(
                &lookup,
                "CACHE_TTL_SECS",
                cache::DEFAULT_TTL_SECS,
                cache::MAX_TTL_SECS,
            )?),
            cleanup_interval: Duration::from_secs(parse_seconds(
                &lookup,
                "CACHE_CLEANUP_INTERVAL_SECS",
                cache::DEFAULT_CLEANUP_INTERVAL_SECS,
                cache::MAX_TTL_SECS,
            )?),
            enable_background_cleanup: true,
        };

        Ok(Self { http, usda, cache })
    }

    /// Socket address string for the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrilog Server Configuration:\n\
             - Listen: {}\n\
             - CORS Origin: {}\n\
             - USDA API: {}\n\
             - USDA API Key: {}\n\
             - Upstream Timeout: {}s (connect {}s)\n\
             - Cache TTL: {}s\n\
             - Cache Sweep Interval: {}s",
            self.bind_address(),
            self.http.client_url,
            self.usda.base_url,
            if self.usda.api_key.is_empty() {
                "Missing"
            } else {
                "Configured"
            },
            self.usda.timeout_secs,
            self.usda.connect_timeout_secs,
            self.cache.default_ttl.as_secs(),
            self.cache.cleanup_interval.as_secs(),
        )
    }
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))
    })
}

/// Parse an optional duration-like variable that must lie in `1..=max`
fn parse_seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
    max: u64,
) -> AppResult<u64> {
    match parse_var(lookup, key, default)? {
        0 => Err(AppError::config_invalid(format!(
            "{key} must be greater than zero"
        ))),
        value if value > max => Err(AppError::config_invalid(format!(
            "{key} must be at most {max} seconds"
        ))),
        value => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AppResult<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_applied() {
        let config = load(&[("USDA_API_KEY", "key")]).unwrap();

        assert_eq!(config.http, HttpConfig::default());
        assert_eq!(config.usda.base_url, usda::DEFAULT_BASE_URL);
        assert_eq!(config.cache.default_ttl, Duration::from_secs(3600));
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_missing_api_key() {
        let err = load(&[("USDA_API_KEY", "  ")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissing);
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        let err = load(&[("USDA_API_KEY", "key"), ("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);

        let err = load(&[("USDA_API_KEY", "key"), ("CACHE_TTL_SECS", "0")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_out_of_range_durations_rejected() {
        let err = load(&[
            ("USDA_API_KEY", "key"),
            ("CACHE_TTL_SECS", "18446744073709551615"),
        ])
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(err.message.contains("CACHE_TTL_SECS"));

        let err = load(&[("USDA_API_KEY", "key"), ("USDA_TIMEOUT_SECS", "301")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);

        let config = load(&[("USDA_API_KEY", "key"), ("CACHE_TTL_SECS", "604800")]).unwrap();
        assert_eq!(config.cache.default_ttl, Duration::from_secs(604_800));
    }

    #[test]
    fn test_summary_hides_key() {
        let config = load(&[("USDA_API_KEY", "very-secret")]).unwrap();
        let summary = config.summary();

        assert!(!summary.contains("very-secret"));
        assert!(summary.contains("USDA API Key: Configured"));
    }
}
