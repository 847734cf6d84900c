//! Server configuration parsed from environment variables.
//!
//! Required:
//! - `API_UPSTREAM_URL`: base URL of the lending backend
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `IDENTITY_UPSTREAM_URL`: identity provider base URL, defaults to the API
//!   upstream
//! - `COOKIE_SECURE`: keep the `Secure` flag on forwarded cookies; defaults to
//!   whether the API upstream is https
//! - `UPSTREAM_TIMEOUT_SECS`: per-request timeout for forwarded calls,
//!   default 30

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),

    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_upstream: String,
    pub identity_upstream: String,
    pub cookie_secure: bool,
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from any key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] without an API upstream and
    /// [`ConfigError::Invalid`] for malformed URLs, ports or flags.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| get(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_upstream = value("API_UPSTREAM_URL").ok_or(ConfigError::Missing("API_UPSTREAM_URL"))?;
        let api_upstream = parse_base_url("API_UPSTREAM_URL", &api_upstream)?;
        let identity_upstream = match value("IDENTITY_UPSTREAM_URL") {
            Some(raw) => parse_base_url("IDENTITY_UPSTREAM_URL", &raw)?,
            None => api_upstream.clone(),
        };

        let port = match value("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };
        let cookie_secure = match value("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: "COOKIE_SECURE",
                reason: format!("expected true/false, got {raw:?}"),
            })?,
            None => api_upstream.starts_with("https://"),
        };
        let upstream_timeout_secs = value("UPSTREAM_TIMEOUT_SECS")
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Ok(Self { port, api_upstream, identity_upstream, cookie_secure, upstream_timeout_secs })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Validate an http(s) base URL and drop trailing slashes.
fn parse_base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::Invalid { var, reason: format!("expected an http(s) URL, got {raw:?}") });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
