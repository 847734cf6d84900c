//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed configuration and one pooled `reqwest::Client` used for
//! every forwarded request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::routes::proxy::ProxyError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the HTTP client cannot be
    /// constructed (e.g. TLS backend initialization failure).
    pub fn new(config: Config) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            // Upstream redirects (e.g. social sign-in) go back to the browser.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State pointing both upstreams at `base`.
    #[must_use]
    pub fn test_app_state(base: &str) -> AppState {
        let config = Config {
            port: 0,
            api_upstream: base.trim_end_matches('/').to_owned(),
            identity_upstream: base.trim_end_matches('/').to_owned(),
            cookie_secure: false,
            upstream_timeout_secs: 5,
        };
        AppState::new(config).expect("test http client")
    }
}
