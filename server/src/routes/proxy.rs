//! Same-origin forwarding to the lending backend and identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. `/api/*` goes to the backend
//! and `/identity/*` to the identity provider, path and query unchanged, so
//! session cookies set by either are first-party for the app origin.
//!
//! TRADE-OFFS
//! ==========
//! Bodies are buffered (bounded by `MAX_BODY_BYTES`) rather than streamed.
//! Every payload here is small JSON, and buffering keeps error mapping simple.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Instant;

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Connection-scoped headers that must not cross a proxy.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Api,
    Identity,
}

impl Upstream {
    fn base(self, state: &AppState) -> &str {
        match self {
            Self::Api => &state.config.api_upstream,
            Self::Identity => &state.config.identity_upstream,
        }
    }
}

/// Errors produced while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The incoming body was unreadable or over the size limit.
    #[error("request body rejected: {0}")]
    Body(String),

    #[error("upstream timed out")]
    Timeout,

    /// Connection refused, DNS failure, TLS failure and the like.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

impl ProxyError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unavailable(err.to_string()) }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message safe to show in the browser.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::ClientBuild(_) => "The server is misconfigured.",
            Self::Body(_) => "The request was too large.",
            Self::Timeout => "The service took too long to respond. Please try again.",
            Self::Unavailable(_) => "The service is unavailable. Please try again shortly.",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "message": self.public_message() }))).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `ANY /api/*`: forward to the lending backend.
pub async fn api(State(state): State<AppState>, req: Request) -> Response {
    respond(forward(&state, Upstream::Api, req).await)
}

/// `ANY /identity/*`: forward to the identity provider.
pub async fn identity(State(state): State<AppState>, req: Request) -> Response {
    respond(forward(&state, Upstream::Identity, req).await)
}

fn respond(result: Result<Response, ProxyError>) -> Response {
    result.unwrap_or_else(IntoResponse::into_response)
}

async fn forward(state: &AppState, upstream: Upstream, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path = parts.uri.path().to_owned();
    let url = upstream_url(upstream.base(state), &path, parts.uri.query());
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let started = Instant::now();
    let sent = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forward_headers(&parts.headers))
        .body(body)
        .send()
        .await;
    let upstream_response = match sent {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(method = %parts.method, %path, ?upstream, error = %e, "upstream request failed");
            return Err(ProxyError::from_reqwest(&e));
        }
    };

    let status = upstream_response.status();
    let headers = response_headers(upstream_response.headers(), state.config.cookie_secure);
    let bytes = upstream_response.bytes().await.map_err(|e| {
        tracing::warn!(%path, error = %e, "upstream body read failed");
        ProxyError::from_reqwest(&e)
    })?;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    if status.is_server_error() {
        tracing::warn!(method = %parts.method, %path, status = status.as_u16(), elapsed_ms, "upstream error");
    } else {
        tracing::info!(method = %parts.method, %path, status = status.as_u16(), elapsed_ms, "proxied");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

// =============================================================================
// HELPERS
// =============================================================================

/// Join an upstream base URL with the request path and query.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = if path.starts_with('/') { path.to_owned() } else { format!("/{path}") };
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}{path}?{query}"),
        None => format!("{base}{path}"),
    }
}

/// Whether `name` may be copied across the proxy in either direction.
/// `host` and `content-length` are recomputed by the HTTP stack.
#[must_use]
pub fn forwardable(name: &HeaderName) -> bool {
    let name = name.as_str();
    name != header::HOST.as_str() && name != header::CONTENT_LENGTH.as_str() && !HOP_BY_HOP.contains(&name)
}

fn forward_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in incoming {
        if forwardable(name) {
            headers.append(name.clone(), value.clone());
        }
    }
    headers
}

fn response_headers(upstream: &HeaderMap, cookie_secure: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in upstream {
        if !forwardable(name) {
            continue;
        }
        if name == header::SET_COOKIE {
            let rewritten = value
                .to_str()
                .ok()
                .and_then(|raw| HeaderValue::from_str(&rewrite_set_cookie(raw, cookie_secure)).ok());
            match rewritten {
                Some(value) => headers.append(header::SET_COOKIE, value),
                None => headers.append(header::SET_COOKIE, value.clone()),
            };
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}

/// Scope an upstream cookie to this origin: drop `Domain`, and over plain
/// http drop `Secure` and downgrade `SameSite=None` (which browsers reject
/// without `Secure`) to `Lax`.
#[must_use]
pub fn rewrite_set_cookie(raw: &str, secure: bool) -> String {
    raw.split(';')
        .map(str::trim)
        .filter(|attr| !attr.is_empty())
        .filter_map(|attr| {
            let lower = attr.to_ascii_lowercase();
            if lower.starts_with("domain=") {
                return None;
            }
            if secure {
                return Some(attr);
            }
            match lower.as_str() {
                "secure" => None,
                "samesite=none" => Some("SameSite=Lax"),
                _ => Some(attr),
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
