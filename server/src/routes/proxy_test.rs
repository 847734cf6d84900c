use super::*;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("https://api.test", "/api/loan-applications", Some("status=pending")),
        "https://api.test/api/loan-applications?status=pending"
    );
}

#[test]
fn upstream_url_normalizes_slashes() {
    assert_eq!(upstream_url("https://api.test/", "/api/loans", None), "https://api.test/api/loans");
    assert_eq!(upstream_url("https://api.test", "identity/me", None), "https://api.test/identity/me");
}

#[test]
fn upstream_url_drops_empty_query() {
    assert_eq!(upstream_url("https://api.test", "/api/users", Some("")), "https://api.test/api/users");
}

// =============================================================================
// headers
// =============================================================================

#[test]
fn hop_by_hop_headers_are_not_forwarded() {
    for name in ["connection", "transfer-encoding", "upgrade", "host", "content-length"] {
        assert!(!forwardable(&HeaderName::from_static(name)), "{name} should be dropped");
    }
}

#[test]
fn end_to_end_headers_are_forwarded() {
    for name in ["cookie", "content-type", "authorization", "accept"] {
        assert!(forwardable(&HeaderName::from_static(name)), "{name} should pass");
    }
}

#[test]
fn response_headers_rewrite_every_cookie() {
    let mut upstream = HeaderMap::new();
    upstream.append(header::SET_COOKIE, HeaderValue::from_static("a=1; Domain=api.test; Secure"));
    upstream.append(header::SET_COOKIE, HeaderValue::from_static("b=2; Path=/"));
    upstream.append(header::CONNECTION, HeaderValue::from_static("close"));
    upstream.append(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let headers = response_headers(&upstream, false);
    let cookies: Vec<_> = headers.get_all(header::SET_COOKIE).iter().map(|v| v.to_str().unwrap()).collect();
    assert_eq!(cookies, ["a=1", "b=2; Path=/"]);
    assert!(headers.get(header::CONNECTION).is_none());
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");
}

// =============================================================================
// rewrite_set_cookie
// =============================================================================

#[test]
fn cookie_domain_is_always_dropped() {
    assert_eq!(
        rewrite_set_cookie("sid=abc; Domain=api.test; Path=/; HttpOnly; Secure", true),
        "sid=abc; Path=/; HttpOnly; Secure"
    );
}

#[test]
fn insecure_mode_strips_secure_and_relaxes_same_site() {
    assert_eq!(
        rewrite_set_cookie("sid=abc; Path=/; Secure; SameSite=None", false),
        "sid=abc; Path=/; SameSite=Lax"
    );
}

#[test]
fn secure_mode_keeps_same_site_none() {
    assert_eq!(rewrite_set_cookie("sid=abc; SameSite=None; Secure", true), "sid=abc; SameSite=None; Secure");
}

// =============================================================================
// ProxyError
// =============================================================================

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Unavailable("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Body("too big".into()).status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::ClientBuild("tls".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn proxy_error_response_hides_internal_detail() {
    let response = ProxyError::Unavailable("dns error: api.internal".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
