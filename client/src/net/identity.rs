//! Identity provider calls, proxied by the host under `/identity/*`.
//!
//! The provider owns credentials and the identity cookie; the lending backend
//! only ever sees the email through [`crate::net::api::open_session`].

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use lending::ApiError;
use lending::user::Identity;
use serde::Serialize;

use super::api::{Verb, decode, request};

const SIGNUP: &str = "/identity/signup";
const LOGIN: &str = "/identity/login";
const ME: &str = "/identity/me";
const LOGOUT: &str = "/identity/logout";

/// Browser redirect target for social sign-in. The provider sends the
/// browser back to the login page, which finishes the return-path redirect.
pub const GOOGLE_SIGN_IN: &str = "/identity/google?redirect=/login";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUp<'a> {
    email: &'a str,
    password: &'a str,
    display_name: &'a str,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    photo_url: Option<&'a str>,
}

fn body<B: Serialize>(value: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create an account and sign it in.
///
/// # Errors
///
/// Provider rejections (duplicate email, weak password) come back as
/// [`ApiError::Rejected`] with the provider's message.
pub async fn sign_up(
    email: &str,
    password: &str,
    display_name: &str,
    photo_url: Option<&str>,
) -> Result<Identity, ApiError> {
    let payload = body(&SignUp { email: email.trim(), password, display_name, photo_url })?;
    let text = request(Verb::Post, SIGNUP.to_owned(), Vec::new(), Some(payload)).await?;
    decode(&text)
}

/// Email/password sign-in.
///
/// # Errors
///
/// Bad credentials surface as [`ApiError::Unauthorized`] or
/// [`ApiError::Rejected`] depending on the provider's status code.
pub async fn sign_in(email: &str, password: &str) -> Result<Identity, ApiError> {
    let payload = body(&Credentials { email: email.trim(), password })?;
    let text = request(Verb::Post, LOGIN.to_owned(), Vec::new(), Some(payload)).await?;
    decode(&text)
}

/// The signed-in identity, or `None` without a session.
///
/// # Errors
///
/// Transport and server failures. A 401 is not an error here.
pub async fn current_identity() -> Result<Option<Identity>, ApiError> {
    match request(Verb::Get, ME.to_owned(), Vec::new(), None).await {
        Ok(text) => decode(&text).map(Some),
        Err(ApiError::Unauthorized) => Ok(None),
        Err(e) => Err(e),
    }
}

/// # Errors
///
/// Any transport or provider failure.
pub async fn sign_out() -> Result<(), ApiError> {
    request(Verb::Post, LOGOUT.to_owned(), Vec::new(), None)
        .await
        .map(|_| ())
}

/// Leave the app for the provider's social sign-in page.
pub fn redirect_to_google() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(GOOGLE_SIGN_IN);
        }
    }
}
