//! REST API helpers for the lending backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! credentials so the backend session cookie rides along.
//! Server-side (SSR): every call fails with [`ApiError::Network`]; these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are classified by [`ApiError::from_response`] so
//! pages can decide between a toast, inline field errors, or a retry. Nothing
//! here retries on its own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use lending::application::{Application, ApplicationStatus, NewApplication, Transition};
use lending::admin::UserUpdate;
use lending::loan::{Loan, LoanPayload};
use lending::payment::{CheckoutRequest, CheckoutSession, PaymentConfirmation};
use lending::user::{NewUser, ProfileUpdate, Role, RoleRecord, User};
use lending::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;

const LOANS: &str = "/api/loans";
const APPLICATIONS: &str = "/api/loan-applications";
const USERS: &str = "/api/users";
const CHECKOUT: &str = "/api/payments/create-checkout-session";
const SESSION: &str = "/api/auth/session";
const LOGOUT: &str = "/api/auth/logout";

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

type Query = Vec<(&'static str, String)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

/// Percent-encode one path segment (emails, ids).
pub(crate) fn segment(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::encode_uri_component(raw.trim()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.trim().to_owned()
    }
}

fn loan_endpoint(id: &str) -> String {
    format!("{LOANS}/{}", segment(id))
}

fn show_on_home_endpoint(id: &str) -> String {
    format!("{}/show-on-home", loan_endpoint(id))
}

fn application_endpoint(id: &str) -> String {
    format!("{APPLICATIONS}/{}", segment(id))
}

fn transition_endpoint(id: &str, transition: Transition) -> String {
    format!("{}/{}", application_endpoint(id), transition.action())
}

fn user_endpoint(email: &str) -> String {
    format!("{USERS}/{}", segment(email))
}

fn user_admin_endpoint(email: &str) -> String {
    format!("{}/admin", user_endpoint(email))
}

fn role_endpoint(email: &str) -> String {
    format!("{USERS}/role/{}", segment(email))
}

fn applications_query(status: Option<ApplicationStatus>) -> Query {
    status
        .map(|s| vec![("status", s.as_str().to_owned())])
        .unwrap_or_default()
}

fn users_query(role: Option<Role>) -> Query {
    role.map(|r| vec![("role", r.as_str().to_owned())])
        .unwrap_or_default()
}

/// Parse a success body into `T`.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send one request and return the raw success body.
pub(crate) async fn request(
    verb: Verb,
    path: String,
    query: Query,
    body: Option<serde_json::Value>,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        };
        let builder = RequestBuilder::new(&path)
            .method(method)
            .credentials(web_sys::RequestCredentials::Include)
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            log::warn!("{verb:?} {path} failed: {}", resp.status());
            return Err(ApiError::from_response(resp.status(), &text));
        }
        Ok(text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, query, body);
        Err(ApiError::Network(SERVER_UNAVAILABLE.to_owned()))
    }
}

async fn get_json<T: DeserializeOwned>(path: String, query: Query) -> Result<T, ApiError> {
    let body = request(Verb::Get, path, query, None).await?;
    decode(&body)
}

async fn send_json<B: Serialize + ?Sized>(verb: Verb, path: String, body: &B) -> Result<(), ApiError> {
    request(verb, path, Vec::new(), Some(encode(body)?)).await.map(|_| ())
}

// =============================================================================
// Loans
// =============================================================================

/// Full public catalog.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn fetch_loans() -> Result<Vec<Loan>, ApiError> {
    get_json(LOANS.to_owned(), Vec::new()).await
}

/// Loans flagged for the landing page.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn fetch_home_loans() -> Result<Vec<Loan>, ApiError> {
    get_json(LOANS.to_owned(), vec![("showOnHome", "true".to_owned())]).await
}

/// # Errors
///
/// Any transport or backend failure, including 404 for an unknown id.
pub async fn fetch_loan(id: &str) -> Result<Loan, ApiError> {
    get_json(loan_endpoint(id), Vec::new()).await
}

/// Loans published by one manager.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn fetch_manager_loans(email: &str) -> Result<Vec<Loan>, ApiError> {
    get_json(LOANS.to_owned(), vec![("createdBy", email.trim().to_owned())]).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn create_loan(payload: &LoanPayload) -> Result<(), ApiError> {
    send_json(Verb::Post, LOANS.to_owned(), payload).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn update_loan(id: &str, payload: &LoanPayload) -> Result<(), ApiError> {
    send_json(Verb::Patch, loan_endpoint(id), payload).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn delete_loan(id: &str) -> Result<(), ApiError> {
    request(Verb::Delete, loan_endpoint(id), Vec::new(), None)
        .await
        .map(|_| ())
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn set_show_on_home(id: &str, show_on_home: bool) -> Result<(), ApiError> {
    let body = serde_json::json!({ "showOnHome": show_on_home });
    send_json(Verb::Patch, show_on_home_endpoint(id), &body).await
}

// =============================================================================
// Applications
// =============================================================================

/// Every application, optionally narrowed to one status.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn fetch_applications(status: Option<ApplicationStatus>) -> Result<Vec<Application>, ApiError> {
    get_json(APPLICATIONS.to_owned(), applications_query(status)).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn fetch_application(id: &str) -> Result<Application, ApiError> {
    get_json(application_endpoint(id), Vec::new()).await
}

/// Applications submitted by one borrower.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn fetch_my_applications(email: &str) -> Result<Vec<Application>, ApiError> {
    get_json(APPLICATIONS.to_owned(), vec![("email", email.trim().to_owned())]).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn submit_application(application: &NewApplication) -> Result<(), ApiError> {
    send_json(Verb::Post, APPLICATIONS.to_owned(), application).await
}

/// Request a status transition. Payment confirmation carries a body and
/// goes through [`confirm_payment`] instead.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn request_transition(id: &str, transition: Transition) -> Result<(), ApiError> {
    request(Verb::Patch, transition_endpoint(id, transition), Vec::new(), None)
        .await
        .map(|_| ())
}

/// Mark the fee paid after a successful checkout return.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn confirm_payment(id: &str, confirmation: &PaymentConfirmation) -> Result<(), ApiError> {
    send_json(Verb::Patch, transition_endpoint(id, Transition::Pay), confirmation).await
}

/// Ask the backend for a hosted checkout URL.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn create_checkout_session(checkout: &CheckoutRequest) -> Result<CheckoutSession, ApiError> {
    let body = request(Verb::Post, CHECKOUT.to_owned(), Vec::new(), Some(encode(checkout)?)).await?;
    decode(&body)
}

// =============================================================================
// Users
// =============================================================================

/// # Errors
///
/// Any transport or backend failure.
pub async fn fetch_users(role: Option<Role>) -> Result<Vec<User>, ApiError> {
    get_json(USERS.to_owned(), users_query(role)).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn fetch_user(email: &str) -> Result<User, ApiError> {
    get_json(user_endpoint(email), Vec::new()).await
}

/// Role resolver lookup: `{role, status}` for one email.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn fetch_role(email: &str) -> Result<RoleRecord, ApiError> {
    get_json(role_endpoint(email), Vec::new()).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn save_user(user: &NewUser) -> Result<(), ApiError> {
    send_json(Verb::Post, USERS.to_owned(), user).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn update_profile(email: &str, update: &ProfileUpdate) -> Result<(), ApiError> {
    send_json(Verb::Patch, user_endpoint(email), update).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn admin_update_user(email: &str, update: &UserUpdate) -> Result<(), ApiError> {
    send_json(Verb::Patch, user_admin_endpoint(email), update).await
}

// =============================================================================
// Backend session
// =============================================================================

/// Exchange the signed-in email for a backend session cookie.
///
/// # Errors
///
/// Any transport or backend failure.
pub async fn open_session(email: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "email": email.trim() });
    send_json(Verb::Post, SESSION.to_owned(), &body).await
}

/// # Errors
///
/// Any transport or backend failure.
pub async fn close_session() -> Result<(), ApiError> {
    request(Verb::Post, LOGOUT.to_owned(), Vec::new(), None)
        .await
        .map(|_| ())
}
