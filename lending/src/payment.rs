//! Application fee checkout round-trip.
//!
//! The client asks the backend for a hosted checkout URL, sends the browser
//! there, and the processor redirects back to the payment-success route with
//! query markers. Those markers are parsed here; the page confirms the
//! payment once and then strips them from the URL.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use serde::{Deserialize, Serialize};

use crate::validate;

/// Flat application fee in US cents.
pub const APPLICATION_FEE_CENTS: u32 = 1_000;

pub const SUCCESS_PARAM: &str = "success";
pub const APPLICATION_ID_PARAM: &str = "applicationId";
pub const SESSION_ID_PARAM: &str = "session_id";

/// Human-readable fee, e.g. `$10.00`.
#[must_use]
pub fn fee_label() -> String {
    format!("${}.{:02}", APPLICATION_FEE_CENTS / 100, APPLICATION_FEE_CENTS % 100)
}

/// Body for the checkout-session endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub application_id: String,
    pub loan_title: String,
    pub user_email: String,
}

/// Checkout-session response: where to send the browser.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
}

impl CheckoutSession {
    /// Only absolute `http(s)` URLs are followed.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        validate::is_http_url(&self.url).then_some(self.url.trim())
    }
}

/// Body for the pay-confirmation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub session_id: Option<String>,
}

/// Identifiers carried back by a successful checkout redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentReturn {
    pub application_id: String,
    pub session_id: Option<String>,
}

impl PaymentReturn {
    #[must_use]
    pub fn confirmation(&self) -> PaymentConfirmation {
        PaymentConfirmation { session_id: self.session_id.clone() }
    }
}

/// What the return URL says about the checkout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// No checkout markers: a plain visit or an already-cleaned URL.
    NoMarkers,
    Succeeded(PaymentReturn),
    /// The processor reported failure or the markers were incomplete.
    Failed { application_id: Option<String> },
}

impl PaymentOutcome {
    /// Parse the return markers through a query lookup function.
    pub fn from_query(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| get(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let Some(success) = non_empty(SUCCESS_PARAM) else {
            return Self::NoMarkers;
        };
        let application_id = non_empty(APPLICATION_ID_PARAM);
        match (success.eq_ignore_ascii_case("true"), application_id) {
            (true, Some(application_id)) => Self::Succeeded(PaymentReturn {
                application_id,
                session_id: non_empty(SESSION_ID_PARAM),
            }),
            (_, application_id) => Self::Failed { application_id },
        }
    }
}
