use std::collections::HashMap;

use super::*;

fn outcome(pairs: &[(&str, &str)]) -> PaymentOutcome {
    let query: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    PaymentOutcome::from_query(|key| query.get(key).cloned())
}

#[test]
fn success_with_application_id_is_a_confirmed_return() {
    let parsed = outcome(&[("success", "true"), ("applicationId", "app-1"), ("session_id", "cs_9")]);
    assert_eq!(
        parsed,
        PaymentOutcome::Succeeded(PaymentReturn {
            application_id: "app-1".to_owned(),
            session_id: Some("cs_9".to_owned()),
        })
    );
}

#[test]
fn success_without_session_id_still_confirms() {
    let parsed = outcome(&[("success", "TRUE"), ("applicationId", "app-1")]);
    let PaymentOutcome::Succeeded(ret) = parsed else {
        panic!("expected success");
    };
    assert_eq!(ret.confirmation(), PaymentConfirmation { session_id: None });
}

#[test]
fn success_without_application_id_fails() {
    assert_eq!(
        outcome(&[("success", "true"), ("applicationId", " ")]),
        PaymentOutcome::Failed { application_id: None }
    );
}

#[test]
fn explicit_failure_keeps_application_id() {
    assert_eq!(
        outcome(&[("success", "false"), ("applicationId", "app-2")]),
        PaymentOutcome::Failed { application_id: Some("app-2".to_owned()) }
    );
}

#[test]
fn cleaned_url_has_no_markers() {
    let parsed = outcome(&[]);
    assert_eq!(parsed, PaymentOutcome::NoMarkers);
}

#[test]
fn checkout_redirect_only_follows_http_urls() {
    let ok = CheckoutSession { url: "https://checkout.example.com/c/pay/cs_1".to_owned() };
    assert_eq!(ok.redirect_url(), Some("https://checkout.example.com/c/pay/cs_1"));
    let bad = CheckoutSession { url: "javascript:alert(1)".to_owned() };
    assert_eq!(bad.redirect_url(), None);
}

#[test]
fn checkout_request_serializes_camel_case() {
    let body = CheckoutRequest {
        application_id: "app-1".to_owned(),
        loan_title: "Stall".to_owned(),
        user_email: "bo@example.com".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "applicationId": "app-1", "loanTitle": "Stall", "userEmail": "bo@example.com" })
    );
}

#[test]
fn fee_label_formats_cents() {
    assert_eq!(fee_label(), "$10.00");
}
