use lending::payment::PaymentReturn;

use super::*;

#[test]
fn plain_visit_is_idle() {
    assert_eq!(initial_phase(&PaymentOutcome::NoMarkers), Phase::Idle);
}

#[test]
fn success_markers_start_confirmation() {
    let outcome = PaymentOutcome::Succeeded(PaymentReturn {
        application_id: "a1".into(),
        session_id: Some("cs_1".into()),
    });
    assert_eq!(initial_phase(&outcome), Phase::Confirming);
}

#[test]
fn failed_markers_skip_confirmation() {
    let outcome = PaymentOutcome::Failed { application_id: Some("a1".into()) };
    assert!(matches!(initial_phase(&outcome), Phase::Failed(_)));
}

#[test]
fn query_round_trip_from_return_url() {
    let params = [("success", "true"), ("applicationId", "a9"), ("session_id", "cs_9")];
    let outcome = PaymentOutcome::from_query(|key| {
        params.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
    });
    assert_eq!(initial_phase(&outcome), Phase::Confirming);
}
