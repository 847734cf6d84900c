use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn loan_endpoints_format_expected_paths() {
    assert_eq!(loan_endpoint("l1"), "/api/loans/l1");
    assert_eq!(show_on_home_endpoint(" l1 "), "/api/loans/l1/show-on-home");
}

#[test]
fn transition_endpoint_uses_action_sub_path() {
    assert_eq!(transition_endpoint("a1", Transition::Approve), "/api/loan-applications/a1/approve");
    assert_eq!(
        transition_endpoint("a1", Transition::CancelApproved),
        "/api/loan-applications/a1/cancel-approved"
    );
    assert_eq!(
        transition_endpoint("a1", Transition::Pay),
        "/api/loan-applications/a1/pay-confirmation"
    );
}

#[test]
fn user_endpoints_key_by_email() {
    assert_eq!(user_endpoint("bo@example.com"), "/api/users/bo@example.com");
    assert_eq!(user_admin_endpoint("bo@example.com"), "/api/users/bo@example.com/admin");
    assert_eq!(role_endpoint("bo@example.com"), "/api/users/role/bo@example.com");
}

#[test]
fn application_query_only_sets_status_when_filtered() {
    assert!(applications_query(None).is_empty());
    assert_eq!(
        applications_query(Some(ApplicationStatus::Approved)),
        vec![("status", "approved".to_owned())]
    );
}

#[test]
fn users_query_filters_by_role() {
    assert!(users_query(None).is_empty());
    assert_eq!(users_query(Some(Role::Manager)), vec![("role", "manager".to_owned())]);
}

// =============================================================
// Bodies
// =============================================================

#[test]
fn decode_reports_shape_mismatch() {
    let err = decode::<RoleRecord>("{\"nope\":1}").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_role_record_defaults_status() {
    let record: RoleRecord = decode("{\"role\":\"manager\"}").unwrap();
    assert_eq!(record.role, Role::Manager);
    assert_eq!(record.status, lending::user::UserStatus::Active);
}

#[test]
fn decode_loan_list() {
    let loans: Vec<Loan> = decode(
        r#"[{"_id":"l1","title":"Stall","interestRate":5,"maxLoanLimit":1000,"showOnHome":true}]"#,
    )
    .unwrap();
    assert_eq!(loans.len(), 1);
    assert!(loans[0].show_on_home);
}

#[tokio::test]
async fn requests_fail_as_network_errors_off_the_browser() {
    let err = fetch_loans().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert!(err.is_retryable());
}
