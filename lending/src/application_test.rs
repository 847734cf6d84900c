use super::*;

// =============================================================
// Helpers
// =============================================================

fn loan_with_limit(limit: f64) -> Loan {
    Loan {
        id: "loan-1".to_owned(),
        title: "Market Stall Loan".to_owned(),
        description: "Working capital".to_owned(),
        category: "Business".to_owned(),
        interest_rate: 6.0,
        max_loan_limit: limit,
        emi_plans: vec!["6 months".to_owned(), "12 months".to_owned()],
        images: vec!["https://img.example.com/a.png".to_owned()],
        required_documents: Vec::new(),
        show_on_home: true,
        created_by: "mgr@example.com".to_owned(),
        created_at: None,
    }
}

fn applicant() -> Applicant {
    Applicant { email: "bo@example.com".to_owned(), name: "Bo".to_owned() }
}

fn form(amount: &str) -> ApplicationForm {
    ApplicationForm {
        amount: amount.to_owned(),
        monthly_income: "300".to_owned(),
        reason: "Restock inventory".to_owned(),
        contact_number: "+254700000000".to_owned(),
        emi_plan: "6 months".to_owned(),
        ..ApplicationForm::default()
    }
}

fn application(status: ApplicationStatus, fee_status: FeeStatus) -> Application {
    Application {
        id: "app-1".to_owned(),
        loan_id: "loan-1".to_owned(),
        loan_title: "Market Stall Loan".to_owned(),
        category: "Business".to_owned(),
        interest_rate: 6.0,
        user_email: "bo@example.com".to_owned(),
        user_name: "Bo".to_owned(),
        amount: 500.0,
        monthly_income: 300.0,
        reason: "Restock inventory".to_owned(),
        contact_number: String::new(),
        national_id: String::new(),
        income_source: String::new(),
        address: String::new(),
        extra_notes: String::new(),
        emi_plan: None,
        status,
        fee_status,
        payment_info: None,
        created_at: None,
        approved_at: None,
        paid_at: None,
    }
}

fn receipt() -> PaymentInfo {
    PaymentInfo {
        provider: "stripe".to_owned(),
        amount: 10.0,
        currency: "usd".to_owned(),
        transaction_id: "pi_123".to_owned(),
        session_id: Some("cs_456".to_owned()),
    }
}

// =============================================================
// Submission validation
// =============================================================

#[test]
fn submission_below_limit_creates_pending_unpaid_snapshot() {
    let new_app = form("500").validate(&loan_with_limit(1000.0), &applicant()).expect("valid");
    assert_eq!(new_app.status, ApplicationStatus::Pending);
    assert_eq!(new_app.fee_status, FeeStatus::Unpaid);
    assert_eq!(new_app.loan_title, "Market Stall Loan");
    assert_eq!(new_app.user_email, "bo@example.com");
    assert_eq!(new_app.emi_plan.as_deref(), Some("6 months"));
}

#[test]
fn amount_equal_to_limit_is_accepted() {
    assert!(form("1000").validate(&loan_with_limit(1000.0), &applicant()).is_ok());
}

#[test]
fn amount_above_limit_is_blocked_with_field_error() {
    let errors = form("1000.5")
        .validate(&loan_with_limit(1000.0), &applicant())
        .expect_err("over limit");
    assert_eq!(errors.get("amount"), Some("Amount cannot exceed the loan limit of 1000."));
}

#[test]
fn zero_and_missing_amounts_are_blocked() {
    let loan = loan_with_limit(1000.0);
    assert!(form("0").validate(&loan, &applicant()).unwrap_err().contains("amount"));
    assert!(form("").validate(&loan, &applicant()).unwrap_err().contains("amount"));
}

#[test]
fn emi_plan_must_be_one_of_the_offered_plans() {
    let mut f = form("500");
    f.emi_plan = "24 months".to_owned();
    let errors = f.validate(&loan_with_limit(1000.0), &applicant()).expect_err("bad plan");
    assert!(errors.contains("emi_plan"));
}

#[test]
fn reason_and_contact_are_required() {
    let mut f = form("500");
    f.reason = "  ".to_owned();
    f.contact_number = String::new();
    let errors = f.validate(&loan_with_limit(1000.0), &applicant()).expect_err("missing");
    assert!(errors.contains("reason"));
    assert!(errors.contains("contact_number"));
}

#[test]
fn submission_serializes_camel_case_with_initial_states() {
    let new_app = form("500").validate(&loan_with_limit(1000.0), &applicant()).unwrap();
    let json = serde_json::to_value(&new_app).unwrap();
    assert_eq!(json["loanId"], "loan-1");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["feeStatus"], "unpaid");
    assert_eq!(json["monthlyIncome"], serde_json::json!(300.0));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn cancel_succeeds_only_while_pending() {
    let app = application(ApplicationStatus::Pending, FeeStatus::Unpaid);
    assert_eq!(Transition::Cancel.check(&app), Ok(()));

    for status in [ApplicationStatus::Approved, ApplicationStatus::Rejected, ApplicationStatus::Cancelled] {
        let app = application(status, FeeStatus::Unpaid);
        assert_eq!(
            Transition::Cancel.check(&app),
            Err(TransitionError::InvalidStatus { transition: Transition::Cancel, actual: status })
        );
    }
}

#[test]
fn approve_and_reject_require_pending() {
    let pending = application(ApplicationStatus::Pending, FeeStatus::Unpaid);
    let approved = application(ApplicationStatus::Approved, FeeStatus::Unpaid);
    assert_eq!(Transition::Approve.check(&pending), Ok(()));
    assert_eq!(Transition::Reject.check(&pending), Ok(()));
    assert!(Transition::Approve.check(&approved).is_err());
    assert!(Transition::Reject.check(&approved).is_err());
}

#[test]
fn pay_offered_only_for_approved_unpaid() {
    assert!(application(ApplicationStatus::Approved, FeeStatus::Unpaid).pay_offered());
    assert!(!application(ApplicationStatus::Approved, FeeStatus::Paid).pay_offered());
    assert!(!application(ApplicationStatus::Pending, FeeStatus::Unpaid).pay_offered());
    assert!(!application(ApplicationStatus::Cancelled, FeeStatus::Unpaid).pay_offered());
}

#[test]
fn paying_twice_is_rejected() {
    let app = application(ApplicationStatus::Approved, FeeStatus::Paid);
    assert_eq!(Transition::Pay.check(&app), Err(TransitionError::AlreadyPaid));
}

#[test]
fn paid_approval_can_still_be_cancelled() {
    let paid = application(ApplicationStatus::Approved, FeeStatus::Paid);
    assert_eq!(Transition::CancelApproved.check(&paid), Ok(()));
    assert_eq!(available_transitions(&paid, Role::Manager), vec![Transition::CancelApproved]);
}

#[test]
fn actor_rules_are_enforced() {
    let pending = application(ApplicationStatus::Pending, FeeStatus::Unpaid);
    assert_eq!(
        Transition::Approve.authorize(Role::Borrower, &pending),
        Err(TransitionError::WrongActor { transition: Transition::Approve, required: Role::Manager })
    );
    assert!(Transition::Cancel.authorize(Role::Manager, &pending).is_err());
    assert!(Transition::Cancel.authorize(Role::Borrower, &pending).is_ok());
}

#[test]
fn available_transitions_follow_role_and_state() {
    let pending = application(ApplicationStatus::Pending, FeeStatus::Unpaid);
    let approved = application(ApplicationStatus::Approved, FeeStatus::Unpaid);
    let paid = application(ApplicationStatus::Approved, FeeStatus::Paid);

    assert_eq!(available_transitions(&pending, Role::Manager), vec![Transition::Approve, Transition::Reject]);
    assert_eq!(available_transitions(&pending, Role::Borrower), vec![Transition::Cancel]);
    assert_eq!(available_transitions(&approved, Role::Manager), vec![Transition::CancelApproved]);
    assert_eq!(available_transitions(&approved, Role::Borrower), vec![Transition::Pay]);
    assert!(available_transitions(&paid, Role::Borrower).is_empty());
    assert!(available_transitions(&pending, Role::Admin).is_empty());
}

#[test]
fn transition_actions_match_backend_paths() {
    let actions: Vec<&str> = Transition::ALL.iter().map(|t| t.action()).collect();
    assert_eq!(actions, vec!["approve", "reject", "cancel", "cancel-approved", "pay-confirmation"]);
}

#[test]
fn transition_error_messages_read_naturally() {
    let err = Transition::Cancel
        .check(&application(ApplicationStatus::Approved, FeeStatus::Unpaid))
        .unwrap_err();
    assert_eq!(err.to_string(), "cannot cancel an application that is approved");
}

// =============================================================
// Full lifecycle scenario
// =============================================================

#[test]
fn submit_approve_pay_then_cancel_approved() {
    let loan = loan_with_limit(1000.0);
    let submitted = form("500").validate(&loan, &applicant()).unwrap();

    // Each step checks legality, then takes the record the backend returns.
    let mut app = application(submitted.status, submitted.fee_status);
    assert_eq!(app.status, ApplicationStatus::Pending);
    assert!(!app.pay_offered());

    assert_eq!(Transition::Approve.check(&app), Ok(()));
    app.status = ApplicationStatus::Approved;
    app.approved_at = Some("t-approve".to_owned());
    assert!(app.pay_offered());

    assert_eq!(Transition::Pay.check(&app), Ok(()));
    app.fee_status = FeeStatus::Paid;
    app.payment_info = Some(receipt());
    assert!(app.is_paid());
    assert!(!app.pay_offered());
    assert_eq!(Transition::Pay.check(&app), Err(TransitionError::AlreadyPaid));

    assert_eq!(Transition::CancelApproved.check(&app), Ok(()));
    app.status = ApplicationStatus::Cancelled;
    assert_eq!(app.fee_status, FeeStatus::Paid);
    assert!(available_transitions(&app, Role::Borrower).is_empty());
}

#[test]
fn application_deserializes_with_defaults() {
    let app: Application = serde_json::from_value(serde_json::json!({
        "_id": "a-9",
        "loanId": "loan-1",
        "userEmail": "bo@example.com",
        "amount": 250
    }))
    .unwrap();
    assert_eq!(app.status, ApplicationStatus::Pending);
    assert_eq!(app.fee_status, FeeStatus::Unpaid);
    assert!(app.payment_info.is_none());
}
