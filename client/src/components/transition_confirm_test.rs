use super::*;
use lending::application::{ApplicationStatus, FeeStatus};

fn application() -> Application {
    serde_json::from_value(serde_json::json!({
        "_id": "a1",
        "loanId": "l1",
        "loanTitle": "Market Stall",
        "userEmail": "bo@example.com",
        "userName": "Bo",
        "amount": 500,
    }))
    .unwrap()
}

#[test]
fn fixture_starts_pending_and_unpaid() {
    let app = application();
    assert_eq!(app.status, ApplicationStatus::Pending);
    assert_eq!(app.fee_status, FeeStatus::Unpaid);
}

#[test]
fn confirm_copy_names_applicant_and_loan() {
    let (title, message) = confirm_copy(Transition::Approve, &application());
    assert_eq!(title, "Approve application?");
    assert_eq!(message, "Approve Bo's application for Market Stall?");
}

#[test]
fn borrower_cancel_copy_speaks_to_the_borrower() {
    let (_, message) = confirm_copy(Transition::Cancel, &application());
    assert!(message.starts_with("Cancel your application for Market Stall"));
}

#[test]
fn cancel_approved_warns_about_fee() {
    let (_, message) = confirm_copy(Transition::CancelApproved, &application());
    assert!(message.contains("not refunded"));
}

#[test]
fn done_messages_cover_cancellations() {
    assert_eq!(done_message(Transition::Cancel), done_message(Transition::CancelApproved));
}

#[test]
fn sentence_capitalizes_transition_errors() {
    let err = Transition::Cancel
        .check(&Application { status: ApplicationStatus::Approved, ..application() })
        .unwrap_err();
    assert_eq!(sentence(&err.to_string()), "Cannot cancel an application that is approved.");
    assert_eq!(sentence(""), "");
}
