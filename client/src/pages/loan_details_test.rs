use super::*;
use lending::user::Identity;

fn signed_in(role: RoleResolution) -> AuthState {
    AuthState {
        user: Some(Identity {
            email: "bo@example.com".to_owned(),
            display_name: None,
            photo_url: None,
            is_new_user: false,
        }),
        loading: false,
        role,
        ..AuthState::default()
    }
}

#[test]
fn visitor_is_asked_to_sign_in() {
    let auth = AuthState { loading: false, ..AuthState::default() };
    assert_eq!(ApplyOffer::for_session(&auth), ApplyOffer::SignIn);
}

#[test]
fn session_check_in_flight_is_checking() {
    assert_eq!(ApplyOffer::for_session(&AuthState::default()), ApplyOffer::Checking);
    assert_eq!(ApplyOffer::for_session(&signed_in(RoleResolution::Pending)), ApplyOffer::Checking);
}

#[test]
fn active_borrower_can_apply() {
    let auth = signed_in(RoleResolution::Resolved { role: Role::Borrower, status: UserStatus::Active });
    assert_eq!(ApplyOffer::for_session(&auth), ApplyOffer::Apply);
}

#[test]
fn suspended_borrower_cannot_apply() {
    let auth = signed_in(RoleResolution::Resolved { role: Role::Borrower, status: UserStatus::Suspended });
    assert_eq!(ApplyOffer::for_session(&auth), ApplyOffer::Suspended);
}

#[test]
fn manager_sees_disabled_note() {
    let auth = signed_in(RoleResolution::Resolved { role: Role::Manager, status: UserStatus::Active });
    assert_eq!(ApplyOffer::for_session(&auth), ApplyOffer::NotBorrower(Role::Manager));
}
