use super::*;

const ADMIN_EMAIL: &str = "root@example.com";

fn user(email: &str, role: Role, status: UserStatus) -> User {
    User {
        id: None,
        email: email.to_owned(),
        name: email.split('@').next().unwrap_or_default().to_owned(),
        photo_url: None,
        role,
        status,
        suspend_reason: None,
        suspend_feedback: None,
        created_at: None,
    }
}

// =============================================================
// can_suspend
// =============================================================

#[test]
fn admin_cannot_suspend_self() {
    let me = user(ADMIN_EMAIL, Role::Admin, UserStatus::Active);
    assert_eq!(can_suspend("ROOT@example.com", &me), Err(AdminError::SelfSuspension));
}

#[test]
fn admin_cannot_suspend_another_admin() {
    let other = user("ops@example.com", Role::Admin, UserStatus::Active);
    assert_eq!(can_suspend(ADMIN_EMAIL, &other), Err(AdminError::AdminSuspension));
}

#[test]
fn admin_can_suspend_borrowers_and_managers() {
    assert!(can_suspend(ADMIN_EMAIL, &user("b@example.com", Role::Borrower, UserStatus::Active)).is_ok());
    assert!(can_suspend(ADMIN_EMAIL, &user("m@example.com", Role::Manager, UserStatus::Active)).is_ok());
}

// =============================================================
// UserUpdate::validate
// =============================================================

#[test]
fn suspension_requires_reason_and_feedback() {
    let target = user("b@example.com", Role::Borrower, UserStatus::Active);
    assert_eq!(
        UserUpdate::suspend(None, "late payments").validate(ADMIN_EMAIL, &target),
        Err(AdminError::MissingReason)
    );
    assert_eq!(
        UserUpdate::suspend(Some(SuspendReason::PaymentDefault), "   ").validate(ADMIN_EMAIL, &target),
        Err(AdminError::MissingFeedback)
    );
}

#[test]
fn complete_suspension_passes_and_serializes() {
    let target = user("b@example.com", Role::Borrower, UserStatus::Active);
    let update = UserUpdate::suspend(Some(SuspendReason::FraudulentActivity), " fake documents ")
        .validate(ADMIN_EMAIL, &target)
        .expect("valid suspension");
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        serde_json::json!({
            "status": "suspended",
            "suspendReason": "fraudulent-activity",
            "suspendFeedback": "fake documents"
        })
    );
}

#[test]
fn suspension_of_admin_or_self_is_blocked_even_with_details() {
    let admin = user("ops@example.com", Role::Admin, UserStatus::Active);
    let me = user(ADMIN_EMAIL, Role::Borrower, UserStatus::Active);
    let update = UserUpdate::suspend(Some(SuspendReason::Other), "x");
    assert_eq!(update.clone().validate(ADMIN_EMAIL, &admin), Err(AdminError::AdminSuspension));
    assert_eq!(update.validate(ADMIN_EMAIL, &me), Err(AdminError::SelfSuspension));
}

#[test]
fn activation_needs_no_reason_and_clears_details() {
    let mut target = user("b@example.com", Role::Borrower, UserStatus::Suspended);
    target.suspend_reason = Some(SuspendReason::Other);
    let update = UserUpdate::activate().validate(ADMIN_EMAIL, &target).expect("activation");
    assert_eq!(update, UserUpdate { status: Some(UserStatus::Active), ..UserUpdate::default() });
}

#[test]
fn combined_update_into_suspension_still_requires_details() {
    let target = user("m@example.com", Role::Manager, UserStatus::Active);
    let update = UserUpdate::combined(Role::Borrower, UserStatus::Suspended, None, "");
    assert!(update.enters_suspension(&target));
    assert_eq!(update.validate(ADMIN_EMAIL, &target), Err(AdminError::MissingReason));
}

#[test]
fn combined_promotion_to_admin_while_suspending_is_blocked() {
    let target = user("m@example.com", Role::Manager, UserStatus::Active);
    let update = UserUpdate::combined(Role::Admin, UserStatus::Suspended, Some(SuspendReason::Other), "x");
    assert_eq!(update.validate(ADMIN_EMAIL, &target), Err(AdminError::AdminSuspension));
}

#[test]
fn combined_role_change_drops_unchanged_status() {
    let target = user("b@example.com", Role::Borrower, UserStatus::Active);
    let update = UserUpdate::combined(Role::Manager, UserStatus::Active, Some(SuspendReason::Other), "ignored")
        .validate(ADMIN_EMAIL, &target)
        .expect("role change");
    assert_eq!(update, UserUpdate::role(Role::Manager));
}

#[test]
fn no_op_update_is_rejected() {
    let target = user("b@example.com", Role::Borrower, UserStatus::Active);
    assert_eq!(
        UserUpdate::combined(Role::Borrower, UserStatus::Active, None, "").validate(ADMIN_EMAIL, &target),
        Err(AdminError::NoChanges)
    );
}

#[test]
fn already_suspended_user_role_change_skips_suspension_step() {
    let target = user("b@example.com", Role::Borrower, UserStatus::Suspended);
    let update = UserUpdate::combined(Role::Manager, UserStatus::Suspended, None, "");
    assert!(!update.enters_suspension(&target));
    assert_eq!(update.validate(ADMIN_EMAIL, &target), Ok(UserUpdate::role(Role::Manager)));
}

#[test]
fn promoting_suspended_user_to_admin_is_blocked() {
    let target = user("b@example.com", Role::Borrower, UserStatus::Suspended);
    assert_eq!(UserUpdate::role(Role::Admin).validate(ADMIN_EMAIL, &target), Err(AdminError::AdminSuspension));
}

#[test]
fn promoting_suspended_user_with_activation_is_allowed() {
    let target = user("b@example.com", Role::Borrower, UserStatus::Suspended);
    let update = UserUpdate::combined(Role::Admin, UserStatus::Active, None, "")
        .validate(ADMIN_EMAIL, &target)
        .expect("promotion with activation");
    assert_eq!(update.role, Some(Role::Admin));
    assert_eq!(update.status, Some(UserStatus::Active));
}

// =============================================================
// filter_users
// =============================================================

#[test]
fn filter_users_by_role_and_search() {
    let users = vec![
        user("ann@example.com", Role::Borrower, UserStatus::Active),
        user("ben@example.com", Role::Manager, UserStatus::Active),
        user("cat@example.com", Role::Borrower, UserStatus::Suspended),
    ];
    assert_eq!(filter_users(&users, Some(Role::Borrower), "").len(), 2);
    assert_eq!(filter_users(&users, None, "BEN").len(), 1);
    assert!(filter_users(&users, Some(Role::Admin), "").is_empty());
}
