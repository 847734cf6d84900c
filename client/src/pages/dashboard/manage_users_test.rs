use lending::user::UserStatus;

use super::*;

fn user(email: &str, role: Role) -> User {
    let mut user: User = serde_json::from_value(serde_json::json!({ "email": email, "name": "Sam" }))
        .expect("user json");
    user.role = role;
    user
}

#[test]
fn admin_cannot_suspend_self() {
    let me = user("admin@example.com", Role::Admin);
    assert_eq!(
        suspend_blocker("ADMIN@example.com", &me).as_deref(),
        Some("You cannot suspend your own account.")
    );
}

#[test]
fn other_admins_cannot_be_suspended() {
    let other = user("root@example.com", Role::Admin);
    assert_eq!(
        suspend_blocker("admin@example.com", &other).as_deref(),
        Some("Admin accounts cannot be suspended.")
    );
}

#[test]
fn borrower_can_be_suspended() {
    assert!(suspend_blocker("admin@example.com", &user("bo@example.com", Role::Borrower)).is_none());
}

#[test]
fn own_row_has_no_role_dropdown() {
    let me = user("admin@example.com", Role::Admin);
    assert!(role_choices("admin@example.com", &me).is_none());
    assert_eq!(role_choices("admin@example.com", &user("m@example.com", Role::Manager)), Some(Role::ALL));
}

#[test]
fn suspension_without_reason_is_refused_before_sending() {
    let target = user("bo@example.com", Role::Borrower);
    let err = UserUpdate::suspend(None, "late payments").validate("admin@example.com", &target).unwrap_err();
    assert_eq!(err.to_string(), "Select a suspension reason.");
    assert_eq!(target.status, UserStatus::Active);
}

// =============================================================
// edit_step
// =============================================================

fn suspended(email: &str, role: Role) -> User {
    let mut user = user(email, role);
    user.status = UserStatus::Suspended;
    user
}

#[test]
fn role_change_alone_is_sent_directly() {
    let target = user("bo@example.com", Role::Borrower);
    assert_eq!(
        edit_step("admin@example.com", &target, Role::Manager, UserStatus::Active),
        EditStep::Send(UserUpdate::role(Role::Manager))
    );
}

#[test]
fn combined_change_into_suspension_collects_details_first() {
    let target = user("bo@example.com", Role::Borrower);
    assert_eq!(
        edit_step("admin@example.com", &target, Role::Manager, UserStatus::Suspended),
        EditStep::CollectSuspension
    );
}

#[test]
fn combined_suspension_of_admin_or_self_is_refused() {
    let me = user("admin@example.com", Role::Admin);
    assert!(matches!(
        edit_step("admin@example.com", &me, Role::Admin, UserStatus::Suspended),
        EditStep::Refuse(_)
    ));
    let borrower = user("bo@example.com", Role::Borrower);
    assert_eq!(
        edit_step("admin@example.com", &borrower, Role::Admin, UserStatus::Suspended),
        EditStep::Refuse("Admin accounts cannot be suspended.".to_owned())
    );
}

#[test]
fn reactivation_asks_for_confirmation() {
    let target = suspended("bo@example.com", Role::Borrower);
    assert_eq!(
        edit_step("admin@example.com", &target, Role::Manager, UserStatus::Active),
        EditStep::ConfirmActivation
    );
}

#[test]
fn promoting_suspended_user_to_admin_is_refused() {
    let target = suspended("bo@example.com", Role::Borrower);
    assert_eq!(
        edit_step("admin@example.com", &target, Role::Admin, UserStatus::Suspended),
        EditStep::Refuse("Admin accounts cannot be suspended.".to_owned())
    );
}

#[test]
fn unchanged_row_is_refused() {
    let target = user("bo@example.com", Role::Borrower);
    assert_eq!(
        edit_step("admin@example.com", &target, Role::Borrower, UserStatus::Active),
        EditStep::Refuse("Nothing to update.".to_owned())
    );
}

#[test]
fn saved_message_names_the_change() {
    let target = user("bo@example.com", Role::Borrower);
    assert_eq!(saved_message(&target, &UserUpdate::role(Role::Manager)), "Sam is now Manager.");
    assert_eq!(saved_message(&target, &UserUpdate::activate()), "Sam is active again.");
    let suspend = UserUpdate::suspend(None, "x");
    assert_eq!(saved_message(&target, &suspend), "Sam has been suspended.");
}
