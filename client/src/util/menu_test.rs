use super::*;

fn hrefs(role: Role) -> Vec<&'static str> {
    dashboard_menu(role).into_iter().map(|i| i.href).collect()
}

#[test]
fn every_role_starts_with_profile() {
    for role in Role::ALL {
        assert_eq!(dashboard_menu(role)[0], PROFILE);
    }
}

#[test]
fn borrower_menu() {
    assert_eq!(hrefs(Role::Borrower), vec!["/dashboard/profile", "/dashboard/my-loans"]);
}

#[test]
fn manager_menu_covers_loan_and_review_pages() {
    let items = hrefs(Role::Manager);
    assert_eq!(items.len(), 5);
    assert!(items.contains(&"/dashboard/pending-applications"));
    assert!(items.contains(&"/dashboard/approved-applications"));
    assert!(!items.contains(&"/dashboard/manage-users"));
}

#[test]
fn admin_menu_has_no_manager_pages() {
    let items = hrefs(Role::Admin);
    assert_eq!(
        items,
        vec![
            "/dashboard/profile",
            "/dashboard/manage-users",
            "/dashboard/all-loans",
            "/dashboard/loan-applications",
        ]
    );
}
