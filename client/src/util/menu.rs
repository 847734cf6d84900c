//! Dashboard sidebar entries per role.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use lending::user::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
}

const fn item(label: &'static str, href: &'static str) -> MenuItem {
    MenuItem { label, href }
}

pub const PROFILE: MenuItem = item("My Profile", "/dashboard/profile");

/// Sidebar for `role`: profile first, then the role's own pages.
pub fn dashboard_menu(role: Role) -> Vec<MenuItem> {
    let mut items = vec![PROFILE];
    match role {
        Role::Borrower => items.push(item("My Loans", "/dashboard/my-loans")),
        Role::Manager => items.extend([
            item("Add Loan", "/dashboard/add-loan"),
            item("Manage Loans", "/dashboard/manage-loans"),
            item("Pending Applications", "/dashboard/pending-applications"),
            item("Approved Applications", "/dashboard/approved-applications"),
        ]),
        Role::Admin => items.extend([
            item("Manage Users", "/dashboard/manage-users"),
            item("All Loans", "/dashboard/all-loans"),
            item("Loan Applications", "/dashboard/loan-applications"),
        ]),
    }
    items
}
