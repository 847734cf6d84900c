//! Admin user management: combined role and status edits.
//!
//! Each row stages a role and a status; saving runs [`edit_step`]. Moving a
//! user into suspension always goes through `SuspendDialog` first, and
//! reactivation through a confirmation, even when the role changes with it.
//! Every update is validated with `UserUpdate::validate` before it is sent.
//! A refused or failed save re-renders the rows from the loaded records so
//! the selects show the stored values again.

#[cfg(test)]
#[path = "manage_users_test.rs"]
mod manage_users_test;

use leptos::prelude::*;
use lending::admin::{self, AdminError, UserUpdate};
use lending::user::{Role, SuspendReason, User, UserStatus};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::feedback::{EmptyState, ErrorPanel, Spinner};
use crate::components::status_badge::AccountBadge;
use crate::components::suspend_dialog::SuspendDialog;
use crate::hooks::use_users;
use crate::state::auth::AuthState;
use crate::util::notify::Notifier;

/// Why suspending `target` is blocked, if it is.
pub fn suspend_blocker(actor_email: &str, target: &User) -> Option<String> {
    admin::can_suspend(actor_email, target).err().as_ref().map(ToString::to_string)
}

/// Role dropdown choice for `target`, or `None` when the admin's own row is
/// shown (admins never demote themselves from here).
pub fn role_choices(actor_email: &str, target: &User) -> Option<[Role; 3]> {
    (!target.is(actor_email)).then_some(Role::ALL)
}

/// A row edit waiting on a dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedEdit {
    pub target: User,
    pub role: Role,
}

/// What saving a row's role and status selection leads to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditStep {
    Send(UserUpdate),
    /// Reason and feedback are needed first.
    CollectSuspension,
    ConfirmActivation,
    Refuse(String),
}

pub fn edit_step(actor_email: &str, target: &User, role: Role, status: UserStatus) -> EditStep {
    let update = UserUpdate::combined(role, status, None, "");
    if update.enters_suspension(target) {
        if let Some(blocker) = suspend_blocker(actor_email, target) {
            return EditStep::Refuse(blocker);
        }
        if role == Role::Admin {
            return EditStep::Refuse(AdminError::AdminSuspension.to_string());
        }
        return EditStep::CollectSuspension;
    }
    if target.is_suspended() && status == UserStatus::Active {
        return EditStep::ConfirmActivation;
    }
    match update.validate(actor_email, target) {
        Ok(update) => EditStep::Send(update),
        Err(e) => EditStep::Refuse(e.to_string()),
    }
}

/// Toast text for a validated update.
pub fn saved_message(target: &User, update: &UserUpdate) -> String {
    match (update.role, update.status) {
        (_, Some(UserStatus::Suspended)) => format!("{} has been suspended.", target.name),
        (_, Some(UserStatus::Active)) => format!("{} is active again.", target.name),
        (Some(role), None) => format!("{} is now {}.", target.name, role.label()),
        (None, None) => format!("{} was updated.", target.name),
    }
}

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = Notifier::from_context();

    let role_filter = RwSignal::new(None::<Role>);
    let search = RwSignal::new(String::new());
    let users = use_users(move || role_filter.get());

    let suspending = RwSignal::new(None::<StagedEdit>);
    let activating = RwSignal::new(None::<StagedEdit>);
    let dialog_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    // Bumped to rebuild the rows, dropping staged selections.
    let revision = RwSignal::new(0_u64);

    let actor = move || auth.with(|a| a.email().map(str::to_owned).unwrap_or_default());
    let reset_rows = move || {
        let _ = revision.try_update(|r| *r = r.wrapping_add(1));
    };

    // Validate, send and report one admin update.
    let submit = move |target: User, update: UserUpdate| {
        let update = match update.validate(&actor(), &target) {
            Ok(update) => update,
            Err(e) => {
                if suspending.get_untracked().is_some() {
                    dialog_error.set(Some(e.to_string()));
                } else {
                    notifier.refuse(e.to_string());
                    reset_rows();
                }
                return;
            }
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_update_user(&target.email, &update).await {
                Ok(()) => {
                    notifier.completed(crate::net::query::Mutation::AdminUpdateUser, saved_message(&target, &update));
                    let _ = suspending.try_set(None);
                    let _ = activating.try_set(None);
                }
                Err(e) => {
                    notifier.error(&e);
                    reset_rows();
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (target, update);
    };

    let save_row = move |target: User, role: Role, status: UserStatus| match edit_step(&actor(), &target, role, status) {
        EditStep::Send(update) => submit(target, update),
        EditStep::CollectSuspension => {
            dialog_error.set(None);
            suspending.set(Some(StagedEdit { target, role }));
        }
        EditStep::ConfirmActivation => activating.set(Some(StagedEdit { target, role })),
        EditStep::Refuse(message) => {
            notifier.refuse(message);
            reset_rows();
        }
    };

    let on_suspend = Callback::new(move |(reason, feedback): (Option<SuspendReason>, String)| {
        let Some(staged) = suspending.get_untracked() else {
            return;
        };
        dialog_error.set(None);
        let update = UserUpdate::combined(staged.role, UserStatus::Suspended, reason, &feedback);
        submit(staged.target, update);
    });
    let on_activate = Callback::new(move |()| {
        let Some(staged) = activating.get_untracked() else {
            return;
        };
        submit(staged.target, UserUpdate::combined(staged.role, UserStatus::Active, None, ""));
    });
    let on_dialog_cancel = Callback::new(move |()| {
        suspending.set(None);
        activating.set(None);
        reset_rows();
    });

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Manage users"</h1>
                <div class="filters">
                    <input
                        type="search"
                        placeholder="Search by name or email"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| role_filter.set(Role::parse(&event_target_value(&ev)))>
                        <option value="">"All roles"</option>
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </header>
            {move || {
                revision.track();
                let state = users.get();
                if state.is_initial_load() {
                    return view! { <Spinner/> }.into_any();
                }
                if let Some(err) = state.blocking_error() {
                    return view! { <ErrorPanel message=err.to_string()/> }.into_any();
                }
                let all = state.data.unwrap_or_default();
                let shown: Vec<User> = admin::filter_users(&all, None, &search.get()).into_iter().cloned().collect();
                if shown.is_empty() {
                    return view! { <EmptyState message="No users match this filter."/> }.into_any();
                }
                let me = actor();
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"User"</th>
                                <th>"Role"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {shown
                                .into_iter()
                                .map(|user| {
                                    let blocker = suspend_blocker(&me, &user);
                                    let choices = role_choices(&me, &user);
                                    let stored = (user.role, user.status);
                                    let draft_role = RwSignal::new(user.role);
                                    let draft_status = RwSignal::new(user.status);
                                    let changed = move || (draft_role.get(), draft_status.get()) != stored;
                                    // Only blocks the move into suspension; reactivation stays open.
                                    let status_locked = blocker.is_some() && !user.is_suspended();
                                    let for_save = user.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <strong>{user.name.clone()}</strong>
                                                <small class="muted">{user.email.clone()}</small>
                                            </td>
                                            <td>
                                                {match choices {
                                                    Some(roles) => view! {
                                                        <select
                                                            prop:value=move || draft_role.get().as_str()
                                                            on:change=move |ev| {
                                                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                                                    draft_role.set(role);
                                                                }
                                                            }
                                                        >
                                                            {roles
                                                                .into_iter()
                                                                .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                                                                .collect_view()}
                                                        </select>
                                                    }
                                                    .into_any(),
                                                    None => view! { <span>{stored.0.label()}</span> }.into_any(),
                                                }}
                                            </td>
                                            <td>
                                                <AccountBadge status=user.status/>
                                                <select
                                                    disabled=status_locked
                                                    title=blocker.clone().unwrap_or_default()
                                                    prop:value=move || draft_status.get().as_str()
                                                    on:change=move |ev| {
                                                        if let Some(status) = UserStatus::parse(&event_target_value(&ev)) {
                                                            draft_status.set(status);
                                                        }
                                                    }
                                                >
                                                    {UserStatus::ALL
                                                        .into_iter()
                                                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                                        .collect_view()}
                                                </select>
                                            </td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn--small"
                                                    disabled=move || busy.get() || !changed()
                                                    on:click=move |_| {
                                                        save_row(
                                                            for_save.clone(),
                                                            draft_role.get_untracked(),
                                                            draft_status.get_untracked(),
                                                        );
                                                    }
                                                >
                                                    "Save"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
            {move || {
                suspending
                    .get()
                    .map(|staged| {
                        view! {
                            <SuspendDialog
                                target_name=staged.target.name.clone()
                                busy=busy
                                error=dialog_error
                                on_submit=on_suspend
                                on_cancel=on_dialog_cancel
                            />
                        }
                    })
            }}
            {move || {
                activating
                    .get()
                    .map(|staged| {
                        let message = if staged.role == staged.target.role {
                            format!("Restore access for {} ({})?", staged.target.name, staged.target.email)
                        } else {
                            format!(
                                "Restore access for {} ({}) as {}?",
                                staged.target.name,
                                staged.target.email,
                                staged.role.label(),
                            )
                        };
                        view! {
                            <ConfirmDialog
                                title="Activate account?"
                                message=message
                                confirm_label="Activate"
                                busy=busy
                                on_confirm=on_activate
                                on_cancel=on_dialog_cancel
                            />
                        }
                    })
            }}
        </section>
    }
}
