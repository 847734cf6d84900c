//! Small status pills for applications, fees and accounts.

use leptos::prelude::*;
use lending::application::{ApplicationStatus, FeeStatus};
use lending::user::UserStatus;

#[component]
pub fn StatusBadge(status: ApplicationStatus) -> impl IntoView {
    let class = format!("badge badge--{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}

#[component]
pub fn FeeBadge(fee: FeeStatus) -> impl IntoView {
    let class = match fee {
        FeeStatus::Paid => "badge badge--paid",
        FeeStatus::Unpaid => "badge badge--unpaid",
    };
    view! { <span class=class>{fee.label()}</span> }
}

#[component]
pub fn AccountBadge(status: UserStatus) -> impl IntoView {
    let class = format!("badge badge--{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}
