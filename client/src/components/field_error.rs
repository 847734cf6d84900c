use leptos::prelude::*;
use lending::validate::FieldErrors;

/// Inline message under a form input, hidden while the field is valid.
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field).map(str::to_owned));
    view! {
        <Show when=move || message().is_some()>
            <p class="field-error">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}
