//! Suspension step: an admin must pick a reason and explain it before an
//! account is suspended.

use leptos::prelude::*;
use lending::user::SuspendReason;

#[component]
pub fn SuspendDialog(
    #[prop(into)] target_name: String,
    #[prop(into)] busy: Signal<bool>,
    /// Guardrail message from the last submit attempt.
    #[prop(into)] error: Signal<Option<String>>,
    on_submit: Callback<(Option<SuspendReason>, String)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let reason = RwSignal::new(None::<SuspendReason>);
    let feedback = RwSignal::new(String::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run((reason.get_untracked(), feedback.get_untracked()));
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_form_submit>
                <h2>"Suspend " {target_name}</h2>
                <label class="form-field">
                    <span>"Reason"</span>
                    <select
                        required
                        on:change=move |ev| reason.set(SuspendReason::parse(&event_target_value(&ev)))
                    >
                        <option value="" selected=move || reason.get().is_none()>"Select a reason"</option>
                        {SuspendReason::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form-field">
                    <span>"Feedback"</span>
                    <textarea
                        rows="4"
                        placeholder="Explain why this account is suspended"
                        prop:value=move || feedback.get()
                        on:input=move |ev| feedback.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="field-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn--danger" disabled=move || busy.get()>"Suspend"</button>
                </div>
            </form>
        </div>
    }
}
