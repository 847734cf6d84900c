//! Create/edit form for loan products, shared by the add-loan page and the
//! edit modals on the manager and admin loan tables.

use leptos::prelude::*;
use lending::loan::{CATEGORIES, LoanForm, LoanPayload};
use lending::validate::FieldErrors;

use crate::components::field_error::FieldError;

#[component]
pub fn LoanFormView(
    initial: LoanForm,
    #[prop(into)] submit_label: String,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<LoanPayload>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(LoanForm::validate) {
            Ok(payload) => {
                errors.set(FieldErrors::new());
                on_submit.run(payload);
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    view! {
        <form class="loan-form" on:submit=on_form_submit>
            <label class="form-field">
                <span>"Title"</span>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <FieldError errors=errors field="title"/>
            </label>
            <label class="form-field">
                <span>"Description"</span>
                <textarea
                    rows="4"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <FieldError errors=errors field="description"/>
            </label>
            <label class="form-field">
                <span>"Category"</span>
                <select
                    prop:value=move || form.with(|f| f.category.clone())
                    on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                >
                    <option value="">"Choose a category"</option>
                    {CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c>{c}</option> })
                        .collect_view()}
                </select>
                <FieldError errors=errors field="category"/>
            </label>
            <div class="form-row">
                <label class="form-field">
                    <span>"Interest rate (%)"</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || form.with(|f| f.interest_rate.clone())
                        on:input=move |ev| form.update(|f| f.interest_rate = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="interest_rate"/>
                </label>
                <label class="form-field">
                    <span>"Maximum loan limit"</span>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || form.with(|f| f.max_loan_limit.clone())
                        on:input=move |ev| form.update(|f| f.max_loan_limit = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="max_loan_limit"/>
                </label>
            </div>
            <label class="form-field">
                <span>"EMI plans (comma separated)"</span>
                <input
                    type="text"
                    placeholder="3 months, 6 months, 12 months"
                    prop:value=move || form.with(|f| f.emi_plans.clone())
                    on:input=move |ev| form.update(|f| f.emi_plans = event_target_value(&ev))
                />
                <FieldError errors=errors field="emi_plans"/>
            </label>
            <label class="form-field">
                <span>"Image URLs (comma separated, cover first)"</span>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.images.clone())
                    on:input=move |ev| form.update(|f| f.images = event_target_value(&ev))
                />
                <FieldError errors=errors field="images"/>
            </label>
            <label class="form-field">
                <span>"Required documents (comma separated)"</span>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.required_documents.clone())
                    on:input=move |ev| form.update(|f| f.required_documents = event_target_value(&ev))
                />
            </label>
            <label class="form-check">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.show_on_home)
                    on:change=move |ev| form.update(|f| f.show_on_home = event_target_checked(&ev))
                />
                <span>"Show on home page"</span>
            </label>
            <div class="form-actions">
                {on_cancel
                    .map(|cancel| {
                        view! {
                            <button type="button" class="btn" on:click=move |_| cancel.run(())>
                                "Cancel"
                            </button>
                        }
                    })}
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
