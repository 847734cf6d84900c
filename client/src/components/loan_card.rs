use leptos::prelude::*;
use leptos_router::components::A;
use lending::loan::Loan;

use crate::util::format;

/// Catalog tile linking to the loan details page.
#[component]
pub fn LoanCard(loan: Loan) -> impl IntoView {
    let href = format!("/loans/{}", loan.id);
    let cover = loan.cover_image().map(str::to_owned);
    let title = loan.title.clone();

    view! {
        <article class="loan-card">
            {cover.map(|src| view! { <img class="loan-card__image" src=src alt=title.clone()/> })}
            <div class="loan-card__body">
                <span class="loan-card__category">{loan.category.clone()}</span>
                <h3 class="loan-card__title">{loan.title.clone()}</h3>
                <p class="loan-card__description">{format::excerpt(&loan.description, 120)}</p>
                <dl class="loan-card__facts">
                    <dt>"Interest"</dt>
                    <dd>{format::percent(loan.interest_rate)}</dd>
                    <dt>"Up to"</dt>
                    <dd>{format::money(loan.max_loan_limit)}</dd>
                </dl>
                <A href=href attr:class="btn btn--primary">"View Details"</A>
            </div>
        </article>
    }
}
