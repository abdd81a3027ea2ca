use crate::dto::CardDto;
use crate::navigator::use_navigator;
use crm_core::registry::Requirement;
use crm_core::view::ViewId;
use leptos::*;

#[component]
pub fn CardGrid(cards: Vec<CardDto>) -> impl IntoView {
    if cards.is_empty() {
        return view! { <p class="meta">"Nothing here yet."</p> }.into_view();
    }

    view! {
      <div class="cards">
        {cards
            .into_iter()
            .map(|c| view! {
              <div class="card">
                <b>{c.title}</b>
                <div>{c.subtitle}</div>
                <div class="meta">{c.meta}</div>
              </div>
            })
            .collect_view()}
      </div>
    }
    .into_view()
}

/// Shown when a view was opened without the selection it needs.
#[component]
pub fn Placeholder(missing: Requirement) -> impl IntoView {
    let navigator = use_navigator();
    let (message, back) = match missing {
        Requirement::Employee => ("Pick an employee from Company Admin first.", ViewId::CompanyAdmin),
        _ => ("Pick a company from the Companies list first.", ViewId::Companies),
    };

    view! {
      <div class="placeholder">
        <p>{message}</p>
        <button on:click=move |_| navigator.navigate(back, None)>"Go there"</button>
      </div>
    }
}
