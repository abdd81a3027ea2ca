use crate::dto;
use crate::navigator::use_navigator;
use crm_core::selection::Selection;
use crm_core::view::ViewId;
use leptos::*;

#[component]
pub fn CompanyList(highlighted: Option<String>) -> impl IntoView {
    let navigator = use_navigator();
    let query = create_rw_signal(String::new());

    let filtered = move || {
        let needle = query.get().trim().to_lowercase();
        dto::companies()
            .into_iter()
            .filter(|c| {
                needle.is_empty()
                    || c.name.to_lowercase().contains(&needle)
                    || c.country.to_lowercase().contains(&needle)
                    || c.industry.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    view! {
      <div class="stack">
        <input
          prop:value=move || query.get()
          on:input=move |ev| query.set(event_target_value(&ev))
          placeholder="Search by name, country or industry"
        />
        <ul>
          <For
            each=filtered
            key=|c| c.id.clone()
            children=move |c| {
                let id = c.id.clone();
                let class = if highlighted.as_deref() == Some(c.id.as_str()) { "selected" } else { "" };
                view! {
                  <li class=class on:click=move |_| navigator.navigate(ViewId::CompanyDetails, Some(Selection::company(id.clone())))>
                    <div><b>{c.name.clone()}</b> <span class="meta">{format!("({})", c.status)}</span></div>
                    <div class="meta">{format!("{} · {}", c.country, c.industry)}</div>
                  </li>
                }
            }
          />
        </ul>
      </div>
    }
}

#[component]
pub fn CompanyDetails(company_id: String) -> impl IntoView {
    let navigator = use_navigator();
    let Some(company) = dto::company(&company_id) else {
        return view! {
          <div class="placeholder">
            <p>{format!("Company {company_id} was not found.")}</p>
            <button on:click=move |_| navigator.navigate(ViewId::Companies, None)>"Back to companies"</button>
          </div>
        }
        .into_view();
    };

    let back_id = company.id.clone();
    let admin_id = company.id.clone();
    view! {
      <div class="stack">
        <h2>{company.name}</h2>
        <div class="meta">{format!("{} · {} · {}", company.country, company.industry, company.status)}</div>
        <div class="row">
          <button on:click=move |_| navigator.navigate(ViewId::Companies, Some(Selection::company(back_id.clone())))>
            "Back to companies"
          </button>
          <button on:click=move |_| navigator.navigate(ViewId::CompanyAdmin, Some(Selection::company(admin_id.clone())))>
            "Manage employees"
          </button>
        </div>
      </div>
    }
    .into_view()
}
