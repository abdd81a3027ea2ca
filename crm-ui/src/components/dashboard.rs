use crate::dto;
use crate::navigator::use_navigator;
use crm_core::selection::Selection;
use crm_core::view::ViewId;
use leptos::*;

#[component]
pub fn Dashboard() -> impl IntoView {
    let navigator = use_navigator();
    let companies = dto::companies();
    let active = companies.iter().filter(|c| c.status == "active").count();
    let open_tasks = dto::tasks().iter().filter(|t| t.status != "done").count();
    let insights = dto::cards_for(ViewId::AiInsights).len();

    let stats = [
        ("Active companies", active.to_string(), ViewId::Companies),
        ("Open tasks", open_tasks.to_string(), ViewId::Tasks),
        ("AI insights", insights.to_string(), ViewId::AiInsights),
    ];

    view! {
      <div class="stack">
        <div class="cards">
          {stats
              .into_iter()
              .map(|(label, value, target)| view! {
                <div class="card stat" on:click=move |_| navigator.navigate(target, None)>
                  <div class="meta">{label}</div>
                  <b>{value}</b>
                </div>
              })
              .collect_view()}
        </div>
        <h3>"Key accounts"</h3>
        <ul>
          {companies
              .into_iter()
              .filter(|c| c.status == "active")
              .map(|c| {
                  let id = c.id.clone();
                  view! {
                    <li on:click=move |_| navigator.navigate(ViewId::Companies, Some(Selection::company(id.clone())))>
                      <b>{c.name}</b> <span class="meta">{format!("({})", c.country)}</span>
                    </li>
                  }
              })
              .collect_view()}
        </ul>
      </div>
    }
}
