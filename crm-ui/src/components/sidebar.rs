use crate::navigator::use_navigator;
use crm_core::registry::{NavItem, NavSection};
use crm_core::view::ViewId;
use leptos::*;

#[component]
pub fn Sidebar(
    items: Vec<NavItem>,
    active: ViewId,
    user: String,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    let navigator = use_navigator();

    let sections = NavSection::ORDER
        .iter()
        .map(|section| {
            let entries = items
                .iter()
                .filter(|item| item.section == *section)
                .map(|item| {
                    let target = item.view;
                    let class = if target == active { "nav-item active" } else { "nav-item" };
                    view! {
                      <li class=class on:click=move |_| navigator.navigate(target, None)>
                        {item.title}
                      </li>
                    }
                })
                .collect_view();
            view! {
              <div class="nav-section">
                <h4>{section.label()}</h4>
                <ul>{entries}</ul>
              </div>
            }
        })
        .collect_view();

    view! {
      <nav class="sidebar">
        <div class="brand">"Trade CRM"</div>
        {sections}
        <div class="sidebar-footer">
          <div class="meta">{user}</div>
          <button on:click=move |_| on_sign_out.call(())>"Sign out"</button>
        </div>
      </nav>
    }
}
