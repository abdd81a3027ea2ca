use crate::dto;
use crate::navigator::use_navigator;
use crm_core::selection::{EmployeeRecord, Selection};
use crm_core::view::ViewId;
use leptos::*;

#[component]
pub fn CompanyAdmin(company_id: Option<String>) -> impl IntoView {
    let navigator = use_navigator();
    let heading = company_id
        .as_deref()
        .and_then(dto::company)
        .map(|c| format!("Employees of {}", c.name))
        .unwrap_or_else(|| "All employees".to_string());

    let rows = dto::employees()
        .into_iter()
        .filter(|e| company_id.as_deref().map_or(true, |id| e.company_id == id))
        .map(|e| {
            let record = e.to_record();
            view! {
              <li class="row">
                <div>
                  <b>{e.full_name.clone()}</b>
                  <div class="meta">{format!("{} · {}", e.role, e.email)}</div>
                </div>
                <button on:click=move |_| navigator.navigate(ViewId::EditEmployee, Some(Selection::employee(record.clone())))>
                  "Edit"
                </button>
              </li>
            }
        })
        .collect_view();

    let add_for = company_id.clone();
    view! {
      <div class="stack">
        <h3>{heading}</h3>
        <ul>{rows}</ul>
        <button on:click=move |_| {
            navigator.navigate(ViewId::AddEmployee, add_for.clone().map(Selection::company))
        }>"Add employee"</button>
      </div>
    }
}

/// Add and edit share the form; `employee` is `None` when adding.
#[component]
pub fn EmployeeForm(employee: Option<EmployeeRecord>, company_id: Option<String>) -> impl IntoView {
    let navigator = use_navigator();
    let editing = employee.is_some();
    let field = |key: &str| {
        employee
            .as_ref()
            .and_then(|e| e.field(key))
            .unwrap_or_default()
            .to_string()
    };

    let full_name = create_rw_signal(field("full_name"));
    let email = create_rw_signal(field("email"));
    let role = create_rw_signal(field("role"));
    let employee_id = employee.as_ref().map(|e| e.id.clone());

    let back_to = company_id.clone();
    let back = move || navigator.navigate(ViewId::CompanyAdmin, back_to.clone().map(Selection::company));

    let save_back = back.clone();
    let save = move || {
        log::info!(
            "demo save, not persisted: employee {} ({}, {}, {})",
            employee_id.as_deref().unwrap_or("new"),
            full_name.get_untracked(),
            email.get_untracked(),
            role.get_untracked()
        );
        save_back();
    };

    view! {
      <div class="stack">
        <h3>{if editing { "Edit employee" } else { "New employee" }}</h3>
        <input
          prop:value=move || full_name.get()
          on:input=move |ev| full_name.set(event_target_value(&ev))
          placeholder="Full name"
        />
        <input
          prop:value=move || email.get()
          on:input=move |ev| email.set(event_target_value(&ev))
          placeholder="Email"
        />
        <input
          prop:value=move || role.get()
          on:input=move |ev| role.set(event_target_value(&ev))
          placeholder="Role"
        />
        <p class="meta">"Demo form: changes are not saved."</p>
        <div class="row">
          <button on:click=move |_| save()>"Save (demo)"</button>
          <button on:click=move |_| back()>"Cancel"</button>
        </div>
      </div>
    }
}
