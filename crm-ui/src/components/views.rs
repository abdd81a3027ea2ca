use crate::components::board::{SalesLifecycle, TaskBoard};
use crate::components::cards::{CardGrid, Placeholder};
use crate::components::companies::{CompanyDetails, CompanyList};
use crate::components::dashboard::Dashboard;
use crate::components::employees::{CompanyAdmin, EmployeeForm};
use crate::dto;
use crm_core::registry::{RenderUnit, ViewProps};
use crm_core::view::ViewId;
use leptos::*;

/// Maps a resolved unit onto its component.
pub fn render_unit(unit: RenderUnit) -> View {
    let company_id = unit.company_id().map(ToString::to_string);

    match (unit.view, unit.props) {
        (_, ViewProps::Placeholder { missing }) => view! { <Placeholder missing=missing/> }.into_view(),
        (ViewId::Dashboard, _) => view! { <Dashboard/> }.into_view(),
        (ViewId::Companies, _) => view! { <CompanyList highlighted=company_id/> }.into_view(),
        (ViewId::CompanyDetails, _) => {
            view! { <CompanyDetails company_id=company_id.unwrap_or_default()/> }.into_view()
        }
        (ViewId::CompanyAdmin, _) => view! { <CompanyAdmin company_id=company_id/> }.into_view(),
        (ViewId::AddEmployee, _) => {
            view! { <EmployeeForm employee=None company_id=company_id/> }.into_view()
        }
        (ViewId::EditEmployee, ViewProps::Employee { employee, .. }) => {
            view! { <EmployeeForm employee=Some(employee) company_id=company_id/> }.into_view()
        }
        (ViewId::Tasks, _) => view! { <TaskBoard/> }.into_view(),
        (ViewId::SalesLifecycle, _) => view! { <SalesLifecycle/> }.into_view(),
        (view, _) => view! { <CardGrid cards=dto::cards_for(view)/> }.into_view(),
    }
}
