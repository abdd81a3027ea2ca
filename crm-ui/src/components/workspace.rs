use crate::components::sidebar::Sidebar;
use crate::components::views::render_unit;
use crm_core::shell::Workspace;
use leptos::*;

#[component]
pub fn WorkspaceLayout(workspace: Workspace, on_sign_out: Callback<()>) -> impl IntoView {
    let user = workspace.identity.display_name().to_string();
    let title = workspace.unit.title;

    view! {
      <div class="layout">
        <Sidebar items=workspace.sidebar active=workspace.active user=user on_sign_out=on_sign_out/>
        <main class="content">
          <header class="content-header"><h1>{title}</h1></header>
          {render_unit(workspace.unit)}
        </main>
      </div>
    }
}
