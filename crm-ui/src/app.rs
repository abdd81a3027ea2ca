use crate::backend::Backend;
use crate::components::entry::EntryView;
use crate::components::loading::Loading;
use crate::components::workspace::WorkspaceLayout;
use crate::config::UiConfig;
use crate::navigator::Navigator;
use crate::preferences;
use crm_core::session::SessionGate;
use crm_core::shell::{Frame, Shell};
use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::load();
    let backend = Rc::new(Backend::connect(&config));
    let revision = create_trigger();

    let shell = Rc::new(
        Shell::with_gate(
            SessionGate::shared(backend.clone()),
            preferences::last_view(config.preference_key),
        )
        .with_listener(move || revision.notify()),
    );
    let navigator = Navigator::new(shell.navigator());
    provide_context(navigator);

    // Subscribes before the first frame is decided.
    spawn_local(shell.mount());
    let mounted = shell.clone();
    on_cleanup(move || mounted.unmount());

    let mirror = shell.clone();
    let frame = create_memo(move |_| {
        revision.track();
        navigator.track();
        mirror.frame()
    });

    let preference_key = config.preference_key;
    create_effect(move |_| {
        if let Some(view) = frame.with(|f| f.workspace().map(|ws| ws.active)) {
            preferences::remember_view(preference_key, view);
        }
    });

    let entry_shell = shell.clone();
    let on_signed_in = Callback::new(move |_: ()| entry_shell.entry_completed());
    let sign_out = Callback::new(move |_: ()| spawn_local(shell.sign_out()));

    let demo = backend.is_demo();
    view! {
      <div class="app">
        <Show when=move || demo fallback=|| ()>
          <div class="banner">"Demo mode: no hosted store found, data stays in this tab."</div>
        </Show>
        {move || match frame.get() {
            Frame::Loading => view! { <Loading/> }.into_view(),
            Frame::Entry => {
                let backend = backend.clone();
                view! { <EntryView backend=backend on_signed_in=on_signed_in/> }.into_view()
            }
            Frame::Workspace(workspace) => {
                view! { <WorkspaceLayout workspace=workspace on_sign_out=sign_out/> }.into_view()
            }
        }}
      </div>
    }
}
