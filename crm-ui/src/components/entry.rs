use crate::backend::Backend;
use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Sign-in form. On success it only reports back through `on_signed_in`;
/// the identity itself arrives through the session gate.
#[component]
pub fn EntryView(backend: Rc<Backend>, on_signed_in: Callback<()>) -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let busy = create_rw_signal(false);
    let demo = backend.is_demo();

    // A successful sign-in can replace this view before the future resumes,
    // so its signals are only written on failure.
    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let backend = backend.clone();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            match backend.sign_in(&email, &password).await {
                Ok(()) => on_signed_in.call(()),
                Err(err) => {
                    log::info!("sign in failed: {err}");
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
      <div class="entry">
        <h1>"Trade CRM"</h1>
        <p class="meta">"Companies, deals and shipments in one place."</p>
        <form class="stack" on:submit=move |ev| {
            ev.prevent_default();
            submit();
        }>
          <input
            type="email"
            prop:value=move || email.get()
            on:input=move |ev| email.set(event_target_value(&ev))
            placeholder="Work email"
          />
          <Show when=move || !demo fallback=|| ()>
            <input
              type="password"
              prop:value=move || password.get()
              on:input=move |ev| password.set(event_target_value(&ev))
              placeholder="Password"
            />
          </Show>
          <button type="submit" disabled=move || busy.get()>"Sign in"</button>
        </form>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <pre class="error">{move || error.get().unwrap_or_default()}</pre>
        </Show>
      </div>
    }
}
