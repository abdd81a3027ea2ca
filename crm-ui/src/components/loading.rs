use leptos::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
      <div class="loading">
        <div class="spinner"></div>
        <p>"Checking your session…"</p>
      </div>
    }
}
