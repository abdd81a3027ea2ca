use crm_core::registry;
use crm_core::view::ViewId;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored last view, validated against the sidebar views.
pub fn last_view(key: &str) -> ViewId {
    let stored = storage().and_then(|s| s.get_item(key).ok().flatten());
    registry::restore_view(stored.as_deref())
}

/// Detail views are skipped; their selection does not survive a reload.
pub fn remember_view(key: &str, view: ViewId) {
    if !registry::is_landing(view) {
        return;
    }
    let Some(storage) = storage() else {
        return;
    };
    if storage.set_item(key, view.as_str()).is_err() {
        log::debug!("could not persist last view {view}");
    }
}
