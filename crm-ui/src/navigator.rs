use crm_core::navigation::Navigator as NavigationHandle;
use crm_core::selection::Selection;
use crm_core::view::ViewTarget;
use leptos::*;

/// Reactive face of the shell's navigator, provided to every view through
/// context. Navigating notifies whoever tracks it.
#[derive(Clone, Copy)]
pub struct Navigator {
    handle: StoredValue<NavigationHandle>,
    changed: Trigger,
}

impl Navigator {
    pub fn new(handle: NavigationHandle) -> Self {
        Self {
            handle: store_value(handle),
            changed: create_trigger(),
        }
    }

    pub fn navigate(&self, target: impl Into<ViewTarget>, selection: Option<Selection>) {
        let target = target.into();
        self.handle
            .with_value(|navigator| navigator.navigate(target, selection));
        self.changed.notify();
    }

    pub fn track(&self) {
        self.changed.track();
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
