use crate::identity::{Identity, IdentityState};
use crate::navigation::{NavigationController, Navigator};
use crate::registry::{self, NavItem, RenderUnit};
use crate::session::{SessionGate, Subscription};
use crate::store::RemoteStore;
use crate::view::ViewId;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// What the shell shows for a given identity and navigation state.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Loading,
    Entry,
    Workspace(Workspace),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Workspace {
    pub identity: Identity,
    pub sidebar: Vec<NavItem>,
    pub active: ViewId,
    pub unit: RenderUnit,
}

impl Frame {
    pub fn is_loading(&self) -> bool {
        matches!(self, Frame::Loading)
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, Frame::Entry)
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        match self {
            Frame::Workspace(ws) => Some(ws),
            _ => None,
        }
    }
}

/// The render decision. Re-evaluated on every state change.
pub fn decide(identity: &IdentityState, nav: &NavigationController) -> Frame {
    match identity {
        IdentityState::Unknown => Frame::Loading,
        IdentityState::Unauthenticated => Frame::Entry,
        IdentityState::Authenticated(identity) => Frame::Workspace(Workspace {
            identity: identity.clone(),
            sidebar: registry::sidebar(),
            active: nav.current_view(),
            unit: registry::resolve(nav.current_view(), nav.selection()),
        }),
    }
}

/// Session gate, navigator and registry composed into one page.
///
/// The listener registered with [`Shell::with_listener`] runs whenever the
/// next [`Shell::frame`] may differ: after each identity transition, once the
/// initial check settles, after sign-out settles and on entry completion.
/// Reactive front ends mirror `frame()` from it.
pub struct Shell<S> {
    gate: SessionGate<S>,
    navigator: Navigator,
    listener: Rc<dyn Fn()>,
    subscription: RefCell<Option<Subscription>>,
}

impl<S: RemoteStore + 'static> Shell<S> {
    pub fn new(store: S, initial_view: ViewId) -> Self {
        Self::with_gate(SessionGate::new(store), initial_view)
    }

    pub fn with_gate(gate: SessionGate<S>, initial_view: ViewId) -> Self {
        Self {
            gate,
            navigator: Navigator::new(initial_view),
            listener: Rc::new(|| {}),
            subscription: RefCell::new(None),
        }
    }

    pub fn with_listener(mut self, listener: impl Fn() + 'static) -> Self {
        self.listener = Rc::new(listener);
        self
    }

    /// Handle passed to child views.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Subscribes to identity changes, then returns the initial identity
    /// check for the caller's executor to drive. Mounting twice keeps the
    /// first subscription.
    pub fn mount(&self) -> impl Future<Output = ()> + 'static {
        if self.subscription.borrow().is_none() {
            let listener = self.listener.clone();
            let subscription = self.gate.subscribe(move |identity| {
                match identity {
                    Some(identity) => tracing::info!(user = %identity.id, "signed in"),
                    None => tracing::info!("signed out"),
                }
                listener();
            });
            *self.subscription.borrow_mut() = Some(subscription);
        }

        let initial = self.gate.initial_identity();
        let listener = self.listener.clone();
        async move {
            initial.await;
            listener();
        }
    }

    pub fn frame(&self) -> Frame {
        decide(&self.gate.state(), &self.navigator.snapshot())
    }

    /// Completion callback of the entry view. Identity is left to the gate.
    pub fn entry_completed(&self) {
        self.navigator.navigate(ViewId::DEFAULT, None);
        (self.listener)();
    }

    pub fn sign_out(&self) -> impl Future<Output = ()> + 'static {
        let request = self.gate.sign_out();
        let listener = self.listener.clone();
        async move {
            request.await;
            listener();
        }
    }

    pub fn unmount(&self) {
        let subscription = self.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ViewProps;
    use crate::selection::Selection;
    use crate::store::MemoryStore;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn decide_covers_every_identity_state() {
        let nav = NavigationController::default();
        assert_eq!(decide(&IdentityState::Unknown, &nav), Frame::Loading);
        assert_eq!(decide(&IdentityState::Unauthenticated, &nav), Frame::Entry);

        let frame = decide(
            &IdentityState::Authenticated(Identity::new("user-a")),
            &nav,
        );
        let ws = frame.workspace().expect("workspace");
        assert_eq!(ws.active, ViewId::Dashboard);
        assert_eq!(ws.unit.props, ViewProps::Plain);
        assert!(!ws.sidebar.is_empty());
    }

    #[test]
    fn render_decisions_follow_events_in_order() {
        let store = MemoryStore::new();
        let shell = Shell::new(store.clone(), ViewId::Dashboard);
        block_on(shell.mount());

        let mut decisions = Vec::new();
        for event in [
            None,
            Some(Identity::new("user-a")),
            None,
            Some(Identity::new("user-b")),
        ] {
            store.emit(event);
            decisions.push(
                shell
                    .frame()
                    .workspace()
                    .map(|ws| ws.identity.id.clone()),
            );
        }

        assert_eq!(
            decisions,
            vec![None, Some("user-a".into()), None, Some("user-b".into())]
        );
    }

    #[test]
    fn unmount_releases_store_listener() {
        let store = MemoryStore::new();
        let shell = Shell::new(store.clone(), ViewId::Dashboard);
        block_on(shell.mount());
        assert!(shell.is_mounted());
        assert_eq!(store.listener_count(), 1);

        shell.unmount();
        assert!(!shell.is_mounted());
        assert_eq!(store.listener_count(), 0);

        store.emit(Some(Identity::new("user-a")));
        assert!(shell.frame().is_entry());
    }

    #[test]
    fn dropping_shell_releases_store_listener() {
        let store = MemoryStore::new();
        {
            let shell = Shell::new(store.clone(), ViewId::Dashboard);
            block_on(shell.mount());
            let _ = shell.mount();
            assert_eq!(store.listener_count(), 1);
        }
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn child_navigation_is_visible_in_next_frame() {
        let store = MemoryStore::with_session(Identity::new("user-a"));
        let shell = Shell::new(store, ViewId::Dashboard);
        block_on(shell.mount());

        shell
            .navigator()
            .navigate(ViewId::CompanyDetails, Some(Selection::company("7")));
        let frame = shell.frame();
        let ws = frame.workspace().expect("workspace");
        assert_eq!(ws.active, ViewId::CompanyDetails);
        assert_eq!(ws.unit.company_id(), Some("7"));
    }

    #[test]
    fn listener_fires_for_every_frame_change() {
        let store = MemoryStore::with_session(Identity::new("user-a"));
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let shell = Shell::new(store.clone(), ViewId::Tasks)
            .with_listener(move || counter.set(counter.get() + 1));

        block_on(shell.mount());
        assert_eq!(changes.get(), 1);
        assert!(shell.frame().workspace().is_some());

        shell.entry_completed();
        assert_eq!(changes.get(), 2);
        assert_eq!(shell.frame().workspace().map(|ws| ws.active), Some(ViewId::Dashboard));

        // One call for the store's event, one once the request settles.
        block_on(shell.sign_out());
        assert_eq!(changes.get(), 4);
        assert!(shell.frame().is_entry());

        shell.unmount();
        store.sign_in(Identity::new("user-b"));
        assert_eq!(changes.get(), 4);
    }
}
