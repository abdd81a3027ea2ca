use crate::identity::{Identity, IdentityState};
use crate::store::{RemoteStore, StoreSubscription};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

/// Decides, asynchronously, whether the caller is signed in and keeps that
/// decision current. Failures from the store never escape: they resolve to
/// [`IdentityState::Unauthenticated`].
pub struct SessionGate<S> {
    store: Rc<S>,
    state: Rc<RefCell<IdentityState>>,
    events: Rc<Cell<u64>>,
}

impl<S> Clone for SessionGate<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            state: self.state.clone(),
            events: self.events.clone(),
        }
    }
}

impl<S: RemoteStore + 'static> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self::shared(Rc::new(store))
    }

    pub fn shared(store: Rc<S>) -> Self {
        Self {
            store,
            state: Rc::new(RefCell::new(IdentityState::Unknown)),
            events: Rc::new(Cell::new(0)),
        }
    }

    pub fn state(&self) -> IdentityState {
        self.state.borrow().clone()
    }

    /// Queries the store once. While the returned future is pending the
    /// state stays `Unknown`. The answer is only recorded if no auth event
    /// has resolved the state in the meantime, since events are newer.
    pub fn initial_identity(&self) -> impl Future<Output = Option<Identity>> + 'static {
        let query = self.store.get_session();
        let state = self.state.clone();
        async move {
            let identity = match query.await {
                Ok(identity) => identity,
                Err(err) => {
                    tracing::warn!(%err, "initial identity check failed, treating as signed out");
                    None
                }
            };

            let mut current = state.borrow_mut();
            if current.is_resolved() {
                tracing::debug!("initial identity arrived after an auth event, keeping the event");
            } else {
                *current = IdentityState::from_session(identity.clone());
            }
            identity
        }
    }

    /// Registers `on_change` for every identity transition. The gate's cached
    /// state is updated before the listener runs. No invocation happens after
    /// the returned [`Subscription`] is released.
    pub fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(Option<&Identity>) + 'static,
    {
        let active = Rc::new(Cell::new(true));
        let guard = active.clone();
        let state = self.state.clone();
        let events = self.events.clone();

        let callback = Rc::new(move |session: Option<Identity>| {
            if !guard.get() {
                return;
            }
            events.set(events.get() + 1);
            let next = IdentityState::from_session(session);
            *state.borrow_mut() = next.clone();
            on_change(next.identity());
        });

        let registration = match self.store.on_auth_state_change(callback) {
            Ok(registration) => registration,
            Err(err) => {
                tracing::warn!(%err, "auth state subscription failed, identity will not refresh");
                StoreSubscription::inert()
            }
        };

        Subscription {
            active,
            registration: Some(registration),
        }
    }

    /// Signs out through the store. The cached identity is dropped only when
    /// the store succeeded and no auth event arrived while the request was in
    /// flight; otherwise the store's events stay authoritative.
    pub fn sign_out(&self) -> impl Future<Output = ()> + 'static {
        let seen = self.events.get();
        let request = self.store.sign_out();
        let state = self.state.clone();
        let events = self.events.clone();
        async move {
            match request.await {
                Err(err) => tracing::warn!(%err, "sign out failed, keeping current identity"),
                Ok(()) if events.get() != seen => {
                    tracing::debug!("auth event arrived during sign out, keeping the event");
                }
                Ok(()) => *state.borrow_mut() = IdentityState::Unauthenticated,
            }
        }
    }
}

/// Listener registration returned by [`SessionGate::subscribe`].
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    active: Rc<Cell<bool>>,
    registration: Option<StoreSubscription>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.active.set(false);
        if let Some(registration) = self.registration.take() {
            registration.unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
