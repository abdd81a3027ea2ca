//! Contract with the hosted auth/database service, plus an in-memory
//! implementation used by the demo backend and by tests.

use crate::error::StoreError;
use crate::identity::Identity;
use futures::future::{self, FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type AuthCallback = Rc<dyn Fn(Option<Identity>)>;

/// The three remote-store operations the shell depends on.
pub trait RemoteStore {
    fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Identity>, StoreError>>;

    /// Registers `callback` for every sign-in, sign-out and token refresh.
    fn on_auth_state_change(&self, callback: AuthCallback) -> Result<StoreSubscription, StoreError>;

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), StoreError>>;
}

impl<S: RemoteStore + ?Sized> RemoteStore for Rc<S> {
    fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Identity>, StoreError>> {
        (**self).get_session()
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Result<StoreSubscription, StoreError> {
        (**self).on_auth_state_change(callback)
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), StoreError>> {
        (**self).sign_out()
    }
}

/// Store-side registration. Dropping it unsubscribes.
pub struct StoreSubscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl StoreSubscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A registration with nothing to release.
    pub fn inert() -> Self {
        Self { unsubscribe: None }
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for StoreSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for StoreSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreSubscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[derive(Default)]
struct MemoryInner {
    session: Option<Identity>,
    listeners: Vec<(u64, AuthCallback)>,
    next_listener: u64,
    session_error: Option<StoreError>,
}

/// Single-process stand-in for the remote store. Listener callbacks run
/// synchronously inside [`MemoryStore::emit`].
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(identity: Identity) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().session = Some(identity);
        store
    }

    /// `get_session` fails with `error` until cleared by a sign-in.
    pub fn failing(error: StoreError) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().session_error = Some(error);
        store
    }

    pub fn session(&self) -> Option<Identity> {
        self.inner.borrow().session.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn sign_in(&self, identity: Identity) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.session_error = None;
            inner.session = Some(identity.clone());
        }
        self.emit(Some(identity));
    }

    /// Notifies every registered listener. Listeners may re-enter the store.
    pub fn emit(&self, session: Option<Identity>) {
        let listeners: Vec<AuthCallback> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for listener in listeners {
            listener(session.clone());
        }
    }
}

impl RemoteStore for MemoryStore {
    fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Identity>, StoreError>> {
        let inner = self.inner.borrow();
        let result = match &inner.session_error {
            Some(err) => Err(err.clone()),
            None => Ok(inner.session.clone()),
        };
        future::ready(result).boxed_local()
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Result<StoreSubscription, StoreError> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, callback));
            id
        };

        let weak: Weak<RefCell<MemoryInner>> = Rc::downgrade(&self.inner);
        Ok(StoreSubscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        }))
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), StoreError>> {
        self.inner.borrow_mut().session = None;
        self.emit(None);
        future::ready(Ok(())).boxed_local()
    }
}
