use crate::bridge::JsRemoteStore;
use crate::config::UiConfig;
use crm_core::error::StoreError;
use crm_core::identity::Identity;
use crm_core::store::{AuthCallback, MemoryStore, RemoteStore, StoreSubscription};
use futures::future::{self, FutureExt, LocalBoxFuture};

/// The hosted store when the page provides one, otherwise a local demo.
pub enum Backend {
    Remote(JsRemoteStore),
    Demo(MemoryStore),
}

impl Backend {
    pub fn connect(config: &UiConfig) -> Self {
        match JsRemoteStore::from_window(config.store_global) {
            Ok(store) => Backend::Remote(store),
            Err(err) => {
                log::warn!("{err}; running on the demo backend");
                Backend::Demo(MemoryStore::new())
            }
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Backend::Demo(_))
    }

    /// Called by the entry view. Success is reported by the store's own
    /// auth event, not by the return value.
    pub fn sign_in(&self, email: &str, password: &str) -> LocalBoxFuture<'static, Result<(), StoreError>> {
        match self {
            Backend::Remote(store) => store.sign_in_with_password(email, password),
            Backend::Demo(store) => {
                let email = email.trim();
                let result = if email.is_empty() {
                    Err(StoreError::Rejected("email is required".into()))
                } else {
                    store.sign_in(Identity::new(format!("demo:{email}")).with_email(email));
                    Ok(())
                };
                future::ready(result).boxed_local()
            }
        }
    }
}

impl RemoteStore for Backend {
    fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Identity>, StoreError>> {
        match self {
            Backend::Remote(store) => store.get_session(),
            Backend::Demo(store) => store.get_session(),
        }
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Result<StoreSubscription, StoreError> {
        match self {
            Backend::Remote(store) => store.on_auth_state_change(callback),
            Backend::Demo(store) => store.on_auth_state_change(callback),
        }
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), StoreError>> {
        match self {
            Backend::Remote(store) => store.sign_out(),
            Backend::Demo(store) => store.sign_out(),
        }
    }
}
