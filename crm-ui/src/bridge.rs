//! Adapter over the hosted auth client exposed on `window`. The page is
//! expected to publish an object with `getSession`, `onAuthStateChange`,
//! `signOut` and `signInWithPassword` under the configured global name.

use crm_core::error::StoreError;
use crm_core::identity::Identity;
use crm_core::store::{AuthCallback, RemoteStore, StoreSubscription};
use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::{Array, Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub struct JsRemoteStore {
    client: JsValue,
}

impl JsRemoteStore {
    pub fn from_window(global: &str) -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("window not available".into()))?;
        let client = Reflect::get(&window, &JsValue::from_str(global))
            .map_err(|_| StoreError::Unavailable(format!("failed to access {global}")))?;
        if client.is_undefined() || client.is_null() {
            return Err(StoreError::Unavailable(format!("{global} is not defined")));
        }
        Ok(Self { client })
    }

    pub fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> LocalBoxFuture<'static, Result<(), StoreError>> {
        let request = serde_json::json!({ "email": email, "password": password })
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| StoreError::Decode(e.to_string()))
            .and_then(|args| call_method(&self.client, "signInWithPassword", &[args]));

        async move {
            let value = settle(request?, "signInWithPassword").await?;
            match error_message(&value) {
                Some(message) => Err(StoreError::Rejected(message)),
                None => Ok(()),
            }
        }
        .boxed_local()
    }
}

impl RemoteStore for JsRemoteStore {
    fn get_session(&self) -> LocalBoxFuture<'static, Result<Option<Identity>, StoreError>> {
        let request = call_method(&self.client, "getSession", &[]);
        async move {
            let value = settle(request?, "getSession").await?;
            decode_identity(value)
        }
        .boxed_local()
    }

    fn on_auth_state_change(&self, callback: AuthCallback) -> Result<StoreSubscription, StoreError> {
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |session: JsValue| {
            match decode_identity(session) {
                Ok(identity) => callback(identity),
                Err(err) => {
                    log::warn!("undecodable auth event, treating as signed out: {err}");
                    callback(None);
                }
            }
        });

        let handle = call_method(
            &self.client,
            "onAuthStateChange",
            &[listener.as_ref().clone()],
        )?;
        let subscription = Reflect::get(&handle, &JsValue::from_str("subscription"))
            .unwrap_or(JsValue::UNDEFINED);

        Ok(StoreSubscription::new(move || {
            if let Err(err) = call_method(&subscription, "unsubscribe", &[]) {
                log::warn!("auth unsubscribe failed: {err}");
            }
            drop(listener);
        }))
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), StoreError>> {
        let request = call_method(&self.client, "signOut", &[]);
        async move {
            let value = settle(request?, "signOut").await?;
            match error_message(&value) {
                Some(message) => Err(StoreError::Rejected(message)),
                None => Ok(()),
            }
        }
        .boxed_local()
    }
}

fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, StoreError> {
    if target.is_undefined() || target.is_null() {
        return Err(StoreError::Unavailable(format!("no target for {name}")));
    }
    let method = Reflect::get(target, &JsValue::from_str(name))
        .map_err(|_| StoreError::Unavailable(format!("failed to access {name}")))?;
    if !method.is_function() {
        return Err(StoreError::Unavailable(format!("{name} is not a function")));
    }

    let args: Array = args.iter().collect();
    method
        .unchecked_into::<Function>()
        .apply(target, &args)
        .map_err(|e| StoreError::Rejected(format!("{name} threw: {e:?}")))
}

async fn settle(value: JsValue, name: &str) -> Result<JsValue, StoreError> {
    if !value.is_instance_of::<Promise>() {
        return Ok(value);
    }
    JsFuture::from(Promise::from(value))
        .await
        .map_err(|e| StoreError::Rejected(format!("{name} rejected: {e:?}")))
}

fn decode_identity(value: JsValue) -> Result<Option<Identity>, StoreError> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| StoreError::Decode(e.to_string()))
}

/// Reads `{ error: { message } }` or `{ error: "..." }` from a settled result.
fn error_message(value: &JsValue) -> Option<String> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let error = Reflect::get(value, &JsValue::from_str("error")).ok()?;
    if error.is_undefined() || error.is_null() {
        return None;
    }
    if let Some(text) = error.as_string() {
        return Some(text);
    }
    Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| Some(format!("{error:?}")))
}
