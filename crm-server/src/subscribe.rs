use crate::email::{EmailSender, OutgoingEmail};
use crate::error::ApiError;
use crate::store::{Subscriber, SubscriberLog};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

const MAX_EMAIL_LEN: usize = 254;
const DEFAULT_SOURCE: &str = "website";

#[derive(Clone)]
pub struct AppState {
    pub subscribers: SubscriberLog,
    pub mailer: Arc<dyn EmailSender>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubscribeRequest {
    pub email: String,
    pub source: String,
}

pub fn subscribe_router(state: AppState) -> Router {
    Router::new()
        .route("/api/subscribe", post(handle_subscribe))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

pub fn parse_subscription(payload: &serde_json::Value) -> Result<SubscribeRequest, String> {
    let email = payload
        .get("email")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| "email is required".to_string())?;
    let email = validate_email(email)?;

    let source = payload
        .get("source")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SOURCE)
        .to_string();

    Ok(SubscribeRequest { email, source })
}

/// Returns the normalized (trimmed, lowercased) address.
pub fn validate_email(raw: &str) -> Result<String, String> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err("email is required".into());
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err("email is too long".into());
    }
    if email.chars().any(char::is_whitespace) {
        return Err(format!("invalid email '{email}'"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(format!("invalid email '{email}'"));
    };
    let domain_ok = domain.contains('.')
        && !domain.contains('@')
        && domain.split('.').all(|label| !label.is_empty());
    if local.is_empty() || !domain_ok {
        return Err(format!("invalid email '{email}'"));
    }

    Ok(email)
}

async fn handle_subscribe(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let request = parse_subscription(&payload).map_err(ApiError::BadRequest)?;

    let subscriber = Subscriber {
        id: None,
        email: request.email.clone(),
        source: request.source,
        subscribed_at: current_timestamp(),
    };
    let log = state.subscribers.clone();
    let id = tokio::task::spawn_blocking(move || log.insert(&subscriber))
        .await
        .map_err(|e| ApiError::Task(e.to_string()))??;

    state
        .mailer
        .send(&OutgoingEmail::welcome(&request.email))
        .await?;

    tracing::info!(subscriber_id = id, "subscription recorded");
    Ok(Json(serde_json::json!({ "success": true })))
}

fn current_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return "0".into();
    };
    duration.as_secs().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_email() {
        let request =
            parse_subscription(&serde_json::json!({ "email": "  Buyer@Example.COM " }))
                .expect("parse");
        assert_eq!(request.email, "buyer@example.com");
        assert_eq!(request.source, DEFAULT_SOURCE);

        let request = parse_subscription(&serde_json::json!({
            "email": "buyer@example.com",
            "source": "pricing-page"
        }))
        .expect("parse");
        assert_eq!(request.source, "pricing-page");
    }

    #[test]
    fn rejects_missing_or_malformed_email() {
        for payload in [
            serde_json::json!({}),
            serde_json::json!({ "email": 42 }),
            serde_json::json!({ "email": "" }),
            serde_json::json!({ "email": "no-at-sign" }),
            serde_json::json!({ "email": "a@b" }),
            serde_json::json!({ "email": "@example.com" }),
            serde_json::json!({ "email": "a@@example.com" }),
            serde_json::json!({ "email": "a b@example.com" }),
            serde_json::json!({ "email": "a@example..com" }),
        ] {
            assert!(parse_subscription(&payload).is_err(), "accepted {payload}");
        }
    }

    #[test]
    fn rejects_overlong_email() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert_eq!(validate_email(&email), Err("email is too long".to_string()));
    }
}
