use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("failed to store subscription: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("failed to send email: {0}")]
    Email(#[from] EmailError),
    #[error("background task failed: {0}")]
    Task(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Email(_) | ApiError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "subscribe request failed");
        } else {
            tracing::debug!(error = %self, "subscribe request rejected");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("email api request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email api responded {status}: {body}")]
    Rejected { status: u16, body: String },
}
