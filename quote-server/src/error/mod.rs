use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream API returned status: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing expected currency key: {0}")]
    MissingCurrencyKey(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("persistence deadline exceeded after {0}ms")]
    PersistDeadline(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

// The quote contract keeps error text free-form: any handler failure becomes
// a 500 carrying the error's display string.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        let body = Json(ErrorResponse {
            error_message: self.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
