use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("All fields are required")]
    MissingFields,

    #[error("Vlog {0} not found")]
    NotFound(String),

    #[error("Counter of vlog {0} is out of range")]
    CounterOverflow(String),

    #[error("Stored vlog {0} is corrupt")]
    CorruptRecord(String),

    #[error("Invalid {key} value: {reason}")]
    Config { key: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] redis::RedisError),

    #[error("Mock data error: {0}")]
    MockData(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload | AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::CounterOverflow { .. }
            | AppError::CorruptRecord { .. }
            | AppError::Config { .. }
            | AppError::Database { .. }
            | AppError::MockData { .. }
            | AppError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("{self}");
        }

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
