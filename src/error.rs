use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// A form field that could not be coerced into its typed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid field {0}")]
    Validation(#[from] ValidationError),

    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("malformed form data: {0}")]
    Multipart(#[from] MultipartError),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    /// Maps a unique-constraint violation to `DuplicateKey`, anything else to `Database`.
    pub fn from_insert(err: sqlx::Error, what: impl FnOnce() -> String) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateKey(what())
            }
            _ => AppError::Database(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::Multipart(e) => e.status(),
            AppError::Io(_) | AppError::Database(_) | AppError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server faults are logged in full but never echoed back
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
            "Internal server error".to_string()
        } else {
            tracing::warn!("Request rejected: {}", self);
            self.to_string()
        };

        (status, message).into_response()
    }
}
