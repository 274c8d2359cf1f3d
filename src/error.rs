//! Error types for the front desk server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable numeric codes reported to front desk clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    DbFailure = 3,
    BadValue = 18,
    NoSuchVisitor = 20,
    InvalidVisitDate = 22,
    MailFailure = 23,
    Unreachable = 24,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid visit date! Expected: {expected}.")]
    DateMismatch { expected: String },

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Sending error: {0}")]
    Transport(String),

    #[error("Unreachable: {0}")]
    Unreachable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                AppError::Unreachable(format!("database: {}", e))
            }
            // Ledger rows referencing an unknown identifier
            sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23503") => {
                AppError::NotFound("QR code not found in the system".to_string())
            }
            e => AppError::Database(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Visit date the token is valid for (date mismatch only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_visit_date: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut expected_visit_date = None;
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchVisitor, msg.clone()),
            AppError::DateMismatch { expected } => {
                expected_visit_date = Some(expected.clone());
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorCode::InvalidVisitDate,
                    self.to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Transport(msg) => {
                tracing::warn!("Mail transport error: {}", msg);
                (StatusCode::BAD_GATEWAY, ErrorCode::MailFailure, self.to_string())
            }
            AppError::Unreachable(msg) => {
                tracing::error!("Backend unreachable: {}", msg);
                (StatusCode::GATEWAY_TIMEOUT, ErrorCode::Unreachable, self.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            expected_visit_date,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
