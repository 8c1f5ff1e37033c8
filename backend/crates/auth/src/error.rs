//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required request field is missing or malformed.
    /// The message is the field-specific text the client displays.
    #[error("{0}")]
    Validation(String),

    /// Wrong email or password. One uniform message for missing input,
    /// unknown email, and password mismatch, so the response never
    /// reveals whether an account exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, forged, or expired access token
    #[error("Invalid or expired token")]
    TokenInvalid,

    /// Caller is authenticated but not an admin
    #[error("UnAuthorized Access")]
    AdminRequired,

    /// Password reset lookup found no matching email + answer pair
    #[error("Wrong Email Or Answer")]
    WrongEmailOrAnswer,

    /// Referenced record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::TokenInvalid
            | AuthError::AdminRequired => StatusCode::UNAUTHORIZED,
            AuthError::WrongEmailOrAnswer | AuthError::NotFound(_) => StatusCode::NOT_FOUND,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::TokenInvalid
            | AuthError::AdminRequired => ErrorKind::Unauthorized,
            AuthError::WrongEmailOrAnswer | AuthError::NotFound(_) => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // Internal detail never reaches the response body
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "Something went wrong")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid => {
                tracing::warn!("Request with missing or invalid access token");
            }
            AuthError::AdminRequired => {
                tracing::warn!("Admin route denied");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
