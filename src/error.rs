//!
//! # Custom Error Handling
//!
//! This module defines the `AppError` type used throughout the application.
//! Every failure a request can hit (a missing user, a duplicate username,
//! a task owned by somebody else, invalid input, a database fault) is one
//! of its variants, and `actix_web::error::ResponseError` turns each into
//! the matching HTTP response with a `{"message": ...}` JSON body.
//!
//! `From` implementations for `sqlx::Error`, `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error`, and `bcrypt::BcryptError` let handlers and
//! services propagate lower-level failures with the `?` operator.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// All failures the application surfaces to callers.
///
/// The domain error kinds (`UserNotFound`, `DuplicateUsername`,
/// `TaskNotFound`, `NotOwner`, `Validation`) are request-local and map to
/// HTTP 400; `Unauthorized` maps to 401; store and hashing faults map to 500.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid credentials / token (HTTP 401).
    Unauthorized(String),
    /// The acting user's username does not resolve to a stored user.
    UserNotFound(String),
    /// Registration attempted with a username that is already taken.
    DuplicateUsername(String),
    /// Task lookup by id found nothing.
    TaskNotFound(String),
    /// The acting user is not the owner of the targeted task.
    NotOwner(String),
    /// Input validation failed; the message names the offending field(s),
    /// one message per line.
    Validation(String),
    /// Database fault (HTTP 500). Wraps `sqlx` errors.
    Database(String),
    /// Unexpected server-side fault (HTTP 500), e.g. hashing failure.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::UserNotFound(msg) => write!(f, "User Not Found: {}", msg),
            AppError::DuplicateUsername(msg) => write!(f, "Duplicate Username: {}", msg),
            AppError::TaskNotFound(msg) => write!(f, "Task Not Found: {}", msg),
            AppError::NotOwner(msg) => write!(f, "Not Owner: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl AppError {
    fn message(&self) -> &str {
        match self {
            AppError::Unauthorized(msg)
            | AppError::UserNotFound(msg)
            | AppError::DuplicateUsername(msg)
            | AppError::TaskNotFound(msg)
            | AppError::NotOwner(msg)
            | AppError::Validation(msg)
            | AppError::Database(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

/// Converts `AppError` variants into HTTP responses.
///
/// Every body has the same shape: `{"message": <human-readable text>}`.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound(_)
            | AppError::DuplicateUsername(_)
            | AppError::TaskNotFound(_)
            | AppError::NotOwner(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.message()
        }))
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// A unique-constraint violation becomes `DuplicateUsername`:
/// `users.username` carries the only unique constraint in the schema, and
/// the constraint is what enforces uniqueness under concurrent
/// registration. Everything else is a `Database` fault.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        if let sqlx::Error::Database(db_error) = &error {
            if db_error.is_unique_violation() {
                return AppError::DuplicateUsername("Username is already taken".into());
            }
        }
        AppError::Database(error.to_string())
    }
}

/// Converts `validator::ValidationErrors` into `AppError::Validation`.
///
/// Field error messages are joined by newline, so a payload violating
/// several constraints reports all of them in one response.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> AppError {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect::<Vec<_>>()
            .join("\n");
        AppError::Validation(message)
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Unauthorized`.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(error.to_string())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::Internal`.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
