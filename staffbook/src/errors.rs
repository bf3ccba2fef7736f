//! # Error Handling for the Employee API
//!
//! Every failure leaves the service as an [`ApiError`], which becomes an HTTP
//! response with a uniform JSON body:
//!
//! ```json
//! {
//!   "status": "error",
//!   "message": "Validation failed.",
//!   "traceId": "6f1c0d3e-...",
//!   "errors": { "email": ["The email address is not in a valid format."] }
//! }
//! ```
//!
//! **Never expose internal errors to users**. Database errors are logged
//! server-side with the response's trace id and replaced with a generic message.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use staffbook::errors::ApiError;
//!
//! async fn find(id: i32) -> Result<Json<Employee>, ApiError> {
//!     let employee = Entity::find_by_id(id)
//!         .one(db)
//!         .await?
//!         .ok_or_else(|| ApiError::not_found("Employee", Some(id.to_string())))?;
//!     Ok(Json(employee))
//! }
//! ```

use crate::validation::ValidationErrors;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Messages per offending field (or `body` for unreadable requests).
pub type FieldErrors = BTreeMap<String, Vec<String>>;

const SERVER_ERROR_MESSAGE: &str = "Unexpected server error.";

/// API error type with automatic logging and sanitized responses
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found - Resource doesn't exist
    NotFound {
        /// Resource type (e.g., "Employee")
        resource: String,
        /// Key that wasn't found
        id: Option<String>,
    },

    /// 400 Bad Request - Request cannot be applied as sent
    BadRequest {
        message: String,
        errors: Option<FieldErrors>,
    },

    /// 409 Conflict - Unique value already taken
    Conflict {
        message: String,
        errors: FieldErrors,
    },

    /// 400 Bad Request - Payload failed validation
    ValidationFailed { errors: ValidationErrors },

    /// 500 Internal Server Error - Database error (details logged, not exposed)
    Database { internal: DbErr },

    /// 500 Internal Server Error - Anything else (details logged, not exposed)
    Internal { internal: Option<String> },
}

impl ApiError {
    /// Create a 404 Not Found error
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Create a 400 Bad Request error
    ///
    /// # Example
    /// ```rust,ignore
    /// return Err(ApiError::bad_request("Route id and body id do not match."));
    /// ```
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            errors: None,
        }
    }

    /// 400 for a body that could not be read as JSON. The parser's message is
    /// logged at debug level only.
    pub fn malformed_body(details: impl fmt::Display) -> Self {
        tracing::debug!(details = %details, "Rejected malformed request body");
        Self::BadRequest {
            message: "Malformed JSON.".to_string(),
            errors: Some(single_error("body", "Malformed JSON.")),
        }
    }

    /// 400 for a request that never reached deserialization (wrong content
    /// type, unreadable body). `details` is returned under `errors.request`.
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::BadRequest {
            message: "Invalid request.".to_string(),
            errors: Some(single_error("request", details)),
        }
    }

    /// Create a 409 Conflict error naming the field whose value is taken
    ///
    /// # Example
    /// ```rust,ignore
    /// return Err(ApiError::conflict("email", "Email already exists."));
    /// ```
    pub fn conflict(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Conflict {
            errors: single_error(field, message.clone()),
            message,
        }
    }

    /// Create a 400 Validation Failed error
    #[must_use]
    pub fn validation_failed(errors: ValidationErrors) -> Self {
        Self::ValidationFailed { errors }
    }

    /// Create a 500 Internal Server Error from a database error
    ///
    /// The database error details are logged but NOT sent to the user.
    #[must_use]
    pub fn database(err: DbErr) -> Self {
        Self::Database { internal: err }
    }

    /// Create a 500 Internal Server Error with optional details
    pub fn internal(internal: Option<String>) -> Self {
        Self::Internal { internal }
    }

    /// 500 for a handler that panicked. The panic message is logged, never returned.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let details = payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()));
        Self::internal(details)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } | Self::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message (sanitized)
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => match id {
                Some(id) => format!("{resource} with key '{id}' was not found."),
                None => format!("{resource} was not found."),
            },
            Self::BadRequest { message, .. } | Self::Conflict { message, .. } => message.clone(),
            Self::ValidationFailed { .. } => "Validation failed.".to_string(),
            Self::Database { .. } | Self::Internal { .. } => SERVER_ERROR_MESSAGE.to_string(),
        }
    }

    /// Per-field messages included in the response, if any
    #[must_use]
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            Self::BadRequest { errors, .. } => errors.clone(),
            Self::Conflict { errors, .. } => Some(errors.clone()),
            Self::ValidationFailed { errors } => Some(errors.by_field()),
            _ => None,
        }
    }

    /// Log internal error details (not sent to user)
    fn log_internal(&self, trace_id: Uuid) {
        match self {
            Self::Database { internal } => {
                tracing::error!(
                    trace_id = %trace_id,
                    error = ?internal,
                    "Database error occurred"
                );
            }
            Self::Internal { internal } => {
                tracing::error!(
                    trace_id = %trace_id,
                    details = internal.as_deref().unwrap_or("none"),
                    "Internal error occurred"
                );
            }
            _ => {
                tracing::debug!(
                    trace_id = %trace_id,
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

fn single_error(field: impl Into<String>, message: impl Into<String>) -> FieldErrors {
    BTreeMap::from([(field.into(), vec![message.into()])])
}

/// Error response sent to users (sanitized)
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `"error"`
    pub status: String,
    pub message: String,
    /// Correlates the response with server logs
    pub trace_id: Uuid,
    pub errors: Option<FieldErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let trace_id = Uuid::new_v4();
        self.log_internal(trace_id);

        let response = ErrorResponse {
            status: "error".to_string(),
            message: self.user_message(),
            trace_id,
            errors: self.field_errors(),
        };

        (self.status_code(), Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database { internal } => Some(internal),
            Self::ValidationFailed { errors } => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::validation_failed(errors)
    }
}

/// Convert `SeaORM` `DbErr` to `ApiError`
///
/// **Conversion Rules:**
/// - `DbErr::RecordNotFound` → 404 Not Found
/// - unique constraint violation → 409 Conflict without field details; callers
///   that know which column is unique should use [`ApiError::conflict`]
/// - All other `DbErr` variants → 500 Internal Server Error (logged internally, sanitized for users)
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(msg) = &err {
            let resource = msg.split_whitespace().next().unwrap_or("Resource");
            return Self::not_found(resource, None);
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!(detail = %detail, "Unique constraint violation");
                Self::Conflict {
                    message: "Resource already exists.".to_string(),
                    errors: FieldErrors::new(),
                }
            }
            _ => Self::database(err),
        }
    }
}
