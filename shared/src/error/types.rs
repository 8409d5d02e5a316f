//! Error type and result alias

use super::codes::{ErrorCategory, ErrorCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The primary error type for SIPERJAKA:
/// - standardized error codes via [`ErrorCode`]
/// - human-readable messages
/// - optional structured details (field name, current status, attempted status)
///
/// Details never carry persistence-layer internals; the store layer folds its
/// backend text under a `cause` key on a generic persistence message.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

/// Result alias used across all SIPERJAKA crates
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required-field error
    pub fn required_field(field: impl Into<String>) -> Self {
        let f = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", f))
            .with_detail("field", f)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an employee-record-not-found error
    pub fn employee_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmployeeNotFound).with_detail("id", id.into())
    }

    /// Create a duplicate-NIP error
    pub fn nip_exists(nip: impl Into<String>) -> Self {
        Self::new(ErrorCode::NipExists).with_detail("nip", nip.into())
    }

    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }

    /// Create an admin-role-required error
    pub fn admin_required() -> Self {
        Self::new(ErrorCode::AdminRequired)
    }

    /// Create an illegal-transition error
    pub fn illegal_transition(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::IllegalTransition, msg)
    }

    /// Create a rendering-unavailable error
    pub fn rendering_unavailable(document: impl Into<String>) -> Self {
        let d = document.into();
        Self::with_message(
            ErrorCode::RenderingUnavailable,
            format!("{} requires an approved record", d),
        )
        .with_detail("document", d)
    }

    /// Create a persistence error
    pub fn persistence(cause: impl Into<String>) -> Self {
        Self::new(ErrorCode::PersistenceFailed).with_detail("cause", cause.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}
