//! Unified error codes for SIPERJAKA
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 3xxx: Employee record errors
//! - 4xxx: Workflow errors
//! - 5xxx: Document errors
//! - 8xxx: Persistence errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with any calling surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Employee record ====================
    /// Employee record not found
    EmployeeNotFound = 3001,
    /// NIP already registered to another record
    NipExists = 3002,

    // ==================== 4xxx: Workflow ====================
    /// Status transition not permitted from the current status/role
    IllegalTransition = 4001,
    /// Record left pending and is read-only to the employee
    RecordReadOnly = 4002,

    // ==================== 5xxx: Document ====================
    /// Document requires an approved record
    RenderingUnavailable = 5001,

    // ==================== 8xxx: Persistence ====================
    /// The external record store rejected the operation
    PersistenceFailed = 8001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the error category for this code
    #[inline]
    pub const fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Employee record
            ErrorCode::EmployeeNotFound => "Employee record not found",
            ErrorCode::NipExists => "NIP already registered to another record",

            // Workflow
            ErrorCode::IllegalTransition => "Status transition is not permitted",
            ErrorCode::RecordReadOnly => "Record is read-only for this role",

            // Document
            ErrorCode::RenderingUnavailable => "Document requires an approved record",

            // Persistence
            ErrorCode::PersistenceFailed => "Record store rejected the operation",

            // System
            ErrorCode::InternalError => "Internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),

            // Employee record
            3001 => Ok(ErrorCode::EmployeeNotFound),
            3002 => Ok(ErrorCode::NipExists),

            // Workflow
            4001 => Ok(ErrorCode::IllegalTransition),
            4002 => Ok(ErrorCode::RecordReadOnly),

            // Document
            5001 => Ok(ErrorCode::RenderingUnavailable),

            // Persistence
            8001 => Ok(ErrorCode::PersistenceFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error category classification based on error code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Permission errors (2xxx)
    Permission,
    /// Employee record errors (3xxx)
    Employee,
    /// Workflow errors (4xxx)
    Workflow,
    /// Document errors (5xxx)
    Document,
    /// Persistence errors (8xxx)
    Persistence,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub const fn from_code(code: u16) -> Self {
        match code {
            0..2000 => Self::General,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Employee,
            4000..5000 => Self::Workflow,
            5000..6000 => Self::Document,
            8000..9000 => Self::Persistence,
            _ => Self::System,
        }
    }

    /// Short label used in log fields
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Permission => "permission",
            Self::Employee => "employee",
            Self::Workflow => "workflow",
            Self::Document => "document",
            Self::Persistence => "persistence",
            Self::System => "system",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::IllegalTransition.code(), 4001);
        assert_eq!(ErrorCode::RenderingUnavailable.code(), 5001);
        assert_eq!(ErrorCode::PersistenceFailed.code(), 8001);
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::IllegalTransition), "4001");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(
            ErrorCode::IllegalTransition.message(),
            "Status transition is not permitted"
        );
    }

    #[test]
    fn test_category() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::AdminRequired.category(), ErrorCategory::Permission);
        assert_eq!(ErrorCode::NipExists.category(), ErrorCategory::Employee);
        assert_eq!(ErrorCode::IllegalTransition.category(), ErrorCategory::Workflow);
        assert_eq!(
            ErrorCode::RenderingUnavailable.category(),
            ErrorCategory::Document
        );
        assert_eq!(
            ErrorCode::PersistenceFailed.category(),
            ErrorCategory::Persistence
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::PermissionDenied,
            ErrorCode::IllegalTransition,
            ErrorCode::RenderingUnavailable,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }
}
