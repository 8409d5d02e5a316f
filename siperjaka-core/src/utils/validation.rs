//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names, positions, unit names
pub const MAX_NAME_LEN: usize = 200;

/// Document numbers (agreement, SK, SPMT)
pub const MAX_NUMBER_LEN: usize = 100;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// NIP: fixed-length national identifier
pub const NIP_LEN: usize = 18;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate an NIP: exactly 18 ASCII digits.
///
/// The NIP doubles as a login credential on the calling surface, so a
/// malformed or colliding value is rejected before it reaches the store.
pub fn validate_nip(nip: &str) -> Result<(), AppError> {
    if nip.len() != NIP_LEN || !nip.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(format!(
            "nip must be exactly {NIP_LEN} digits"
        ))
        .with_detail("field", "nip"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Budi", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("  ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "address", MAX_ADDRESS_LEN).is_ok());
        assert!(
            validate_optional_text(&Some("Jl. Sultan Fatah".to_string()), "address", MAX_ADDRESS_LEN)
                .is_ok()
        );

        let long = Some("x".repeat(MAX_ADDRESS_LEN + 1));
        assert!(validate_optional_text(&long, "address", MAX_ADDRESS_LEN).is_err());
    }

    #[test]
    fn test_nip() {
        assert!(validate_nip("198501012022011001").is_ok());
        assert!(validate_nip("19850101202201100").is_err()); // 17 digits
        assert!(validate_nip("1985010120220110012").is_err()); // 19 digits
        assert!(validate_nip("19850101202201100x").is_err()); // non-digit
    }
}
