//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits match the public booking form fields; SurrealDB strings
//! carry no built-in length enforcement.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Visitor names on bookings and feedback
pub const MAX_NAME_LEN: usize = 100;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 15;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Free text: feedback experience, selected food items
pub const MAX_TEXT_LEN: usize = 2000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
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
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_text_is_rejected() {
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn overlong_text_is_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&Some(long), "email", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn normal_text_passes() {
        assert!(validate_required_text("Aditi", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_optional_text(&None, "email", MAX_EMAIL_LEN).is_ok());
    }
}
