//! Normalization and validation helpers shared by domain entities.
//!
//! Values coming from request payloads or CSV rows pass through these
//! functions once, so the rest of the crate can treat them as trusted.

use phonenumber::{Mode, parse};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when a raw value fails domain validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Normalizes and validates an email string (trimmed, lower-cased).
pub fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

/// Trims a string and rejects empty inputs.
pub fn non_empty(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    Ok(trimmed.to_string())
}

/// Trims an optional string, dropping it entirely when empty.
pub fn trimmed_opt(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Sanitizes free-form text (notes, terms, descriptions) and drops empties.
pub fn sanitized_opt(value: Option<String>) -> Option<String> {
    value
        .map(|s| ammonia::clean(s.trim()))
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_lowercases_and_trims() {
        assert_eq!(
            normalize_email("  Sales@Example.COM "),
            Ok("sales@example.com".to_string())
        );
        assert_eq!(
            normalize_email("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn normalize_phone_produces_e164() {
        assert_eq!(
            normalize_phone_to_e164("+1 (415) 555-2671"),
            Ok("+14155552671".to_string())
        );
        assert_eq!(
            normalize_phone_to_e164("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn trimmed_opt_drops_blank_values() {
        assert_eq!(trimmed_opt(Some("  ".to_string())), None);
        assert_eq!(trimmed_opt(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(trimmed_opt(None), None);
    }
}
