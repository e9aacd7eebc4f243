//! Fail-Closed Field Validators
//!
//! Unlike the scrubbing tier, these reject rather than repair: non-empty
//! input that does not conform after cleaning fails with
//! [`ValidationError::InvalidFormat`], and callers surface a user-facing
//! validation message. Phone and ZIP are optional fields in every caller,
//! so empty input passes through as an empty string.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::ValidationError;
use crate::sanitize::sanitize_text;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static ZIP_REGEX: OnceLock<Regex> = OnceLock::new();

/// Clean and validate an email address.
///
/// Strips angle brackets and quotes (header-injection characters), runs the
/// general text sanitizer, then requires a `local@domain.tld` shape: no
/// whitespace, exactly one `@`, at least one dot in the domain. Returns the
/// address lower-cased and trimmed.
pub fn sanitize_email(email: &str) -> Result<String, ValidationError> {
    let email_re = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

    let stripped: String = email
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\''))
        .collect();
    let cleaned = sanitize_text(&stripped);

    if !email_re.is_match(&cleaned) {
        return Err(ValidationError::InvalidFormat { field: "email" });
    }

    Ok(cleaned.to_lowercase())
}

/// Clean and validate a US phone number.
///
/// Keeps only digits, spaces, hyphens, and parentheses before sanitizing.
/// Empty input is permitted and returns an empty string; anything else must
/// be a 10-digit number with optional parens/separators.
pub fn sanitize_phone(phone: &str) -> Result<String, ValidationError> {
    let phone_re = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^\(?\d{3}\)?[\s-]?\d{3}[\s-]?\d{4}$").unwrap());

    let stripped: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let cleaned = sanitize_text(&stripped);

    if cleaned.is_empty() {
        return Ok(cleaned);
    }
    if !phone_re.is_match(&cleaned) {
        return Err(ValidationError::InvalidFormat { field: "phone" });
    }

    Ok(cleaned)
}

/// Clean and validate a ZIP code (5-digit or ZIP+4).
///
/// Keeps only digits and hyphens before sanitizing. Empty input is permitted
/// and returns an empty string.
pub fn sanitize_zip_code(zip_code: &str) -> Result<String, ValidationError> {
    let zip_re = ZIP_REGEX.get_or_init(|| Regex::new(r"^\d{5}(?:-\d{4})?$").unwrap());

    let stripped: String = zip_code
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let cleaned = sanitize_text(&stripped);

    if cleaned.is_empty() {
        return Ok(cleaned);
    }
    if !zip_re.is_match(&cleaned) {
        return Err(ValidationError::InvalidFormat { field: "zip_code" });
    }

    Ok(cleaned)
}
