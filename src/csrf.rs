//! Stateless CSRF Tokens
//!
//! Tokens are `"<issued-at-millis>-<64 hex chars from 32 random bytes>"`.
//! Nothing is stored server-side: validity derives entirely from the token
//! content plus a caller-supplied max age, so any process can validate a
//! token any other process minted.

use chrono::Utc;
use regex::Regex;
use std::sync::OnceLock;

use crate::random::random_hex;

/// Default token lifetime: one hour.
pub const DEFAULT_TOKEN_MAX_AGE_MILLIS: i64 = 3_600_000;

/// Number of random bytes behind the 64-char hex segment.
const TOKEN_RANDOM_BYTES: usize = 32;

static TOKEN_HEX_REGEX: OnceLock<Regex> = OnceLock::new();

/// Mint a new CSRF token bound to the current time.
pub fn generate_csrf_token() -> String {
    let issued_at = Utc::now().timestamp_millis();
    format!("{}-{}", issued_at, random_hex(TOKEN_RANDOM_BYTES))
}

/// Validate a CSRF token against a max age in milliseconds.
///
/// Accepts only the exact two-part shape: a decimal timestamp, one `-`, and
/// 64 lowercase hex characters. Returns false for any malformation, parse
/// failure, or a token older than `max_age_millis`. Never panics — malformed
/// input is simply the denied outcome.
pub fn validate_csrf_token(token: &str, max_age_millis: i64) -> bool {
    let hex_re = TOKEN_HEX_REGEX.get_or_init(|| Regex::new(r"^[a-f0-9]{64}$").unwrap());

    let (timestamp, signature) = match token.split_once('-') {
        Some(parts) => parts,
        None => return false,
    };

    // A third segment would land inside `signature` and fail the hex gate
    if !hex_re.is_match(signature) {
        return false;
    }

    let issued_at = match timestamp.parse::<i64>() {
        Ok(millis) => millis,
        Err(_) => return false,
    };

    let age = Utc::now().timestamp_millis() - issued_at;
    age <= max_age_millis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_issued_at(millis: i64) -> String {
        format!("{}-{}", millis, "ab".repeat(32))
    }

    #[test]
    fn test_fresh_token_validates() {
        let token = generate_csrf_token();
        assert!(validate_csrf_token(&token, DEFAULT_TOKEN_MAX_AGE_MILLIS));
    }

    #[test]
    fn test_token_shape() {
        let token = generate_csrf_token();
        let (timestamp, signature) = token.split_once('-').expect("two-part token");
        assert!(timestamp.parse::<i64>().is_ok());
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_expired_token_rejected() {
        let stale = token_issued_at(Utc::now().timestamp_millis() - 10_000);
        assert!(!validate_csrf_token(&stale, 5_000));
        assert!(validate_csrf_token(&stale, 60_000));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let now = Utc::now().timestamp_millis();
        assert!(!validate_csrf_token("", DEFAULT_TOKEN_MAX_AGE_MILLIS));
        assert!(!validate_csrf_token("no-hyphen-hex", DEFAULT_TOKEN_MAX_AGE_MILLIS));
        // Missing hex segment
        assert!(!validate_csrf_token(&format!("{}-", now), DEFAULT_TOKEN_MAX_AGE_MILLIS));
        // Hex segment too short
        assert!(!validate_csrf_token(
            &format!("{}-{}", now, "ab".repeat(16)),
            DEFAULT_TOKEN_MAX_AGE_MILLIS
        ));
        // Uppercase hex is not the minted form
        assert!(!validate_csrf_token(
            &format!("{}-{}", now, "AB".repeat(32)),
            DEFAULT_TOKEN_MAX_AGE_MILLIS
        ));
        // Non-numeric timestamp
        assert!(!validate_csrf_token(
            &format!("soon-{}", "ab".repeat(32)),
            DEFAULT_TOKEN_MAX_AGE_MILLIS
        ));
    }

    #[test]
    fn test_extra_segment_rejected() {
        let now = Utc::now().timestamp_millis();
        let token = format!("{}-{}-{}", now, "ab".repeat(32), "cd".repeat(32));
        assert!(!validate_csrf_token(&token, DEFAULT_TOKEN_MAX_AGE_MILLIS));
    }
}
