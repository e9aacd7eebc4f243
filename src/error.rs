use thiserror::Error;

/// Errors raised by the fail-closed validators.
///
/// The boolean checkers (CSRF, origin, rate limit, CSP) never produce these;
/// malformed input there simply evaluates to the denied outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Non-empty input did not conform to the expected shape for `field`.
    #[error("{field} does not match the expected format")]
    InvalidFormat { field: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidFormat { field } => field,
        }
    }
}
