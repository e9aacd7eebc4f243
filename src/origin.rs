//! Request Origin Allowlisting

/// Check a request origin against an allowlist by exact match.
///
/// A single trailing slash is stripped from both the candidate and each
/// allowed entry before comparison; nothing else is normalized. An empty
/// candidate is always denied. Never fails.
pub fn validate_origin(origin: &str, allowed_origins: &[String]) -> bool {
    if origin.is_empty() {
        return false;
    }

    let candidate = strip_trailing_slash(origin);
    allowed_origins
        .iter()
        .any(|allowed| strip_trailing_slash(allowed) == candidate)
}

fn strip_trailing_slash(origin: &str) -> &str {
    origin.strip_suffix('/').unwrap_or(origin)
}
