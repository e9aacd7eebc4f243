//! Input sanitization and request-security toolkit for community web
//! applications.
//!
//! Three tiers of defense, distinguished by how they fail:
//!
//! - **Scrubbers** ([`sanitize`]) are total: they always return a cleaned
//!   string.
//! - **Fail-closed validators** ([`validate`]) reject non-conforming input
//!   with [`ValidationError`].
//! - **Boolean checkers** ([`csrf`], [`origin`], [`rate_limit`], [`csp`])
//!   never fail: malformed input is the denied outcome.
//!
//! The only mutable state is the rate-limit table, owned by a
//! [`RateLimiter`] value the caller constructs and shares; everything else
//! is a pure function over its arguments.

pub mod banner;
pub mod config;
pub mod csp;
pub mod csrf;
pub mod error;
pub mod hash;
pub mod logger;
pub mod origin;
pub mod random;
pub mod rate_limit;
pub mod sanitize;
pub mod storage;
pub mod validate;

pub use csp::{scan_content, CspScanResult};
pub use csrf::{generate_csrf_token, validate_csrf_token, DEFAULT_TOKEN_MAX_AGE_MILLIS};
pub use error::ValidationError;
pub use hash::hash_data;
pub use origin::validate_origin;
pub use random::{generate_secure_random_string, DEFAULT_RANDOM_STRING_LEN};
pub use rate_limit::{RateLimitConfig, RateLimiter};
pub use sanitize::{sanitize_html, sanitize_query_param, sanitize_text};
pub use storage::{MemoryStore, SecureStorage, StorageBackend, StorageError};
pub use validate::{sanitize_email, sanitize_phone, sanitize_zip_code};
