//! Data Hashing
//!
//! A single digest primitive for equality comparison of sensitive values,
//! e.g. detecting duplicate submissions without retaining the submission
//! itself. Not a password hash — no salt, no work factor — and must never
//! be used as one.

use sha2::{Digest, Sha256};
use tracing::error;

/// SHA-256 of the UTF-8 encoding of `data`, as lowercase hex.
///
/// The digest runs on the blocking pool; the caller suspends only for that
/// computation. A failed worker join (effectively unreachable outside
/// runtime shutdown) logs and yields an empty string rather than
/// propagating.
pub async fn hash_data(data: &str) -> String {
    let owned = data.to_owned();
    let digest =
        tokio::task::spawn_blocking(move || format!("{:x}", Sha256::digest(owned.as_bytes())));

    match digest.await {
        Ok(hex) => hex,
        Err(e) => {
            error!("SEC: hash worker failed: {}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_vector() {
        assert_eq!(
            hash_data("hello").await,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[tokio::test]
    async fn test_empty_input() {
        assert_eq!(
            hash_data("").await,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[tokio::test]
    async fn test_equal_inputs_equal_digests() {
        let a = hash_data("duplicate submission").await;
        let b = hash_data("duplicate submission").await;
        assert_eq!(a, b);
        assert_ne!(a, hash_data("different submission").await);
    }
}
