//! Secure Random Generation
//!
//! All randomness comes from the operating system's CSPRNG via
//! `rand::rngs::OsRng`; nothing here is seeded or reproducible.

use rand::rngs::OsRng;
use rand::RngCore;

const ALPHANUMERIC: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const DEFAULT_RANDOM_STRING_LEN: usize = 32;

/// Fill a fresh buffer with `len` bytes of OS entropy.
pub fn secure_random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// `byte_len` random bytes as lowercase hex (`2 * byte_len` characters).
pub fn random_hex(byte_len: usize) -> String {
    hex::encode(secure_random_bytes(byte_len))
}

/// A random string of `length` characters from the 62-char alphanumeric
/// alphabet.
///
/// Characters are drawn by reducing each random byte modulo the alphabet
/// size; the resulting slight non-uniformity (256 is not a multiple of 62)
/// is accepted for this alphabet.
pub fn generate_secure_random_string(length: usize) -> String {
    secure_random_bytes(length)
        .into_iter()
        .map(|b| ALPHANUMERIC[b as usize % ALPHANUMERIC.len()] as char)
        .collect()
}
