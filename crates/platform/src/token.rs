//! Opaque Token Generation
//!
//! URL-safe random tokens sourced from the operating system RNG.

use base64::Engine;
use rand::RngCore;
use rand::rngs::OsRng;

/// Default token entropy in bytes
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Generate a URL-safe opaque token with `len` bytes of entropy.
///
/// The token is base64url-encoded without padding, so it is safe to embed
/// in links and path segments.
pub fn generate(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&bytes)
}

/// Generate a token with the default entropy.
pub fn generate_default() -> String {
    generate(DEFAULT_TOKEN_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_length() {
        // 32 bytes -> 43 base64url chars without padding
        let token = generate_default();
        assert_eq!(token.len(), 43);
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = generate_default();
        let b = generate_default();
        assert_ne!(a, b);
    }

    #[test]
    fn test_url_safe_alphabet() {
        let token = generate(64);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
