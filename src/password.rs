//! bcrypt password digests.
//!
//! Digests are stored as raw bytes in the `password` column. bcrypt keeps
//! its salt inside the digest, so verification only needs the stored value.

use crate::error::Result;

/// Hashes `plaintext` with a fresh salt at the given bcrypt cost.
pub fn hash_password(plaintext: &str, cost: u32) -> Result<Vec<u8>> {
    Ok(bcrypt::hash(plaintext, cost)?.into_bytes())
}

/// Checks `plaintext` against a stored digest.
///
/// Returns `Ok(false)` on mismatch. A digest that is not valid UTF-8 or not
/// a bcrypt string is an error, not a mismatch.
pub fn verify_password(plaintext: &str, digest: &[u8]) -> Result<bool> {
    let digest = std::str::from_utf8(digest)
        .map_err(|_| bcrypt::BcryptError::InvalidHash("digest is not UTF-8".to_string()))?;
    Ok(bcrypt::verify(plaintext, digest)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COST: u32 = 4;

    #[test]
    fn digest_is_not_plaintext() {
        let digest = hash_password("hunter22", COST).unwrap();
        assert_ne!(digest, b"hunter22".to_vec());
        assert_eq!(digest.len(), 60);
    }

    #[test]
    fn verify_matches_only_the_hashed_password() {
        let digest = hash_password("hunter22", COST).unwrap();
        assert!(verify_password("hunter22", &digest).unwrap());
        assert!(!verify_password("hunter22x", &digest).unwrap());
        assert!(!verify_password("", &digest).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("hunter22", COST).unwrap();
        let b = hash_password("hunter22", COST).unwrap();
        assert_ne!(a, b);
        assert!(verify_password("hunter22", &b).unwrap());
    }

    #[test]
    fn garbage_digest_is_an_error() {
        assert!(verify_password("hunter22", b"not-a-bcrypt-digest").is_err());
        assert!(verify_password("hunter22", &[0xff, 0xfe]).is_err());
    }
}
