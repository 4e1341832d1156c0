// Password hashing and verification service

use crate::auth::error::AuthError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Password service for hashing and verification
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using Argon2id with a random salt
    ///
    /// Returns a PHC string (algorithm, parameters, salt, and hash); the
    /// plaintext is never stored or logged.
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHash)
    }

    /// Verify a password against a stored PHC digest
    ///
    /// Fails closed: a malformed digest or any verification error is a
    /// non-match, never a match.
    pub fn verify_password(password: &str, digest: &str) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("Stored password digest could not be parsed");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = PasswordService::hash_password("secret1").unwrap();

        assert!(PasswordService::verify_password("secret1", &hash));
        assert!(!PasswordService::verify_password("secret2", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let first = PasswordService::hash_password("secret1").unwrap();
        let second = PasswordService::hash_password("secret1").unwrap();

        // Same password, fresh salt, different digest
        assert_ne!(first, second);
    }

    #[test]
    fn digest_is_not_plaintext() {
        let hash = PasswordService::hash_password("hunter2+more").unwrap();
        assert!(!hash.contains("hunter2"));
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn malformed_digest_never_matches() {
        assert!(!PasswordService::verify_password("secret1", "not-a-phc-string"));
        assert!(!PasswordService::verify_password("secret1", ""));
    }
}
