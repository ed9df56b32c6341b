use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use shared_models::error::AppError;

/// Salted argon2 hash; the plaintext is never stored.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_correct_password() {
        let hash = hash_password("segredo123").unwrap();
        assert!(verify_password("segredo123", &hash));
    }

    #[test]
    fn rejects_wrong_password() {
        let hash = hash_password("segredo123").unwrap();
        assert!(!verify_password("outra-senha", &hash));
    }

    #[test]
    fn hash_is_salted() {
        let a = hash_password("segredo123").unwrap();
        let b = hash_password("segredo123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_malformed_stored_hash() {
        assert!(!verify_password("segredo123", "plaintext-in-db"));
    }
}
