//! Security Utilities
//!
//! Password hashing helpers built on bcrypt.

use bcrypt::{hash, verify, DEFAULT_COST};

/// Default bcrypt cost for password hashing
pub const DEFAULT_BCRYPT_COST: u32 = DEFAULT_COST;

/// Hash a password using bcrypt with the default cost
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash_password_with_cost(password, DEFAULT_BCRYPT_COST)
}

/// Hash a password with a custom bcrypt cost
///
/// bcrypt generates a fresh salt per call, so equal passwords produce
/// distinct digests.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against its stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the suite fast; production cost comes from config.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_password_hashing() {
        let password = "test_password_123";
        let hash = hash_password_with_cost(password, TEST_COST).unwrap();

        assert_ne!(hash, password);
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_distinct_digests() {
        let a = hash_password_with_cost("SamePassword123!", TEST_COST).unwrap();
        let b = hash_password_with_cost("SamePassword123!", TEST_COST).unwrap();

        assert_ne!(a, b);
        assert!(verify_password("SamePassword123!", &a).unwrap());
        assert!(verify_password("SamePassword123!", &b).unwrap());
    }

    #[test]
    fn test_default_cost_in_bcrypt_range() {
        #[allow(clippy::assertions_on_constants)]
        {
            assert!(DEFAULT_BCRYPT_COST >= 4, "bcrypt cost too low for security");
            assert!(
                DEFAULT_BCRYPT_COST <= 31,
                "bcrypt cost too high for performance"
            );
        }
    }
}
