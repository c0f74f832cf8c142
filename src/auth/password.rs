use crate::utils::error::AppError;

pub const HASH_COST: u32 = 12;

pub fn hash(plaintext: &str) -> Result<String, AppError> {
    bcrypt::hash(plaintext, HASH_COST)
        .map_err(|err| AppError::Internal(format!("failed to hash password: {}", err)))
}

/// Fails closed: a malformed stored hash verifies as false rather than
/// surfacing an error the caller could use to distinguish accounts.
pub fn verify(plaintext: &str, hashed: &str) -> bool {
    bcrypt::verify(plaintext, hashed).unwrap_or(false)
}
