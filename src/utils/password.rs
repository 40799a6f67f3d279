//! Password hashing and verification.
//!
//! bcrypt is deliberately slow, so both operations run on the blocking
//! thread pool instead of stalling a request worker.

use crate::error::AppError;

/// Hashes a plaintext password with bcrypt at the given cost factor.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the hashing task fails or the cost
/// factor is out of bcrypt's supported range.
pub async fn hash(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch; errors are reserved for malformed
/// hashes and task failures.
pub async fn verify(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))
}
