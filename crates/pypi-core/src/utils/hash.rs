//! SHA-256 helpers for release artifact verification.

use crate::error::{CoreError, CoreResult};
use sha2::{Digest, Sha256};

/// Compute the lowercase hex SHA-256 of data
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Verify data against an expected hex SHA-256 digest
pub fn verify_sha256(file: &str, data: &[u8], expected: &str) -> CoreResult<()> {
    let actual = sha256_hex(data);
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(CoreError::IntegrityFailure {
            file: file.to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}
