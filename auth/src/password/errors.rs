use thiserror::Error;

/// Error type for password operations.
///
/// `InvalidDigest` only occurs for corrupt stored hashes; a plain
/// mismatch is reported as `Ok(false)` by `verify`, never as an error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password digest is malformed: {0}")]
    InvalidDigest(String),
}
