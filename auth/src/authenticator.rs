use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Coordinates password verification and token issuance.
///
/// One instance is shared across the whole service; it holds no per-user
/// or per-request state.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl_hours: i64,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - secret for token signing
    /// * `token_ttl_hours` - lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], token_ttl_hours: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl_hours,
        }
    }

    /// Hash a plaintext password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored digest and, on match, issue an
    /// access token for the user.
    ///
    /// # Errors
    /// * `InvalidCredentials` - the password does not match
    /// * `Password` - the stored digest is malformed
    /// * `Jwt` - token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: &str,
        username: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let claims = Claims::for_user(user_id, username, self.token_ttl_hours);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Verify an access token and return its claims.
    ///
    /// # Errors
    /// * `Jwt` - the token is malformed, tampered with, or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn authenticate_success_issues_valid_token() {
        let authenticator = Authenticator::new(SECRET, 24);

        let hash = authenticator
            .hash_password("Passw0rd!")
            .expect("hash failed");

        let result = authenticator
            .authenticate("Passw0rd!", &hash, "user-1", "alice")
            .expect("authentication failed");
        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .validate_token(&result.access_token)
            .expect("token validation failed");
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn authenticate_wrong_password_is_invalid_credentials() {
        let authenticator = Authenticator::new(SECRET, 24);

        let hash = authenticator
            .hash_password("Passw0rd!")
            .expect("hash failed");

        let result = authenticator.authenticate("nope", &hash, "user-1", "alice");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn validate_garbage_token_fails() {
        let authenticator = Authenticator::new(SECRET, 24);

        assert!(authenticator.validate_token("invalid.token.here").is_err());
    }
}
