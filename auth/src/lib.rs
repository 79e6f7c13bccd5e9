//! Authentication building blocks for the music service.
//!
//! - Password hashing and verification (Argon2id)
//! - Signed, time-bound access tokens (JWT, HS256)
//! - An `Authenticator` coordinating both for login flows
//!
//! The service crate owns the credential store and orchestration; this
//! library only deals in plaintext/digest pairs and token strings.

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
