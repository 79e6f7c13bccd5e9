use thiserror::Error;

/// Domain failures raised by registration and login.
///
/// The `Display` strings are wire-visible: they flow verbatim into the
/// response envelope, so they must not change without coordinating with
/// API clients. "Error when loggin" reproduces the legacy surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username is already taken")]
    UsernameTaken,

    /// Deliberately identical for unknown-user and wrong-password so the
    /// response never reveals which one occurred.
    #[error("Username or password is not valid")]
    InvalidCredentials,

    /// Masks any unexpected fault during registration.
    #[error("Error creating user")]
    RegistrationFailed,

    /// Masks any unexpected fault during login.
    #[error("Error when loggin")]
    LoginFailed,
}
