use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Stored credential record.
///
/// Created on registration and never mutated. The password hash never
/// leaves the domain layer.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration result returned to the caller; deliberately excludes the
/// password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub username: String,
}

/// Login result: a signed, time-bound access token.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedToken {
    pub access_token: String,
}
