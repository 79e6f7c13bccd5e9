use async_trait::async_trait;

use crate::domain::auth::models::Credential;
use crate::domain::errors::StoreError;

/// Persistence operations for credentials.
///
/// `create` relies on the store's unique index on username as the final
/// arbiter of the check-then-insert race: a duplicate insert surfaces as
/// `StoreError::UniqueViolation`, never as a silent overwrite.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Look up a credential by its unique, case-sensitive username.
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError>;

    /// Persist a new credential.
    ///
    /// # Errors
    /// * `UniqueViolation` - the username is already taken
    /// * `Database` - any other storage failure
    async fn create(&self, credential: Credential) -> Result<Credential, StoreError>;
}
