use std::sync::Arc;

use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::IssuedToken;
use crate::domain::auth::models::RegisteredUser;
use crate::domain::auth::ports::CredentialRepository;
use crate::domain::errors::StoreError;

/// Credential lifecycle: registration and login.
///
/// Stateless between calls; every invocation works only on its own
/// arguments and the injected collaborators. Password hashing and
/// verification are CPU-bound and run on the blocking pool so they do
/// not stall the async scheduler.
pub struct AuthService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
}

impl<CR> AuthService<CR>
where
    CR: CredentialRepository,
{
    pub fn new(repository: Arc<CR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    /// * `UsernameTaken` - the username exists, whether caught by the
    ///   pre-check or by the store's unique index on a concurrent insert
    /// * `RegistrationFailed` - any unexpected fault, cause masked
    pub async fn register(
        &self,
        username: String,
        password: String,
    ) -> Result<RegisteredUser, AuthError> {
        let existing = self
            .repository
            .find_by_username(&username)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Credential lookup failed during registration");
                AuthError::RegistrationFailed
            })?;

        if existing.is_some() {
            return Err(AuthError::UsernameTaken);
        }

        let authenticator = Arc::clone(&self.authenticator);
        let plaintext = password;
        let password_hash = tokio::task::spawn_blocking(move || {
            authenticator.hash_password(&plaintext)
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task panicked");
            AuthError::RegistrationFailed
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AuthError::RegistrationFailed
        })?;

        let credential = Credential {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: Utc::now(),
        };

        match self.repository.create(credential).await {
            Ok(created) => Ok(RegisteredUser {
                id: created.id,
                username: created.username,
            }),
            // Lost the check-then-insert race; same outcome as the pre-check.
            Err(StoreError::UniqueViolation(_)) => Err(AuthError::UsernameTaken),
            Err(e) => {
                tracing::error!(error = %e, "Credential insert failed");
                Err(AuthError::RegistrationFailed)
            }
        }
    }

    /// Log a user in, returning a fresh access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown username or wrong password, with
    ///   one indistinguishable message for both
    /// * `LoginFailed` - any unexpected fault, cause masked
    pub async fn login(&self, username: String, password: String) -> Result<IssuedToken, AuthError> {
        let credential = self
            .repository
            .find_by_username(&username)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Credential lookup failed during login");
                AuthError::LoginFailed
            })?;

        let Some(credential) = credential else {
            return Err(AuthError::InvalidCredentials);
        };

        let authenticator = Arc::clone(&self.authenticator);
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(
                &password,
                &credential.password_hash,
                &credential.id.to_string(),
                &credential.username,
            )
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task panicked");
            AuthError::LoginFailed
        })?;

        match result {
            Ok(authenticated) => Ok(IssuedToken {
                access_token: authenticated.access_token,
            }),
            Err(AuthenticationError::InvalidCredentials) => Err(AuthError::InvalidCredentials),
            Err(e) => {
                tracing::error!(error = %e, "Token issuance failed during login");
                Err(AuthError::LoginFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;

    use mockall::mock;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    mock! {
        pub TestCredentialRepository {}

        #[async_trait::async_trait]
        impl CredentialRepository for TestCredentialRepository {
            async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError>;
            async fn create(&self, credential: Credential) -> Result<Credential, StoreError>;
        }
    }

    fn service(repository: MockTestCredentialRepository) -> AuthService<MockTestCredentialRepository> {
        AuthService::new(
            Arc::new(repository),
            Arc::new(Authenticator::new(SECRET, 24)),
        )
    }

    fn stored_credential(username: &str, password: &str) -> Credential {
        let authenticator = Authenticator::new(SECRET, 24);
        Credential {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: authenticator.hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn register_hashes_password_and_returns_user() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_create()
            .withf(|credential| {
                credential.username == "alice"
                    && credential.password_hash.starts_with("$argon2")
                    && credential.password_hash != "Passw0rd!"
            })
            .times(1)
            .returning(Ok);

        let result = service(repository)
            .register("alice".to_string(), "Passw0rd!".to_string())
            .await
            .expect("registration failed");

        assert_eq!(result.username, "alice");
    }

    #[tokio::test]
    async fn register_duplicate_username_is_taken() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|username| Ok(Some(stored_credential(username, "Passw0rd!"))));
        repository.expect_create().times(0);

        let result = service(repository)
            .register("alice".to_string(), "An0ther$".to_string())
            .await;

        assert_eq!(result, Err(AuthError::UsernameTaken));
    }

    #[tokio::test]
    async fn register_insert_race_maps_unique_violation_to_taken() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(StoreError::UniqueViolation("users_username_key".into())));

        let result = service(repository)
            .register("alice".to_string(), "Passw0rd!".to_string())
            .await;

        assert_eq!(result, Err(AuthError::UsernameTaken));
    }

    #[tokio::test]
    async fn register_store_fault_is_masked() {
        let mut repository = MockTestCredentialRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Err(StoreError::Database("connection refused".into())));

        let result = service(repository)
            .register("alice".to_string(), "Passw0rd!".to_string())
            .await;

        assert_eq!(result, Err(AuthError::RegistrationFailed));
    }

    #[tokio::test]
    async fn concurrent_registration_yields_one_success_one_conflict() {
        let mut repository = MockTestCredentialRepository::new();

        // Both callers pass the pre-check; the unique index decides.
        repository
            .expect_find_by_username()
            .times(2)
            .returning(|_| Ok(None));

        let inserted = Arc::new(AtomicBool::new(false));
        let inserted_in_mock = Arc::clone(&inserted);
        repository.expect_create().times(2).returning(move |credential| {
            if inserted_in_mock.swap(true, Ordering::SeqCst) {
                Err(StoreError::UniqueViolation("users_username_key".into()))
            } else {
                Ok(credential)
            }
        });

        let service = Arc::new(service(repository));
        let (first, second) = tokio::join!(
            service.register("newcomer".to_string(), "Passw0rd!".to_string()),
            service.register("newcomer".to_string(), "Passw0rd!".to_string()),
        );

        let outcomes = [first, second];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(
            outcomes
                .iter()
                .filter(|r| matches!(r, Err(AuthError::UsernameTaken)))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn login_issues_token_with_matching_identity() {
        let credential = stored_credential("alice", "Passw0rd!");
        let expected_id = credential.id;

        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .times(1)
            .returning(move |_| Ok(Some(credential.clone())));

        let token = service(repository)
            .login("alice".to_string(), "Passw0rd!".to_string())
            .await
            .expect("login failed");

        let claims = Authenticator::new(SECRET, 24)
            .validate_token(&token.access_token)
            .expect("issued token did not verify");
        assert_eq!(claims.sub, expected_id.to_string());
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn login_unknown_user_is_invalid_credentials() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(repository)
            .login("ghost".to_string(), "anything".to_string())
            .await;

        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_wrong_password_is_same_failure_as_unknown_user() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_credential("realuser", "Passw0rd!"))));

        let result = service(repository)
            .login("realuser".to_string(), "wrongpass".to_string())
            .await;

        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_store_fault_is_masked() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Err(StoreError::Database("connection refused".into())));

        let result = service(repository)
            .login("alice".to_string(), "Passw0rd!".to_string())
            .await;

        assert_eq!(result, Err(AuthError::LoginFailed));
    }

    #[tokio::test]
    async fn login_corrupt_digest_is_masked_not_unauthorized() {
        let mut repository = MockTestCredentialRepository::new();
        repository.expect_find_by_username().times(1).returning(|_| {
            Ok(Some(Credential {
                id: Uuid::new_v4(),
                username: "alice".to_string(),
                password_hash: "not-a-phc-string".to_string(),
                created_at: Utc::now(),
            }))
        });

        let result = service(repository)
            .login("alice".to_string(), "Passw0rd!".to_string())
            .await;

        assert_eq!(result, Err(AuthError::LoginFailed));
    }
}
