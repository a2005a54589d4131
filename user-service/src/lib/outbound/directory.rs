use std::sync::Arc;

use async_trait::async_trait;
use auth::DirectoryError;
use auth::IssuedToken;
use auth::PasswordDigest;
use auth::UserDirectory;

use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Exposes a `UserRepository` as the authenticator's user directory.
pub struct RepositoryDirectory<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> RepositoryDirectory<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<UR> UserDirectory for RepositoryDirectory<UR>
where
    UR: UserRepository,
{
    type User = User;

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DirectoryError> {
        // A name that could never have been registered cannot match a user.
        let Ok(username) = Username::new(name.to_string()) else {
            return Ok(None);
        };

        self.repository
            .find_by_username(&username)
            .await
            .map_err(|e| DirectoryError::LookupFailed(e.to_string()))
    }

    async fn persist_password(
        &self,
        user: &User,
        password: &PasswordDigest,
    ) -> Result<(), DirectoryError> {
        self.repository
            .update_password(&user.id, password)
            .await
            .map_err(|e| DirectoryError::PersistFailed(e.to_string()))
    }

    async fn persist_token(&self, user: &User, token: &IssuedToken) -> Result<(), DirectoryError> {
        self.repository
            .update_token(&user.id, token)
            .await
            .map_err(|e| DirectoryError::PersistFailed(e.to_string()))
    }
}
