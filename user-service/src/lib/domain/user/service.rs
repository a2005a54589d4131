use std::sync::Arc;

use async_trait::async_trait;
use auth::Credentials;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let digest = self.password_hasher.derive(&command.password)?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            credentials: Credentials::new(digest),
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User created"
        );

        Ok(created_user)
    }

    async fn ensure_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if let Some(user) = self.repository.find_by_username(&command.username).await? {
            tracing::debug!(username = %user.username, "User already present");
            return Ok(user);
        }

        self.create_user(command).await
    }
}
