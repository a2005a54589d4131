use async_trait::async_trait;
use auth::IssuedToken;
use auth::PasswordDigest;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create new user with a freshly salted password digest.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username and password
    ///
    /// # Returns
    /// Created user entity (no bearer token issued yet)
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Salt generation failed
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Return the user with the command's username, creating it when absent.
    ///
    /// An existing user keeps its current password.
    ///
    /// # Errors
    /// * `Password` - Salt generation failed
    /// * `DatabaseError` - Database operation failed
    async fn ensure_user(&self, command: CreateUserCommand) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `CorruptCredentials` - Stored binary fields have the wrong length
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Write password hash and salt in one statement, leaving the token pair alone.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_password(
        &self,
        id: &UserId,
        password: &PasswordDigest,
    ) -> Result<(), UserError>;

    /// Write token and token timestamp in one statement, leaving the password pair alone.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_token(&self, id: &UserId, token: &IssuedToken) -> Result<(), UserError>;
}
