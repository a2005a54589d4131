use async_trait::async_trait;
use auth::BinaryValue;
use auth::Credentials;
use auth::IssuedToken;
use auth::PasswordDigest;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: Vec<u8>,
    password_salt: Vec<u8>,
    binary_token: Option<Vec<u8>>,
    binary_timestamp: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let corrupt = || UserError::CorruptCredentials(row.username.clone());

        let password = PasswordDigest {
            hash: BinaryValue::from_slice(&row.password_hash).ok_or_else(corrupt)?,
            salt: BinaryValue::from_slice(&row.password_salt).ok_or_else(corrupt)?,
        };

        let token = match (&row.binary_token, row.binary_timestamp) {
            (Some(value), Some(issued_at)) => Some(IssuedToken {
                value: BinaryValue::from_slice(value).ok_or_else(corrupt)?,
                issued_at,
            }),
            _ => None,
        };

        Ok(User {
            id: UserId(row.id),
            username: Username::new(row.username)?,
            credentials: Credentials { password, token },
            created_at: row.created_at,
        })
    }
}

fn token_columns(user: &User) -> (Option<Vec<u8>>, Option<DateTime<Utc>>) {
    match &user.credentials.token {
        Some(token) => (Some(token.value.as_bytes().to_vec()), Some(token.issued_at)),
        None => (None, None),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let (binary_token, binary_timestamp) = token_columns(&user);

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, password_salt, binary_token, binary_timestamp, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.credentials.password.hash.as_bytes().to_vec())
        .bind(user.credentials.password.salt.as_bytes().to_vec())
        .bind(binary_token)
        .bind(binary_timestamp)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_username_key")
                {
                    return UserError::UsernameAlreadyExists(user.username.as_str().to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, password_salt, binary_token, binary_timestamp, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn update_password(
        &self,
        id: &UserId,
        password: &PasswordDigest,
    ) -> Result<(), UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, password_salt = $3
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(password.hash.as_bytes().to_vec())
        .bind(password.salt.as_bytes().to_vec())
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn update_token(&self, id: &UserId, token: &IssuedToken) -> Result<(), UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET binary_token = $2, binary_timestamp = $3
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(token.value.as_bytes().to_vec())
        .bind(token.issued_at)
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
