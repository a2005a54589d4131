use async_trait::async_trait;
use auth::Clock;
use auth::ClockError;
use auth::SystemClock;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::config::ClockSource;

/// Reads the current time from the database server.
///
/// Every replica sharing the database agrees on token age.
pub struct PostgresClock {
    pool: PgPool,
}

impl PostgresClock {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Clock for PostgresClock {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ClockError::Unavailable(e.to_string()))
    }
}

/// Clock selected by configuration.
pub enum ServerClock {
    Database(PostgresClock),
    System(SystemClock),
}

impl ServerClock {
    pub fn from_source(source: ClockSource, pool: PgPool) -> Self {
        match source {
            ClockSource::Database => Self::Database(PostgresClock::new(pool)),
            ClockSource::System => Self::System(SystemClock),
        }
    }
}

#[async_trait]
impl Clock for ServerClock {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        match self {
            Self::Database(clock) => clock.now().await,
            Self::System(clock) => clock.now().await,
        }
    }
}
