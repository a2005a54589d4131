//! In-memory collaborators shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::credentials::Authenticatable;
use crate::credentials::Credentials;
use crate::credentials::IssuedToken;
use crate::credentials::PasswordDigest;
use crate::password::PasswordHasher;
use crate::ports::Clock;
use crate::ports::ClockError;
use crate::ports::DirectoryError;
use crate::ports::UserDirectory;

#[derive(Debug, Clone)]
pub struct TestUser {
    pub name: String,
    pub credentials: Credentials,
}

impl TestUser {
    pub fn with_password(name: &str, password: &str) -> Self {
        let digest = PasswordHasher::new()
            .derive(password)
            .expect("Failed to derive digest");
        Self {
            name: name.to_string(),
            credentials: Credentials::new(digest),
        }
    }
}

impl Authenticatable for TestUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }
}

#[derive(Default)]
pub struct InMemoryDirectory {
    users: Mutex<HashMap<String, TestUser>>,
    persists: AtomicUsize,
    lookups: AtomicUsize,
    fail_persist: AtomicBool,
    fail_lookup: AtomicBool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a user and hand back a copy, as a lookup would.
    pub fn insert(&self, user: TestUser) -> TestUser {
        self.users
            .lock()
            .unwrap()
            .insert(user.name.clone(), user.clone());
        user
    }

    pub fn get(&self, name: &str) -> Option<TestUser> {
        self.users.lock().unwrap().get(name).cloned()
    }

    /// Change the stored password behind the back of any loaded copies.
    pub fn replace_password(&self, name: &str, password: PasswordDigest) {
        if let Some(user) = self.users.lock().unwrap().get_mut(name) {
            user.credentials.password = password;
        }
    }

    pub fn persist_count(&self) -> usize {
        self.persists.load(Ordering::SeqCst)
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn fail_persist(&self) {
        self.fail_persist.store(true, Ordering::SeqCst);
    }

    pub fn fail_lookup(&self) {
        self.fail_lookup.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    type User = TestUser;

    async fn find_by_name(&self, name: &str) -> Result<Option<TestUser>, DirectoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(DirectoryError::LookupFailed("connection refused".to_string()));
        }
        Ok(self.get(name))
    }

    async fn persist_password(
        &self,
        user: &TestUser,
        password: &PasswordDigest,
    ) -> Result<(), DirectoryError> {
        self.write(&user.name, |stored| {
            stored.credentials.password = password.clone();
        })
    }

    async fn persist_token(
        &self,
        user: &TestUser,
        token: &IssuedToken,
    ) -> Result<(), DirectoryError> {
        self.write(&user.name, |stored| {
            stored.credentials.token = Some(token.clone());
        })
    }
}

impl InMemoryDirectory {
    fn write(
        &self,
        name: &str,
        update: impl FnOnce(&mut TestUser),
    ) -> Result<(), DirectoryError> {
        if self.fail_persist.load(Ordering::SeqCst) {
            return Err(DirectoryError::PersistFailed("connection refused".to_string()));
        }
        let mut users = self.users.lock().unwrap();
        let stored = users
            .get_mut(name)
            .ok_or_else(|| DirectoryError::PersistFailed(format!("no user {}", name)))?;
        update(stored);
        self.persists.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Clock frozen at a settable instant; `broken()` always fails.
pub struct FixedClock {
    now: Mutex<Option<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(Some(now)),
        }
    }

    pub fn broken() -> Self {
        Self {
            now: Mutex::new(None),
        }
    }

    pub fn advance(&self, seconds: i64) {
        let mut now = self.now.lock().unwrap();
        *now = now.map(|instant| instant + Duration::seconds(seconds));
    }
}

#[async_trait]
impl Clock for FixedClock {
    async fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        self.now
            .lock()
            .unwrap()
            .ok_or_else(|| ClockError::Unavailable("clock offline".to_string()))
    }
}
