use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use super::credentials::CredentialScheme;
use super::models::UserRecord;
use crate::error::{BookstoreError, Result};

/// In-memory directory of registered users, keyed by username. The map
/// key doubles as the unique-username constraint; registration is an
/// atomic check-and-insert so concurrent registrations of the same name
/// cannot both succeed.
#[derive(Clone)]
pub struct UserDirectory {
    users: Arc<DashMap<String, UserRecord>>,
    scheme: Arc<dyn CredentialScheme>,
}

impl UserDirectory {
    pub fn new(scheme: Arc<dyn CredentialScheme>) -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            scheme,
        }
    }

    pub fn exists(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn register(&self, username: &str, password: &str) -> Result<UserRecord> {
        // Hash outside the entry lock; bcrypt is deliberately slow.
        let password_hash = self.scheme.hash_password(password)?;

        match self.users.entry(username.to_string()) {
            Entry::Occupied(_) => Err(BookstoreError::DuplicateUser),
            Entry::Vacant(entry) => {
                let record = UserRecord::new(username.to_string(), password_hash);
                entry.insert(record.clone());

                log::info!("Registered user {}", username);
                Ok(record)
            }
        }
    }

    /// Checks a username/password pair. Unknown usernames report false
    /// rather than an error so callers cannot distinguish them from a
    /// wrong password.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let stored_hash = match self.users.get(username) {
            Some(user) => user.password_hash.clone(),
            None => return Ok(false),
        };

        self.scheme.verify_password(password, &stored_hash)
    }

    pub fn record_login(&self, username: &str) {
        if let Some(mut user) = self.users.get_mut(username) {
            user.update_last_login();
        }
    }

    #[cfg(test)]
    pub fn get(&self, username: &str) -> Option<UserRecord> {
        self.users.get(username).map(|u| u.value().clone())
    }
}
