use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::Error;
use crate::store::{Credential, CredentialStore};

/// In-process store keyed by username. Used by the test suite and by
/// embedders that do not want a database.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Credential>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_identifier(&self, username: &str) -> Result<Option<Credential>, Error> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.get(username).cloned())
    }

    async fn exists(&self, username: &str) -> Result<bool, Error> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.contains_key(username))
    }

    async fn email_taken(&self, email: &str, excluding: &str) -> Result<bool, Error> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records
            .values()
            .any(|r| r.email == email && r.username != excluding))
    }

    async fn insert(&self, record: Credential) -> Result<Credential, Error> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        if records.contains_key(&record.username) {
            return Err(Error::Conflict(format!(
                "username {} already exists",
                record.username
            )));
        }
        records.insert(record.username.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, record: Credential) -> Result<Credential, Error> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        match records.get_mut(&record.username) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(Error::NotFound),
        }
    }

    async fn remove(&self, username: &str) -> Result<(), Error> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.remove(username);
        Ok(())
    }
}
