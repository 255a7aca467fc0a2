use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::Error;
use crate::hash;
use crate::store::{Credential, CredentialStore};

/// Registration payload. The plaintext secret travels alongside but is never
/// stored; only its digest/key pair is.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCredential {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Partial profile update. `None` and blank strings both mean "leave the
/// stored value alone".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub new_secret: Option<String>,
}

/// Account lifecycle on top of a [`CredentialStore`]: register, authenticate,
/// update, remove. Stateless per call; safe to share across request tasks.
pub struct AuthService<S> {
    store: Arc<S>,
}

fn supplied(field: Option<&String>) -> Option<&str> {
    field.map(|s| s.as_str()).filter(|s| !s.trim().is_empty())
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Create an account. Conflicts on an existing username; rejects empty
    /// secrets and secrets equal to the username.
    pub async fn register(&self, new: NewCredential, secret: &str) -> Result<Credential, Error> {
        if secret.trim().is_empty() {
            return Err(Error::InvalidInput("secret must not be empty".to_string()));
        }
        if secret == new.username {
            return Err(Error::InvalidInput(
                "secret must be different from the username".to_string(),
            ));
        }
        if self.store.exists(&new.username).await? {
            return Err(Error::Conflict(format!(
                "username {} already exists",
                new.username
            )));
        }

        let (digest, key) = hash::derive(secret)?;
        let now = Utc::now();
        let record = Credential {
            username: new.username,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            secret_digest: digest.to_vec(),
            secret_key: key.to_vec(),
            created_at: now,
            updated_at: now,
        };

        debug!(username = %record.username, "registering account");
        self.store.insert(record).await
    }

    /// Verify a presented identifier/secret pair.
    ///
    /// Unknown identifier and wrong secret both come back as `None`; the
    /// caller cannot tell which. Only store failures and corrupt stored
    /// digests are errors.
    pub async fn authenticate(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<Option<Credential>, Error> {
        if username.is_empty() || secret.is_empty() {
            return Ok(None);
        }

        let Some(record) = self.store.find_by_identifier(username).await? else {
            return Ok(None);
        };

        if !hash::verify(secret, &record.secret_digest, &record.secret_key)? {
            return Ok(None);
        }

        Ok(Some(record))
    }

    /// Apply a partial update. Supplied non-blank fields replace stored ones;
    /// a new email must not collide with another account; a new secret
    /// replaces the digest and key as a pair in one store write.
    pub async fn update_profile(
        &self,
        username: &str,
        update: ProfileUpdate,
    ) -> Result<Credential, Error> {
        let mut record = self
            .store
            .find_by_identifier(username)
            .await?
            .ok_or(Error::NotFound)?;

        if let Some(email) = supplied(update.email.as_ref()) {
            if email != record.email {
                if self.store.email_taken(email, username).await? {
                    return Err(Error::Conflict(format!("email {} is already taken", email)));
                }
                record.email = email.to_string();
            }
        }

        if let Some(first_name) = supplied(update.first_name.as_ref()) {
            record.first_name = first_name.to_string();
        }
        if let Some(last_name) = supplied(update.last_name.as_ref()) {
            record.last_name = last_name.to_string();
        }

        if let Some(new_secret) = supplied(update.new_secret.as_ref()) {
            let (digest, key) = hash::derive(new_secret)?;
            record.secret_digest = digest.to_vec();
            record.secret_key = key.to_vec();
        }

        record.updated_at = Utc::now();
        self.store.update(record).await
    }

    /// Delete an account. Deleting a missing account is not an error.
    pub async fn remove(&self, username: &str) -> Result<(), Error> {
        self.store.remove(username).await
    }
}
