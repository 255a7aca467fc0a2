use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// A stored account: profile fields plus the secret digest/key pair.
///
/// The digest and key are only ever replaced together. Neither is serialized
/// outward.
#[derive(Debug, Clone, Serialize)]
pub struct Credential {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub secret_digest: Vec<u8>,
    #[serde(skip_serializing)]
    pub secret_key: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Record store the auth core delegates persistence to. Keyed by the login
/// identifier (username) throughout; a deployment never mixes key types.
///
/// Uniqueness is ultimately the store's job: `insert` must fail on a
/// duplicate identifier even if the caller's `exists` check raced with a
/// concurrent registration.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_identifier(&self, username: &str) -> Result<Option<Credential>, Error>;

    async fn exists(&self, username: &str) -> Result<bool, Error>;

    /// Whether `email` is held by any record other than `excluding`.
    async fn email_taken(&self, email: &str, excluding: &str) -> Result<bool, Error>;

    async fn insert(&self, record: Credential) -> Result<Credential, Error>;

    async fn update(&self, record: Credential) -> Result<Credential, Error>;

    async fn remove(&self, username: &str) -> Result<(), Error>;
}
