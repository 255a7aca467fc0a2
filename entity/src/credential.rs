use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Backing table, managed out of band (this crate ships no migrations):
///
/// ```sql
/// CREATE TABLE credential (
///     username      text        PRIMARY KEY,
///     first_name    text        NOT NULL,
///     last_name     text        NOT NULL,
///     email         text        NOT NULL UNIQUE,
///     secret_digest bytea       NOT NULL,
///     secret_key    bytea       NOT NULL,
///     created_at    timestamptz NOT NULL,
///     updated_at    timestamptz NOT NULL
/// );
/// ```
#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "credential")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub secret_digest: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
