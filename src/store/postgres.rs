use async_trait::async_trait;
use entity::credential::{ActiveModel as CredentialActive, Entity as CredentialRow, Model};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};
use tracing::info;

use crate::error::Error;
use crate::store::{Credential, CredentialStore};

/// sea-orm backed store. The `credential` table's primary-key and unique
/// constraints are the last line of defense for identifier/email uniqueness;
/// races past the service-level checks surface here as database errors.
#[derive(Clone)]
pub struct PgStore {
    db: DatabaseConnection,
}

impl PgStore {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        info!("Connecting to PostgreSQL...");
        let db = Database::connect(uri).await?;
        info!("Connected to PostgreSQL.");
        Ok(Self { db })
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<Model> for Credential {
    fn from(m: Model) -> Self {
        Credential {
            username: m.username,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            secret_digest: m.secret_digest,
            secret_key: m.secret_key,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn to_active(record: &Credential) -> CredentialActive {
    CredentialActive {
        username: Set(record.username.clone()),
        first_name: Set(record.first_name.clone()),
        last_name: Set(record.last_name.clone()),
        email: Set(record.email.clone()),
        secret_digest: Set(record.secret_digest.clone()),
        secret_key: Set(record.secret_key.clone()),
        created_at: Set(record.created_at),
        updated_at: Set(record.updated_at),
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn find_by_identifier(&self, username: &str) -> Result<Option<Credential>, Error> {
        Ok(CredentialRow::find_by_id(username)
            .one(&self.db)
            .await?
            .map(Credential::from))
    }

    async fn exists(&self, username: &str) -> Result<bool, Error> {
        Ok(CredentialRow::find()
            .filter(entity::credential::Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    async fn email_taken(&self, email: &str, excluding: &str) -> Result<bool, Error> {
        Ok(CredentialRow::find()
            .filter(entity::credential::Column::Email.eq(email))
            .filter(entity::credential::Column::Username.ne(excluding))
            .count(&self.db)
            .await?
            > 0)
    }

    async fn insert(&self, record: Credential) -> Result<Credential, Error> {
        CredentialRow::insert(to_active(&record))
            .exec(&self.db)
            .await?;
        Ok(record)
    }

    async fn update(&self, record: Credential) -> Result<Credential, Error> {
        // digest and key travel in the same UPDATE; a failed statement leaves
        // the old pair intact
        to_active(&record).update(&self.db).await?;
        Ok(record)
    }

    async fn remove(&self, username: &str) -> Result<(), Error> {
        CredentialRow::delete_by_id(username).exec(&self.db).await?;
        Ok(())
    }
}
