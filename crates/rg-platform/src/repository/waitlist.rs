//! Waitlist Repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Collection, Database, IndexModel};
use tracing::info;

use crate::domain::WaitlistEntry;
use crate::error::{Result, WaitlistError};
use crate::repository::WaitlistStore;

const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoWaitlistRepository {
    collection: Collection<WaitlistEntry>,
}

impl MongoWaitlistRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("waitlist_entries"),
        }
    }

    /// Creates the unique email index and the timestamp sort index.
    ///
    /// The unique index is what makes the service's check-then-insert
    /// sequence safe under concurrent submissions of the same email.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let email_unique = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let newest_first = IndexModel::builder()
            .keys(doc! { "timestamp": -1 })
            .build();

        self.collection.create_index(email_unique).await?;
        self.collection.create_index(newest_first).await?;
        info!("waitlist indexes ensured");
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err)) => {
            write_err.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_err) => command_err.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl WaitlistStore for MongoWaitlistRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<WaitlistEntry>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn insert(&self, entry: &WaitlistEntry) -> Result<()> {
        self.collection.insert_one(entry).await.map_err(|e| {
            if is_duplicate_key(&e) {
                WaitlistError::duplicate("email", &entry.email)
            } else {
                e.into()
            }
        })?;
        Ok(())
    }

    async fn list(&self, skip: u64, limit: i64) -> Result<Vec<WaitlistEntry>> {
        let options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .skip(skip)
            .limit(limit)
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
