//! Status Check Repository

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use crate::domain::StatusCheck;
use crate::error::Result;

pub struct StatusCheckRepository {
    collection: Collection<StatusCheck>,
}

impl StatusCheckRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("status_checks"),
        }
    }

    pub async fn insert(&self, check: &StatusCheck) -> Result<()> {
        self.collection.insert_one(check).await?;
        Ok(())
    }

    pub async fn find_recent(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        let options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .limit(limit)
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }
}
