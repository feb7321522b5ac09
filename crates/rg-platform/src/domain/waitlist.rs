//! Waitlist Entry Entity

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Initial lifecycle status for new sign-ups. No transitions are
/// performed by this backend; downstream processing owns the rest.
pub const STATUS_PENDING: &str = "pending";

/// Provenance tag for entries created through the landing page.
pub const SOURCE_LANDING_PAGE: &str = "landing_page";

/// A persisted waitlist sign-up.
///
/// `id` and `timestamp` are assigned once at creation and never change.
/// `email` is stored normalized (lower-cased) and is globally unique,
/// enforced by a unique index on the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntry {
    /// UUID as string
    #[serde(rename = "_id")]
    pub id: String,

    /// Normalized display name
    pub name: String,

    /// Normalized (lower-cased) email, the uniqueness key
    pub email: String,

    /// Normalized city name
    pub city: String,

    /// Creation time, immutable
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,

    /// Lifecycle tag, defaults to "pending"
    pub status: String,

    /// Provenance tag, defaults to "landing_page"
    pub source: String,
}

impl WaitlistEntry {
    /// Builds a new entry from already-normalized fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            city: city.into(),
            timestamp: Utc::now(),
            status: STATUS_PENDING.to_string(),
            source: SOURCE_LANDING_PAGE.to_string(),
        }
    }
}
