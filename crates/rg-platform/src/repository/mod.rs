//! Repository Layer
//!
//! Storage interface consumed by the services, plus the MongoDB
//! implementations.

pub mod status_check;
pub mod waitlist;

use async_trait::async_trait;

use crate::domain::WaitlistEntry;
use crate::error::Result;

/// Hard ceiling on page size, to keep list scans bounded.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Page size applied when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Persistence contract for waitlist entries.
///
/// The store is the single source of truth for "does this email exist":
/// implementations back [`insert`](WaitlistStore::insert) with a unique
/// constraint on the normalized email so that concurrent submissions
/// cannot both land.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Point lookup keyed on the normalized (lower-cased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<WaitlistEntry>>;

    /// Persists a new entry. A store-level uniqueness violation on the
    /// email surfaces as [`WaitlistError::Duplicate`](crate::WaitlistError::Duplicate),
    /// never as a generic database error.
    async fn insert(&self, entry: &WaitlistEntry) -> Result<()>;

    /// Page of entries ordered by timestamp descending (newest first).
    async fn list(&self, skip: u64, limit: i64) -> Result<Vec<WaitlistEntry>>;

    /// Total number of entries.
    async fn count(&self) -> Result<u64>;
}

pub use status_check::StatusCheckRepository;
pub use waitlist::MongoWaitlistRepository;
