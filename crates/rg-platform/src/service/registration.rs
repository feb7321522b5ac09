//! Registration Service
//!
//! Orchestrates validation, duplicate detection, and persistence for
//! waitlist sign-ups. The store is injected at construction; the
//! service holds no other state.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::WaitlistEntry;
use crate::error::{Result, WaitlistError};
use crate::repository::{WaitlistStore, MAX_PAGE_SIZE};
use crate::validation::validate_signup;

pub struct RegistrationService {
    store: Arc<dyn WaitlistStore>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        Self { store }
    }

    /// Validates a raw submission, rejects duplicates, and persists a
    /// new entry.
    ///
    /// Duplicate detection happens twice: a pre-check point lookup for
    /// the common case, and the store's unique email constraint for the
    /// race where two submissions pass the pre-check concurrently. Both
    /// paths report [`WaitlistError::Duplicate`].
    pub async fn submit(&self, name: &str, email: &str, city: &str) -> Result<WaitlistEntry> {
        let input = validate_signup(name, email, city)
            .map_err(WaitlistError::validation)?;

        let existing = self
            .store
            .find_by_email(&input.email)
            .await
            .map_err(|e| log_storage_fault(e, &input.email, &input.city))?;
        if existing.is_some() {
            return Err(WaitlistError::duplicate("email", &input.email));
        }

        let entry = WaitlistEntry::new(input.name, input.email, input.city);
        match self.store.insert(&entry).await {
            Ok(()) => {
                info!(email = %entry.email, city = %entry.city, "new waitlist sign-up");
                Ok(entry)
            }
            Err(dup @ WaitlistError::Duplicate { .. }) => Err(dup),
            Err(e) => Err(log_storage_fault(e, &entry.email, &entry.city)),
        }
    }

    /// Page of entries, newest first, with the total count.
    ///
    /// `limit` is clamped to `1..=MAX_PAGE_SIZE`; `skip` is already
    /// non-negative by type.
    pub async fn list_entries(&self, skip: u64, limit: i64) -> Result<(Vec<WaitlistEntry>, u64)> {
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        let entries = self.store.list(skip, limit).await?;
        let total = self.store.count().await?;
        Ok((entries, total))
    }
}

/// Records the diagnostic context server-side; the caller only ever
/// sees a generic internal failure.
fn log_storage_fault(err: WaitlistError, email: &str, city: &str) -> WaitlistError {
    error!(error = %err, email, city, "waitlist storage failure");
    err
}
