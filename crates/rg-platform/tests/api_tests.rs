//! Platform Integration Tests
//!
//! Covers validation rules, the registration flow, and pagination,
//! driven by an in-memory store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::Mutex;

use rg_platform::domain::waitlist::{SOURCE_LANDING_PAGE, STATUS_PENDING};
use rg_platform::domain::{StatusCheck, WaitlistEntry};
use rg_platform::error::Result;
use rg_platform::repository::{WaitlistStore, MAX_PAGE_SIZE};
use rg_platform::service::RegistrationService;
use rg_platform::validation::{normalize_text, validate_signup};
use rg_platform::WaitlistError;

/// In-memory store mirroring the Mongo repository's contract,
/// including duplicate rejection on insert.
#[derive(Default)]
struct InMemoryWaitlistStore {
    entries: Mutex<Vec<WaitlistEntry>>,
}

#[async_trait]
impl WaitlistStore for InMemoryWaitlistStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<WaitlistEntry>> {
        let entries = self.entries.lock().await;
        Ok(entries.iter().find(|e| e.email == email).cloned())
    }

    async fn insert(&self, entry: &WaitlistEntry) -> Result<()> {
        let mut entries = self.entries.lock().await;
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(WaitlistError::duplicate("email", &entry.email));
        }
        entries.push(entry.clone());
        Ok(())
    }

    async fn list(&self, skip: u64, limit: i64) -> Result<Vec<WaitlistEntry>> {
        let entries = self.entries.lock().await;
        let mut sorted = entries.clone();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(sorted
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.entries.lock().await.len() as u64)
    }
}

/// Store whose pre-check always misses but whose insert reports a
/// uniqueness violation, simulating two submissions racing past the
/// existence check.
struct RacingStore;

#[async_trait]
impl WaitlistStore for RacingStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<WaitlistEntry>> {
        Ok(None)
    }

    async fn insert(&self, entry: &WaitlistEntry) -> Result<()> {
        Err(WaitlistError::duplicate("email", &entry.email))
    }

    async fn list(&self, _skip: u64, _limit: i64) -> Result<Vec<WaitlistEntry>> {
        Ok(vec![])
    }

    async fn count(&self) -> Result<u64> {
        Ok(0)
    }
}

fn service() -> (RegistrationService, Arc<InMemoryWaitlistStore>) {
    let store = Arc::new(InMemoryWaitlistStore::default());
    (RegistrationService::new(store.clone()), store)
}

// Validator unit tests
mod validation_tests {
    use super::*;

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in ["  Arjun   Sharma ", "O'Brien", "Delhi", "a - b"] {
            let once = normalize_text(raw);
            assert_eq!(normalize_text(&once), once);
        }
    }

    #[test]
    fn test_collapses_irregular_spacing() {
        let input = validate_signup(" Arjun \t Sharma ", "a@b.com", "New  Delhi").unwrap();
        assert_eq!(input.name, "Arjun Sharma");
        assert_eq!(input.city, "New Delhi");
    }

    #[test]
    fn test_rejects_digits_and_symbols() {
        for bad in ["A1", "Bob!", "J@ne", "Name_", "42"] {
            let errors = validate_signup(bad, "a@b.com", "Delhi").unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "name");
        }
    }

    #[test]
    fn test_accepts_hyphens_and_apostrophes() {
        let input = validate_signup("Mary-Jane O'Brien", "a@b.com", "Port-of-Spain").unwrap();
        assert_eq!(input.name, "Mary-Jane O'Brien");
        assert_eq!(input.city, "Port-of-Spain");
    }

    #[test]
    fn test_rejects_empty_and_whitespace_fields() {
        let errors = validate_signup("   ", "a@b.com", "\t").unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "city"]);
    }

    #[test]
    fn test_email_case_folding_collides() {
        let upper = validate_signup("A", "A@B.COM", "Delhi").unwrap();
        let lower = validate_signup("A", "a@b.com", "Delhi").unwrap();
        assert_eq!(upper.email, lower.email);
    }

    #[test]
    fn test_rejects_malformed_email() {
        for bad in ["notanemail", "user@nodot", "@x.com", "user @x.com", ""] {
            let errors = validate_signup("A", bad, "Delhi").unwrap_err();
            assert_eq!(errors[0].field, "email");
        }
    }

    #[test]
    fn test_name_boundary_lengths() {
        let exactly_100 = "a".repeat(100);
        assert!(validate_signup(&exactly_100, "a@b.com", "Delhi").is_ok());

        let over = "a".repeat(101);
        let errors = validate_signup(&over, "a@b.com", "Delhi").unwrap_err();
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_city_boundary_lengths() {
        let exactly_50 = "c".repeat(50);
        assert!(validate_signup("A", "a@b.com", &exactly_50).is_ok());
        assert!(validate_signup("A", "a@b.com", &"c".repeat(51)).is_err());
    }

    #[test]
    fn test_all_failing_fields_reported_together() {
        let errors = validate_signup("A1", "nope", "D3lhi").unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "city"]);
    }
}

// Registration service tests
mod registration_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_normalizes_and_persists() {
        let (service, store) = service();

        let entry = service
            .submit("Arjun Sharma", "Arjun@Test.com", "  Delhi  ")
            .await
            .unwrap();

        assert_eq!(entry.name, "Arjun Sharma");
        assert_eq!(entry.email, "arjun@test.com");
        assert_eq!(entry.city, "Delhi");
        assert_eq!(entry.status, STATUS_PENDING);
        assert_eq!(entry.source, SOURCE_LANDING_PAGE);
        assert!(!entry.id.is_empty());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_name_with_field_detail() {
        let (service, store) = service();

        let err = service.submit("A1", "a@b.com", "Delhi").await.unwrap_err();
        match err {
            WaitlistError::Validation { details } => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "name");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_case_varying_resubmission_is_duplicate() {
        let (service, store) = service();

        service.submit("A", "Arjun@Test.com", "Delhi").await.unwrap();
        let err = service
            .submit("A", "arjun@test.COM", "Delhi")
            .await
            .unwrap_err();

        assert!(matches!(err, WaitlistError::Duplicate { .. }));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_race_reports_duplicate_not_internal() {
        let service = RegistrationService::new(Arc::new(RacingStore));

        let err = service.submit("A", "a@b.com", "Delhi").await.unwrap_err();
        assert!(matches!(err, WaitlistError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_validation_runs_before_store_access() {
        // RacingStore would reject any insert; invalid input must never
        // reach it.
        let service = RegistrationService::new(Arc::new(RacingStore));

        let err = service.submit("", "bad", "").await.unwrap_err();
        assert!(matches!(err, WaitlistError::Validation { .. }));
    }
}

// Listing and pagination tests
mod pagination_tests {
    use super::*;

    async fn seed_three(store: &InMemoryWaitlistStore) {
        for (i, email) in ["first@x.com", "second@x.com", "third@x.com"]
            .iter()
            .enumerate()
        {
            let mut entry = WaitlistEntry::new("A", *email, "Delhi");
            entry.timestamp = entry.timestamp + Duration::seconds(i as i64);
            store.insert(&entry).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_list_returns_newest_first_with_total() {
        let (service, store) = service();
        seed_three(&store).await;

        let (entries, total) = service.list_entries(0, 2).await.unwrap();

        assert_eq!(total, 3);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].email, "third@x.com");
        assert_eq!(entries[1].email, "second@x.com");
        assert!(entries[0].timestamp > entries[1].timestamp);
    }

    #[tokio::test]
    async fn test_skip_offsets_the_window() {
        let (service, store) = service();
        seed_three(&store).await;

        let (entries, total) = service.list_entries(2, 2).await.unwrap();

        assert_eq!(total, 3);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, "first@x.com");
    }

    #[tokio::test]
    async fn test_limit_is_clamped_to_cap() {
        let (service, store) = service();
        seed_three(&store).await;

        // Oversized and non-positive limits both stay within bounds.
        let (entries, _) = service.list_entries(0, MAX_PAGE_SIZE * 10).await.unwrap();
        assert_eq!(entries.len(), 3);

        let (entries, _) = service.list_entries(0, 0).await.unwrap();
        assert_eq!(entries.len(), 1);

        let (entries, _) = service.list_entries(0, -5).await.unwrap();
        assert_eq!(entries.len(), 1);
    }
}

// Domain model tests
mod domain_tests {
    use super::*;

    #[test]
    fn test_new_entries_get_distinct_ids() {
        let a = WaitlistEntry::new("A", "a@x.com", "Delhi");
        let b = WaitlistEntry::new("B", "b@x.com", "Mumbai");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_entry_defaults() {
        let entry = WaitlistEntry::new("A", "a@x.com", "Delhi");
        assert_eq!(entry.status, STATUS_PENDING);
        assert_eq!(entry.source, SOURCE_LANDING_PAGE);
    }

    #[test]
    fn test_status_check_captures_client_name() {
        let check = StatusCheck::new("landing-page");
        assert_eq!(check.client_name, "landing-page");
        assert!(!check.id.is_empty());
    }
}
