//! Sign-up Validation
//!
//! Pure normalization and validation of raw waitlist submissions.
//! Deterministic, no storage access; every offending field is reported
//! in a single pass.

use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidateEmail;

/// Maximum length of a normalized name.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of a normalized city.
pub const CITY_MAX_LEN: usize = 50;

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Canonical form of a valid submission.
///
/// Name and city are whitespace-collapsed and trimmed; the email is
/// lower-cased and is the uniqueness key for the waitlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSignup {
    pub name: String,
    pub email: String,
    pub city: String,
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_permitted_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' ' || c == '-' || c == '\''
}

fn validate_person_field(
    field: &'static str,
    label: &'static str,
    raw: &str,
    max_len: usize,
) -> std::result::Result<String, FieldError> {
    let value = normalize_text(raw);
    if value.is_empty() {
        return Err(FieldError::new(field, format!("{label} cannot be empty")));
    }
    if value.chars().count() > max_len {
        return Err(FieldError::new(
            field,
            format!("{label} must be at most {max_len} characters"),
        ));
    }
    if !value.chars().all(is_permitted_char) {
        return Err(FieldError::new(
            field,
            format!("{label} can only contain letters, spaces, hyphens, and apostrophes"),
        ));
    }
    Ok(value)
}

fn validate_email_field(raw: &str) -> std::result::Result<String, FieldError> {
    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        return Err(FieldError::new("email", "Email cannot be empty"));
    }
    // The HTML5 grammar used by `validate_email` accepts dotless domains
    // like `user@localhost`; the waitlist requires a dotted domain.
    let dotted_domain = value
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.'))
        .unwrap_or(false);
    if !dotted_domain || !value.validate_email() {
        return Err(FieldError::new("email", "Email must be a valid address"));
    }
    Ok(value)
}

/// Validates a raw submission and returns its canonical form, or the
/// full list of per-field failures.
pub fn validate_signup(
    name: &str,
    email: &str,
    city: &str,
) -> std::result::Result<NormalizedSignup, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = validate_person_field("name", "Name", name, NAME_MAX_LEN)
        .map_err(|e| errors.push(e))
        .ok();
    let email = validate_email_field(email).map_err(|e| errors.push(e)).ok();
    let city = validate_person_field("city", "City", city, CITY_MAX_LEN)
        .map_err(|e| errors.push(e))
        .ok();

    match (name, email, city) {
        (Some(name), Some(email), Some(city)) => Ok(NormalizedSignup { name, email, city }),
        _ => Err(errors),
    }
}
