//! Rise Gum Platform
//!
//! Backend for the Rise Gum landing page:
//! - Waitlist registration with normalization, validation, and
//!   duplicate detection
//! - Paginated waitlist listing
//! - Static marketing content for the page
//! - Generic status-check log

pub mod api;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::WaitlistError;
