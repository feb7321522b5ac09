//! API Layer
//!
//! REST endpoints for the landing page backend.

pub mod common;
pub mod content;
pub mod openapi;
pub mod status;
pub mod waitlist;

pub use common::*;
pub use content::content_router;
pub use openapi::ApiDoc;
pub use status::{status_router, StatusState};
pub use waitlist::{waitlist_router, WaitlistState};
