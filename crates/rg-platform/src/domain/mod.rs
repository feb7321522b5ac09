//! Domain Entities

pub mod content;
pub mod status_check;
pub mod waitlist;

pub use content::MarketingContent;
pub use status_check::StatusCheck;
pub use waitlist::WaitlistEntry;
