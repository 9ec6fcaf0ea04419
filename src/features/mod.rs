//! # Features
//!
//! - **verse**: provider client and card rendering for `!verse`
//! - **rate_limiting**: per-user command throttling

pub mod rate_limiting;
pub mod verse;

pub use rate_limiting::RateLimiter;
pub use verse::{BibleApiClient, VerseCard, VersePayload, VerseProvider};
