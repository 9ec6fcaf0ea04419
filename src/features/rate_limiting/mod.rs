//! # Rate Limiting Feature
//!
//! Prevents command spam with a configurable request limit per user.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: true

pub mod limiter;

pub use limiter::RateLimiter;
