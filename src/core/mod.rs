//! # Core Module
//!
//! Configuration, error types and Discord response helpers for the verse bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;
pub mod embeds;
pub mod error;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use embeds::verse_embed;
pub use error::{ConfigError, FetchError, SendError};
pub use response::{truncate_for_embed, truncate_to, EMBED_LIMIT};
