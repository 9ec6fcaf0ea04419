//! Error types shared across the bot
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! Startup errors (`ConfigError`) are fatal. `FetchError` and `SendError` are
//! contained inside the handling of a single message.

use thiserror::Error;

/// Configuration could not be loaded
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing credential: DISCORD_BOT_TOKEN must be set")]
    MissingCredential,
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Verse provider failure
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("bad status: {0}")]
    BadStatus(u16),
    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outbound message could not be delivered
#[derive(Debug, Error)]
#[error("failed to send to channel {channel_id}: {reason}")]
pub struct SendError {
    pub channel_id: u64,
    pub reason: String,
}
