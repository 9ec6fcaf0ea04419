// Core layer - configuration, errors and Discord response helpers
pub mod core;

// Features layer - verse provider and rate limiting
pub mod features;

// Application layer
pub mod commands;
pub mod lifecycle;

pub use crate::core::Config;

pub use commands::{Dispatcher, IncomingMessage, MessageSink, SerenitySink};
pub use features::{BibleApiClient, RateLimiter, VerseCard, VersePayload, VerseProvider};
pub use lifecycle::shutdown_signal;
