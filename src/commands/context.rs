//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::sync::Arc;

use crate::core::Config;
use crate::features::verse::VerseProvider;

/// Shared context for all command handlers
///
/// Contains the services command handlers need:
/// - the configured command prefix, for help texts
/// - the verse provider used by `verse`
#[derive(Clone)]
pub struct CommandContext {
    pub prefix: String,
    pub verse_provider: Arc<dyn VerseProvider>,
}

impl CommandContext {
    pub fn new(prefix: impl Into<String>, verse_provider: Arc<dyn VerseProvider>) -> Self {
        Self {
            prefix: prefix.into(),
            verse_provider,
        }
    }

    pub fn from_config(config: &Config, verse_provider: Arc<dyn VerseProvider>) -> Self {
        Self::new(config.command_prefix.clone(), verse_provider)
    }
}
