//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod utility;
pub mod verse;

use std::sync::Arc;

use super::handler::PrefixCommandHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers() -> Vec<Arc<dyn PrefixCommandHandler>> {
    vec![Arc::new(utility::UtilityHandler), Arc::new(verse::VerseHandler)]
}
