//! Prefix command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::context::CommandContext;
use super::message::{IncomingMessage, ParsedCommand};
use super::sink::MessageSink;

/// Everything a handler needs to know about the command being run
pub struct Invocation<'a> {
    pub request_id: Uuid,
    pub message: &'a IncomingMessage,
    pub command: &'a ParsedCommand,
}

/// Trait for prefix command handlers
///
/// Each command handler implements this trait to process one or more commands.
/// Handlers are registered with a CommandRegistry and dispatched based on command name.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl PrefixCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         ctx: Arc<CommandContext>,
///         invocation: &Invocation<'_>,
///         sink: &dyn MessageSink,
///     ) -> Result<()> {
///         safe_send(sink, invocation.message.channel_id, "Pong!").await;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait PrefixCommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    ///
    /// A handler can process multiple commands if they share logic.
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command
    ///
    /// Replies go through `sink`; send failures are the handler's to log, not return.
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation<'_>,
        sink: &dyn MessageSink,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn PrefixCommandHandler) {}
}
