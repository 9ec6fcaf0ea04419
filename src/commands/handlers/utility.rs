//! Utility command handlers
//!
//! Handles: hello, ping
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::CommandContext;
use crate::commands::handler::{Invocation, PrefixCommandHandler};
use crate::commands::sink::{safe_send, MessageSink};

pub const PONG_TEXT: &str = "Pong! 🏓";

/// Greeting for `hello`, pointing at the verse command under the active prefix
pub fn greeting_text(prefix: &str) -> String {
    format!("Hello! I'm your Bible verse bot. Type {prefix}verse for a random verse!")
}

/// Handler for utility commands: hello, ping
pub struct UtilityHandler;

#[async_trait]
impl PrefixCommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["hello", "ping"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation<'_>,
        sink: &dyn MessageSink,
    ) -> Result<()> {
        let channel_id = invocation.message.channel_id;
        match invocation.command.name.as_str() {
            "hello" => safe_send(sink, channel_id, &greeting_text(&ctx.prefix)).await,
            "ping" => safe_send(sink, channel_id, PONG_TEXT).await,
            _ => return Ok(()),
        }

        info!(
            "[{}] {} command completed for user {}",
            invocation.request_id, invocation.command.name, invocation.message.author_id
        );
        Ok(())
    }
}
