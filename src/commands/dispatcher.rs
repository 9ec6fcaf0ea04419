//! Prefix command dispatcher
//!
//! Turns one inbound message into at most one reply. Stateless apart from the
//! rate limiter: every message is handled on its own and errors never leave
//! `on_message`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use log::{debug, error, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::context::CommandContext;
use super::handler::Invocation;
use super::handlers::create_all_handlers;
use super::message::{parse_command, IncomingMessage};
use super::registry::CommandRegistry;
use super::sink::{safe_send, MessageSink};
use crate::core::{truncate_to, Config};
use crate::features::rate_limiting::RateLimiter;
use crate::features::verse::VerseProvider;

pub const RATE_LIMIT_TEXT: &str = "You're sending commands too quickly! Please slow down.";

/// Reply for names with no registered handler
pub fn unknown_command_text(prefix: &str) -> String {
    format!("Unknown command. Try {prefix}hello, {prefix}ping, or {prefix}verse")
}

pub struct Dispatcher {
    ctx: Arc<CommandContext>,
    registry: CommandRegistry,
    rate_limiter: RateLimiter,
}

impl Dispatcher {
    pub fn new(ctx: CommandContext, registry: CommandRegistry, rate_limiter: RateLimiter) -> Self {
        Self {
            ctx: Arc::new(ctx),
            registry,
            rate_limiter,
        }
    }

    /// Dispatcher with every built-in command, configured from `config`
    pub fn from_config(config: &Config, verse_provider: Arc<dyn VerseProvider>) -> Self {
        let rate_limiter = if config.rate_limit_max_requests == 0 {
            RateLimiter::disabled()
        } else {
            RateLimiter::new(config.rate_limit_max_requests, config.rate_limit_window)
        };

        Self::new(
            CommandContext::from_config(config, verse_provider),
            CommandRegistry::with_handlers(create_all_handlers()),
            rate_limiter,
        )
    }

    pub fn prefix(&self) -> &str {
        &self.ctx.prefix
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Handle one inbound message
    ///
    /// Messages from `bot_id` and messages without the prefix are ignored.
    pub async fn on_message(&self, msg: &IncomingMessage, bot_id: u64, sink: &dyn MessageSink) {
        if msg.author_id == bot_id {
            return;
        }

        let request_id = Uuid::new_v4();
        info!(
            "[{request_id}] 📥 Message received in channel {} from {}: '{}'",
            msg.channel_id,
            msg.author_name,
            truncate_to(&msg.content, 100)
        );

        let Some(command) = parse_command(&msg.content, &self.ctx.prefix) else {
            return;
        };
        debug!(
            "[{request_id}] Parsed command '{}' with {} args",
            command.name,
            command.args.len()
        );

        if !self.rate_limiter.check_rate_limit(msg.author_id) {
            warn!("[{request_id}] 🚫 Rate limit exceeded for user: {}", msg.author_id);
            safe_send(sink, msg.channel_id, RATE_LIMIT_TEXT).await;
            return;
        }

        let Some(handler) = self.registry.get(&command.name) else {
            info!("[{request_id}] Unknown command '{}'", command.name);
            safe_send(sink, msg.channel_id, &unknown_command_text(&self.ctx.prefix)).await;
            return;
        };

        let invocation = Invocation {
            request_id,
            message: msg,
            command: &command,
        };
        if let Err(e) = handler.handle(Arc::clone(&self.ctx), &invocation, sink).await {
            error!("[{request_id}] Error handling command '{}': {e}", command.name);
        }
    }
}
