//! # Command System
//!
//! Prefix command (`!name`) handling for Discord messages.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod handlers;
pub mod message;
pub mod registry;
pub mod sink;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use dispatcher::Dispatcher;
pub use handler::{Invocation, PrefixCommandHandler};
pub use message::{parse_command, IncomingMessage, ParsedCommand};
pub use registry::CommandRegistry;
pub use sink::{safe_send, safe_send_card, MessageSink, SerenitySink};
