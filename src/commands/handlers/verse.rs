//! Verse command handler
//!
//! Handles: verse
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;
use std::time::Instant;

use crate::commands::context::CommandContext;
use crate::commands::handler::{Invocation, PrefixCommandHandler};
use crate::commands::sink::{safe_send, safe_send_card, MessageSink};
use crate::features::verse::render_verse_card;

pub const VERSE_APOLOGY_TEXT: &str = "Sorry, I couldn't retrieve a verse right now.";

pub struct VerseHandler;

#[async_trait]
impl PrefixCommandHandler for VerseHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["verse"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        invocation: &Invocation<'_>,
        sink: &dyn MessageSink,
    ) -> Result<()> {
        let request_id = invocation.request_id;
        let channel_id = invocation.message.channel_id;
        let start_time = Instant::now();

        let payload = match ctx.verse_provider.fetch_verse().await {
            Ok(payload) => payload,
            Err(e) => {
                error!("[{request_id}] Verse retrieval error: {e}");
                safe_send(sink, channel_id, VERSE_APOLOGY_TEXT).await;
                return Ok(());
            }
        };

        let card = render_verse_card(&payload);
        safe_send_card(sink, channel_id, &card).await;

        info!(
            "[{request_id}] verse command completed in {}ms",
            start_time.elapsed().as_millis()
        );
        Ok(())
    }
}
