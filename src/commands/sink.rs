//! Outbound message delivery
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use log::error;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;

use crate::core::{verse_embed, SendError};
use crate::features::verse::VerseCard;

/// Where command replies go
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Send a plain text message to a channel
    async fn send_text(&self, channel_id: u64, content: &str) -> Result<(), SendError>;

    /// Send a rich card (embed) to a channel
    async fn send_card(&self, channel_id: u64, card: &VerseCard) -> Result<(), SendError>;
}

/// Sink backed by the Discord REST API
#[derive(Clone)]
pub struct SerenitySink {
    http: Arc<Http>,
}

impl SerenitySink {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MessageSink for SerenitySink {
    async fn send_text(&self, channel_id: u64, content: &str) -> Result<(), SendError> {
        ChannelId(channel_id)
            .say(&self.http, content)
            .await
            .map(|_| ())
            .map_err(|e| SendError {
                channel_id,
                reason: e.to_string(),
            })
    }

    async fn send_card(&self, channel_id: u64, card: &VerseCard) -> Result<(), SendError> {
        let embed = verse_embed(card);
        ChannelId(channel_id)
            .send_message(&self.http, |m| m.set_embed(embed))
            .await
            .map(|_| ())
            .map_err(|e| SendError {
                channel_id,
                reason: e.to_string(),
            })
    }
}

/// Send text, logging instead of failing
pub async fn safe_send(sink: &dyn MessageSink, channel_id: u64, content: &str) {
    if let Err(e) = sink.send_text(channel_id, content).await {
        error!("Error sending message: {e}");
    }
}

/// Send a card, logging instead of failing
pub async fn safe_send_card(sink: &dyn MessageSink, channel_id: u64, card: &VerseCard) {
    if let Err(e) = sink.send_card(channel_id, card).await {
        error!("Embed send error: {e}");
    }
}
