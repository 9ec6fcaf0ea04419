//! Embed builders for Discord responses
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use log::warn;
use serenity::builder::CreateEmbed;
use serenity::model::Timestamp;

use crate::features::verse::VerseCard;

/// Build the rich embed for a rendered verse card: title, description, accent color, timestamp.
///
/// The card body is already cut to the embed limit by the renderer.
pub fn verse_embed(card: &VerseCard) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed.title(&card.title);
    embed.description(&card.body);
    embed.color(card.color);
    match Timestamp::parse(&card.timestamp) {
        Ok(ts) => {
            embed.timestamp(ts);
        }
        Err(e) => warn!("Dropping unparseable embed timestamp '{}': {e}", card.timestamp),
    }
    embed
}
