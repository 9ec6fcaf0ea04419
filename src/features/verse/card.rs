//! Verse card rendering
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::fmt::Write;

use super::provider::VersePayload;
use crate::core::truncate_for_embed;

pub const VERSE_CARD_TITLE: &str = "Daily Bible Verse 📖";
pub const VERSE_CARD_COLOR: u32 = 0x3498db;
pub const TRANSLATION_HEADER: &str = "**Translation Details:**";
pub const VERSE_HEADER: &str = "**Random Verse:**";

/// A rich card ready to be sent as an embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseCard {
    pub title: String,
    pub body: String,
    pub color: u32,
    /// RFC3339, set when the card is rendered
    pub timestamp: String,
}

/// Render a payload into a card stamped with the current time
pub fn render_verse_card(payload: &VersePayload) -> VerseCard {
    render_verse_card_at(payload, Utc::now())
}

pub fn render_verse_card_at(payload: &VersePayload, now: DateTime<Utc>) -> VerseCard {
    let mut body = String::new();
    body.push_str(TRANSLATION_HEADER);
    body.push('\n');
    write_entries(&mut body, &payload.translation_info);
    body.push('\n');
    body.push_str(VERSE_HEADER);
    body.push('\n');
    write_entries(&mut body, &payload.verse_info);

    VerseCard {
        title: VERSE_CARD_TITLE.to_string(),
        body: truncate_for_embed(&body),
        color: VERSE_CARD_COLOR,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, false),
    }
}

fn write_entries(out: &mut String, entries: &Map<String, Value>) {
    for (key, value) in entries {
        let _ = writeln!(out, "- {key}: {}", display_value(value));
    }
}

/// Strings render bare, everything else as compact JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
