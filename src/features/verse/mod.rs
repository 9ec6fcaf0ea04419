//! # Verse Feature
//!
//! Random verse lookup from bible-api.com, rendered as a rich card.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod card;
pub mod provider;

pub use card::{render_verse_card, render_verse_card_at, VerseCard};
pub use provider::{BibleApiClient, VerseProvider, VersePayload};
