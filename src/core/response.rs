//! Discord text-limit utilities
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

/// Discord embed description limit
///
/// Discord counts characters; applying it as a byte cap is a conservative bound
/// that may cut multibyte text earlier than Discord would.
pub const EMBED_LIMIT: usize = 4096;

/// Truncate text to at most `limit` bytes, adding an ellipsis if needed
///
/// Never splits a UTF-8 character.
pub fn truncate_to(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }

    // Room for "..."
    let mut end = limit.saturating_sub(3);
    while !text.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Truncate text to fit the embed description limit
pub fn truncate_for_embed(text: &str) -> String {
    truncate_to(text, EMBED_LIMIT)
}
