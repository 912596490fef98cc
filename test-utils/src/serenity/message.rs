//! Test factory for creating Serenity Message objects.
//!
//! This module provides factory functions for creating mock Serenity `Message` structs
//! for testing purposes. Messages are built by deserializing JSON, simulating what
//! Discord's gateway delivers in a `MESSAGE_CREATE` event.

use serenity::all::Message;

use super::user::user_json;

/// Parameters for a test message.
///
/// Defaults describe a human-authored guild message with placeholder IDs.
#[derive(Debug, Clone)]
pub struct TestMessage<'a> {
    /// Discord message ID
    pub id: u64,
    /// Channel the message was posted in
    pub channel_id: u64,
    /// Guild the message was posted in, `None` for a direct message
    pub guild_id: Option<u64>,
    /// Message content
    pub content: &'a str,
    /// Whether the author is a bot
    pub author_is_bot: bool,
    /// Webhook that posted the message, if any
    pub webhook_id: Option<u64>,
}

impl Default for TestMessage<'_> {
    fn default() -> Self {
        Self {
            id: 900_000_000_000_000_001,
            channel_id: 800_000_000_000_000_001,
            guild_id: Some(700_000_000_000_000_001),
            content: "Hello there",
            author_is_bot: false,
            webhook_id: None,
        }
    }
}

/// Creates a test Serenity Message.
///
/// # Arguments
/// - `params` - Values for the fields the bot reads
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::message::{create_test_message, TestMessage};
///
/// let message = create_test_message(TestMessage {
///     content: "Bonjour",
///     guild_id: None,
///     ..Default::default()
/// });
/// assert!(message.guild_id.is_none());
/// ```
pub fn create_test_message(params: TestMessage<'_>) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": params.id.to_string(),
        "channel_id": params.channel_id.to_string(),
        "guild_id": params.guild_id.map(|id| id.to_string()),
        "author": user_json(600_000_000_000_000_001, "tester", params.author_is_bot),
        "content": params.content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "webhook_id": params.webhook_id.map(|id| id.to_string()),
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
