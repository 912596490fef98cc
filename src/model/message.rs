//! Domain models for inbound Discord message events.
//!
//! The pipeline works on these plain structs rather than serenity's `Message` so the
//! translation logic can be exercised without a gateway connection. Conversion from
//! serenity types happens at the bot handler boundary.

use serenity::all::Message;

/// A message-created event as seen by the auto-translate pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    /// Discord message ID
    pub id: u64,
    /// Raw message content
    pub content: String,
    /// Whether the author is a bot or other automated participant
    pub is_automated_author: bool,
    /// Channel the message was posted in
    pub channel_id: u64,
    /// Guild the message was posted in, `None` for direct messages
    pub guild_id: Option<u64>,
}

impl IncomingMessage {
    /// Converts a serenity message at the bot handler boundary.
    ///
    /// Webhook messages count as automated since they are frequently relays of
    /// other bots' output.
    ///
    /// # Arguments
    /// - `message` - Message received from the Discord gateway
    ///
    /// # Returns
    /// - `IncomingMessage` - Domain model used by the pipeline
    pub fn from_message(message: &Message) -> Self {
        Self {
            id: message.id.get(),
            content: message.content.clone(),
            is_automated_author: message.author.bot || message.webhook_id.is_some(),
            channel_id: message.channel_id.get(),
            guild_id: message.guild_id.map(|id| id.get()),
        }
    }
}

/// A message-deleted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedMessage {
    /// Discord ID of the deleted message
    pub id: u64,
    /// Channel the message was deleted from
    pub channel_id: u64,
}

/// Link between an original message and the translation reply posted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLink {
    /// Channel both messages live in
    pub channel_id: u64,
    /// Discord ID of the translation reply
    pub reply_id: u64,
}
