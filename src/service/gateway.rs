//! Outbound chat platform operations needed by the translation services.
//!
//! The pipeline and lifecycle tracker talk to Discord through this trait so they can
//! be exercised without a live connection. The serenity-backed implementation lives
//! in `bot::gateway`.

use serenity::async_trait;

use crate::error::AppError;

#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Posts `content` as a reply to `original_id` without pinging its author.
    ///
    /// # Returns
    /// - `Ok(u64)` - ID of the posted reply
    /// - `Err(AppError)` - Discord rejected the message
    async fn post_reply(
        &self,
        channel_id: u64,
        original_id: u64,
        content: &str,
    ) -> Result<u64, AppError>;

    /// Checks whether a message still exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Message was fetched
    /// - `Ok(false)` - Discord reports the message as not found
    /// - `Err(AppError)` - Fetch failed for another reason
    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError>;

    /// Deletes a message.
    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError>;
}
