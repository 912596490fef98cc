//! Serenity implementation of the message gateway.

use std::sync::Arc;

use serenity::{
    all::{
        ChannelId, Colour, CreateAllowedMentions, CreateEmbed, CreateEmbedFooter, CreateMessage,
        MessageId,
    },
    async_trait,
    http::{Http, HttpError},
};

use crate::{error::AppError, service::gateway::MessageGateway};

const AUTO_TRANSLATE_FOOTER: &str = "🌐 Auto-translate";

/// Message gateway backed by the bot's Discord HTTP client.
pub struct DiscordGateway {
    http: Arc<Http>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MessageGateway for DiscordGateway {
    /// Posts the reply as a blue embed referencing the original message.
    ///
    /// The replied-to author is not pinged.
    async fn post_reply(
        &self,
        channel_id: u64,
        original_id: u64,
        content: &str,
    ) -> Result<u64, AppError> {
        let channel_id = ChannelId::new(channel_id);

        let embed = CreateEmbed::new()
            .description(content)
            .colour(Colour::BLUE)
            .footer(CreateEmbedFooter::new(AUTO_TRANSLATE_FOOTER));

        let message = CreateMessage::new()
            .embed(embed)
            .reference_message((channel_id, MessageId::new(original_id)))
            .allowed_mentions(CreateAllowedMentions::new().replied_user(false));

        let reply = channel_id.send_message(&self.http, message).await?;

        Ok(reply.id.get())
    }

    async fn message_exists(&self, channel_id: u64, message_id: u64) -> Result<bool, AppError> {
        match self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await
        {
            Ok(_) => Ok(true),
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == 404 =>
            {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        self.http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await?;

        Ok(())
    }
}
