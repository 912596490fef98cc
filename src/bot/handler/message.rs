use dioxus_logger::tracing;
use serenity::all::{ChannelId, Context, Message, MessageId};

use crate::{
    bot::{command, gateway::DiscordGateway, response},
    model::message::{DeletedMessage, IncomingMessage},
    service::pipeline::PipelineOutcome,
    state::AppState,
};

/// Handle message creation in a channel
///
/// Every message first goes through the auto-translate pipeline. The legacy `!tr`
/// prefix command is processed afterwards, whatever the pipeline did.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    let incoming = IncomingMessage::from_message(&message);
    let gateway = DiscordGateway::new(ctx.http.clone());

    match state.pipeline.handle(&incoming, &gateway).await {
        PipelineOutcome::Posted {
            source, languages, ..
        } => {
            tracing::info!(
                "Auto-translated message {} in channel {} from {} into {} language(s)",
                incoming.id,
                incoming.channel_id,
                source,
                languages.len()
            );
        }
        PipelineOutcome::Skipped(reason) => {
            tracing::trace!("Message {} skipped: {:?}", incoming.id, reason);
        }
        PipelineOutcome::NothingTranslated { .. } | PipelineOutcome::PostFailed { .. } => {}
    }

    if incoming.is_automated_author {
        return;
    }

    let Some((language, text)) = command::parse_prefix_translate(&message.content) else {
        return;
    };

    let reply = match state.commands.translate_one(text, language).await {
        Ok(translation) => {
            response::Reply::Embed(response::translation_embed(text, &translation, None))
        }
        Err(e) => response::Reply::Text(e.user_message()),
    };

    if let Err(e) = message
        .channel_id
        .send_message(&ctx.http, reply.into_channel_message())
        .await
    {
        tracing::error!(
            "Failed to answer prefix command in channel {}: {}",
            incoming.channel_id,
            e
        );
    }
}

/// Handle message deletion, removing the translation reply of the deleted message
pub async fn handle_message_delete(
    state: &AppState,
    ctx: Context,
    channel_id: ChannelId,
    message_id: MessageId,
) {
    let gateway = DiscordGateway::new(ctx.http.clone());
    let deleted = DeletedMessage {
        id: message_id.get(),
        channel_id: channel_id.get(),
    };

    state.lifecycle.on_deleted(deleted, &gateway).await;
}
