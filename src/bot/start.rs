use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Gateway intents the bot needs to see and reply to messages.
///
/// `MESSAGE_CONTENT` is a privileged intent and must be enabled in the Discord
/// Developer Portal, otherwise every message arrives with empty content.
fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let client = Client::builder(&config.discord_bot_token, intents())
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until the gateway connection shuts down.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
