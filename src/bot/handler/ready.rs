//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The ready
//! handler is used to:
//! - Log connection information and invite links
//! - Log the auto-translate configuration loaded at startup
//! - Register the bot's slash commands

use dioxus_logger::tracing;
use serenity::all::{Command, Context, Ready};

use crate::{
    bot::{command, response},
    model::settings::describe,
    state::AppState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Command registration replaces the full global command list on every connection, so
/// definitions removed from the bot also disappear from Discord.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    let bot_id = ready.user.id.get();

    tracing::info!("{} is connected to Discord", ready.user.name);
    tracing::info!("Bot is in {} guilds", ready.guilds.len());
    tracing::info!("Server invite: {}", response::server_invite_url(bot_id));
    tracing::info!(
        "User install (DMs/Groups): {}",
        response::user_install_url(bot_id)
    );

    log_settings(state).await;

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => {
            tracing::info!("Registered {} slash commands", commands.len());
            for registered in commands {
                tracing::debug!("  - /{}", registered.name);
            }
        }
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}

async fn log_settings(state: &AppState) {
    let settings = state.settings.snapshot().await;

    if !settings.channels.is_empty() {
        tracing::info!(
            "Loaded {} auto-translate channel(s)",
            settings.channels.len()
        );
        for (channel_id, languages) in &settings.channels {
            tracing::info!("  - Channel {} → [{}]", channel_id, describe(languages));
        }
    }

    if !settings.guilds.is_empty() {
        tracing::info!(
            "Loaded {} server-wide auto-translate(s)",
            settings.guilds.len()
        );
        for (guild_id, languages) in &settings.guilds {
            tracing::info!("  - Server {} → [{}]", guild_id, describe(languages));
        }
    }
}
