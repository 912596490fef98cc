//! Discord bot integration.
//!
//! This module connects the translation services to Discord. Gateway events are
//! received by the [`handler::Handler`], converted into domain models and passed to
//! the auto-translate pipeline, the lifecycle tracker or the command service. Slash
//! command definitions live in [`command`], and the rendering of command results
//! into embeds and messages lives in [`response`].
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and slash command context
//! - `GUILD_MESSAGES` - Receive messages and deletions in guild channels
//! - `DIRECT_MESSAGES` - Receive messages in direct messages
//! - `MESSAGE_CONTENT` - Read message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod gateway;
pub mod handler;
pub mod response;
pub mod start;

#[cfg(test)]
mod test;
