//! Service layer for translation logic and orchestration.
//!
//! Services sit between the bot's Discord event handlers and the settings repository.
//! They are responsible for:
//!
//! - **Language handling**: Resolving user input to canonical codes and detecting the
//!   language of message text
//! - **Translation**: Fanning a text out to every target language concurrently
//! - **Auto-translate**: Gating, translating and replying to messages in configured
//!   channels and guilds, and cleaning up replies when originals are deleted
//! - **Commands**: Validating command input and mutating configuration
//!
//! External capabilities (translation backend, language identifier, Discord message
//! operations) are reached through traits so services can be tested with fakes.

pub mod command;
pub mod detector;
pub mod gateway;
pub mod language;
pub mod lifecycle;
pub mod pipeline;
pub mod settings;
pub mod translation;

#[cfg(test)]
mod test;
