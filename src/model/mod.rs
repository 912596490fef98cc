//! Domain models shared by the bot, service and data layers.
//!
//! Models here are independent of serenity's types except for the conversion
//! constructors used at the bot handler boundary.

pub mod language;
pub mod message;
pub mod settings;
pub mod translation;
