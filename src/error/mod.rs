//! Error types and command response mapping.
//!
//! This module provides the bot's error hierarchy. `AppError` is the top-level error
//! type that wraps domain-specific errors and knows how to turn itself into the short
//! message shown to a user whose command failed. Errors raised by the ambient
//! auto-translate pipeline never reach users; they are logged and dropped there.

pub mod config;
pub mod translation;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::error::{config::ConfigError, translation::TranslationError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot and provides
/// conversion to user-facing command responses. Most variants use `#[from]` for
/// automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Prevents the bot from starting at all.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Translation backend error for a single request.
    ///
    /// Shown to command callers as a translation error. Inside the auto-translate
    /// fan-out this is captured per target and never surfaces as `AppError`.
    #[error(transparent)]
    TranslationErr(#[from] TranslationError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Settings file read or write error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Settings file encoding or decoding error.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// User supplied a language name or code the resolver does not recognise.
    ///
    /// Aborts only the command that received it; no configuration is mutated.
    ///
    /// # Fields
    /// - The input exactly as the user typed it
    #[error("Invalid language: `{0}`")]
    InvalidLanguage(String),

    /// Command requires auto-translate to already be enabled for the channel.
    #[error("Auto-translate is not enabled in this channel")]
    NotEnabled,

    /// Invalid command usage.
    ///
    /// # Fields
    /// - Message describing what was wrong with the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// The message is logged but a generic message is shown to the user.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the message shown to a command caller.
    ///
    /// Validation errors are shown verbatim with a hint. Translation errors include
    /// their cause since users can usually act on them (unsupported language, backend
    /// down). Everything else is logged with full details and replaced by a generic
    /// message to avoid leaking internals.
    ///
    /// # Returns
    /// - `String` - Single-line message prefixed with ❌
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidLanguage(input) => format!(
                "❌ Invalid language: `{}`. Use language names (e.g., 'spanish') or codes (e.g., 'es')",
                input
            ),
            Self::NotEnabled => "❌ Auto-translate is not enabled in this channel.\n\
                 Use `/autotranslate` to enable it first."
                .to_string(),
            Self::BadRequest(msg) => format!("❌ {}", msg),
            Self::TranslationErr(err) => format!("❌ Translation error: {}", err),
            err => {
                tracing::error!("Command failed: {}", err);
                "❌ An internal error occurred, please try again later.".to_string()
            }
        }
    }
}
