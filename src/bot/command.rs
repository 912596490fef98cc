//! Slash command definitions registered with Discord.
//!
//! Commands are registered globally on ready. All commands except the guild-wide
//! configuration command can also be installed by users for use in direct messages.

use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, InstallationContext,
    InteractionContext, Permissions,
};

pub const TRANSLATE: &str = "translate";
pub const MULTI_TRANSLATE: &str = "multitranslate";
pub const AUTO_TRANSLATE: &str = "autotranslate";
pub const AUTO_TRANSLATE_SERVER: &str = "autotranslateserver";
pub const ADD_LANGUAGE: &str = "addlanguage";
pub const REMOVE_LANGUAGE: &str = "removelanguage";
pub const DETECT_LANGUAGE: &str = "detectlanguage";
pub const LANGUAGES: &str = "languages";
pub const INVITE: &str = "invite";

/// Prefix of the legacy text command, `!tr <language> <text>`.
pub const PREFIX_TRANSLATE: &str = "!tr";

fn text_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description).required(true)
}

fn language_option(name: &str, description: &str) -> CreateCommandOption {
    text_option(name, description).set_autocomplete(true)
}

fn enable_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Boolean, "enable", description).required(true)
}

/// Command usable both in servers and through a user install.
fn anywhere(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name)
        .description(description)
        .integration_types(vec![
            InstallationContext::Guild,
            InstallationContext::User,
        ])
        .contexts(vec![
            InteractionContext::Guild,
            InteractionContext::BotDm,
            InteractionContext::PrivateChannel,
        ])
}

/// Builds every slash command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        anywhere(TRANSLATE, "Translate text to a target language")
            .add_option(text_option("text", "The text to translate"))
            .add_option(language_option(
                "target_language",
                "Target language (e.g., 'spanish', 'es', 'french', 'fr')",
            )),
        anywhere(MULTI_TRANSLATE, "Translate text to multiple languages at once")
            .add_option(text_option("text", "The text to translate"))
            .add_option(language_option(
                "languages",
                "Comma-separated languages (e.g., 'spanish, french, german')",
            )),
        anywhere(AUTO_TRANSLATE, "Auto-translate messages in this channel")
            .add_option(language_option(
                "languages",
                "Comma-separated languages for auto-translation (e.g., 'english, spanish, french')",
            ))
            .add_option(enable_option(
                "Enable or disable auto-translation (true/false)",
            )),
        CreateCommand::new(AUTO_TRANSLATE_SERVER)
            .description("Enable auto-translate for entire server (Admin only)")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .integration_types(vec![InstallationContext::Guild])
            .contexts(vec![InteractionContext::Guild])
            .add_option(language_option(
                "languages",
                "Comma-separated languages for auto-translation (e.g., 'english, spanish, french')",
            ))
            .add_option(enable_option(
                "Enable or disable server-wide auto-translation (true/false)",
            )),
        anywhere(ADD_LANGUAGE, "Add a language to auto-translate in this channel").add_option(
            language_option("language", "Language to add (e.g., 'spanish', 'es')"),
        ),
        anywhere(
            REMOVE_LANGUAGE,
            "Remove a language from auto-translate in this channel",
        )
        .add_option(language_option(
            "language",
            "Language to remove (e.g., 'spanish', 'es')",
        )),
        anywhere(DETECT_LANGUAGE, "Detect the language of text")
            .add_option(text_option("text", "The text to analyze")),
        anywhere(LANGUAGES, "List all supported languages"),
        anywhere(INVITE, "Get bot invite links"),
    ]
}

/// Parses a legacy `!tr <language> <text>` message.
///
/// # Returns
/// - `Some((language, text))` - Message is a complete prefix command
/// - `None` - Message is not a prefix command or lacks arguments
pub fn parse_prefix_translate(content: &str) -> Option<(&str, &str)> {
    let rest = content.trim().strip_prefix(PREFIX_TRANSLATE)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let (language, text) = rest.trim_start().split_once(char::is_whitespace)?;
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some((language, text))
}
