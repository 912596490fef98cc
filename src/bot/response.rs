//! Rendering of command results into Discord messages and embeds.

use serenity::all::{
    Colour, CreateEmbed, CreateEmbedFooter, CreateInteractionResponseMessage, CreateMessage,
    EditInteractionResponse,
};

use crate::{
    model::{
        language::{LanguageCode, LanguageSet},
        settings::{AddLanguageOutcome, RemoveLanguageOutcome},
        translation::{MultiTranslation, SingleTranslation},
    },
    service::language,
};

/// Discord's limit on embed field values.
const MAX_FIELD_CHARS: usize = 1024;

/// Permission bits requested by the server invite link.
const INVITE_PERMISSIONS: u64 = 274_878_286_848;

const MULTI_TRANSLATION_COLOUR: Colour = Colour::new(0x2ECC71);

/// Response to a command, either plain text or a single embed.
pub enum Reply {
    Text(String),
    Embed(CreateEmbed),
}

impl Reply {
    pub fn into_message(self) -> CreateInteractionResponseMessage {
        match self {
            Self::Text(content) => CreateInteractionResponseMessage::new().content(content),
            Self::Embed(embed) => CreateInteractionResponseMessage::new().embed(embed),
        }
    }

    pub fn into_edit(self) -> EditInteractionResponse {
        match self {
            Self::Text(content) => EditInteractionResponse::new().content(content),
            Self::Embed(embed) => EditInteractionResponse::new().embed(embed),
        }
    }

    pub fn into_channel_message(self) -> CreateMessage {
        match self {
            Self::Text(content) => CreateMessage::new().content(content),
            Self::Embed(embed) => CreateMessage::new().embed(embed),
        }
    }
}

fn clip(text: &str) -> String {
    text.chars().take(MAX_FIELD_CHARS).collect()
}

/// Embed for a one-shot translation.
///
/// # Arguments
/// - `original` - Text the user asked to translate
/// - `translation` - Detected source, target and translated text
/// - `requested_by` - Name shown in the footer, omitted for prefix commands
pub fn translation_embed(
    original: &str,
    translation: &SingleTranslation,
    requested_by: Option<&str>,
) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("🌐 Translation")
        .colour(Colour::BLUE)
        .field(
            format!("Original ({})", translation.source),
            clip(original),
            false,
        )
        .field(
            format!("Translation ({})", translation.target),
            clip(&translation.text),
            false,
        );

    match requested_by {
        Some(name) => embed.footer(CreateEmbedFooter::new(format!("Requested by {}", name))),
        None => embed,
    }
}

/// Embed for a multi-target translation, one field per requested language.
///
/// Failed targets are shown with their error instead of being dropped.
pub fn multi_translation_embed(
    original: &str,
    translation: &MultiTranslation,
    requested_by: &str,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("🌐 Multi-Language Translation")
        .colour(MULTI_TRANSLATION_COLOUR)
        .field(
            format!("Original ({})", translation.source),
            clip(original),
            false,
        );

    for outcome in &translation.outcomes {
        let value = match &outcome.result {
            Ok(text) => clip(text),
            Err(reason) => clip(&format!("❌ Error: {}", reason)),
        };
        embed = embed.field(
            format!("{} ({})", outcome.display_name, outcome.target),
            value,
            false,
        );
    }

    embed.footer(CreateEmbedFooter::new(format!("Requested by {}", requested_by)))
}

pub fn detection_embed(text: &str, detected: &LanguageCode) -> CreateEmbed {
    CreateEmbed::new()
        .title("🔍 Language Detection")
        .colour(Colour::PURPLE)
        .field("Text", clip(text), false)
        .field(
            "Detected Language",
            format!("{} ({})", language::display_name(detected), detected),
            false,
        )
}

/// Embed listing every supported language, sorted by name.
pub fn languages_embed() -> CreateEmbed {
    let list = language::supported()
        .into_iter()
        .map(|(_, code)| {
            format!(
                "**{}**: `{}`",
                language::display_name(&LanguageCode::new(code)),
                code
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    CreateEmbed::new()
        .title("🌍 Supported Languages")
        .description(list)
        .colour(Colour::GOLD)
        .footer(CreateEmbedFooter::new(
            "Use language names or codes in commands",
        ))
}

/// Invite URL adding the bot to a server with the permissions it needs.
pub fn server_invite_url(bot_id: u64) -> String {
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={}&permissions={}&scope=bot%20applications.commands",
        bot_id, INVITE_PERMISSIONS
    )
}

/// Invite URL installing the bot's commands for a user, usable in DMs.
pub fn user_install_url(bot_id: u64) -> String {
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={}&scope=applications.commands",
        bot_id
    )
}

pub fn invite_embed(bot_id: u64) -> CreateEmbed {
    CreateEmbed::new()
        .title("🌐 Invite Translation Bot")
        .description("Choose how you want to add the bot:")
        .colour(Colour::BLUE)
        .field(
            "🏰 Add to Server",
            format!(
                "[Click here]({}) to add to a Discord server\n*Requires admin permissions*",
                server_invite_url(bot_id)
            ),
            false,
        )
        .field(
            "👤 Install for Personal Use",
            format!(
                "[Click here]({}) to use in DMs and group chats\n*Works in direct messages and groups!*",
                user_install_url(bot_id)
            ),
            false,
        )
        .footer(CreateEmbedFooter::new(
            "User install allows translation in DMs without adding to servers",
        ))
}

pub fn channel_enabled(targets: &LanguageSet) -> String {
    format!(
        "✅ Auto-translation enabled for this channel\n🌐 Target languages: {}",
        targets.display_bold()
    )
}

pub fn channel_disabled() -> String {
    "✅ Auto-translation disabled for this channel".to_string()
}

pub fn guild_enabled(targets: &LanguageSet) -> String {
    format!(
        "✅ Server-wide auto-translation enabled\n🌐 Target languages: {}\n\
         ℹ️ This will translate messages in ALL channels (except channel-specific overrides)",
        targets.display_bold()
    )
}

pub fn guild_disabled() -> String {
    "✅ Server-wide auto-translation disabled".to_string()
}

pub fn language_added(code: &LanguageCode, outcome: &AddLanguageOutcome) -> String {
    match outcome {
        AddLanguageOutcome::Added(current) => format!(
            "✅ Added **{}** to auto-translate\n🌐 Current languages: {}",
            code,
            current.display_bold()
        ),
        AddLanguageOutcome::AlreadyPresent(_) => {
            format!("ℹ️ **{}** is already in the auto-translate list", code)
        }
    }
}

pub fn language_removed(code: &LanguageCode, outcome: &RemoveLanguageOutcome) -> String {
    match outcome {
        RemoveLanguageOutcome::Removed(current) => format!(
            "✅ Removed **{}** from auto-translate\n🌐 Current languages: {}",
            code,
            current.display_bold()
        ),
        RemoveLanguageOutcome::RemovedLast => format!(
            "✅ Removed **{}** from auto-translate\n\
             ⚠️ No languages remaining - auto-translate has been disabled",
            code
        ),
        RemoveLanguageOutcome::NotPresent(_) => {
            format!("ℹ️ **{}** is not in the auto-translate list", code)
        }
    }
}
