//! Slash command and autocomplete handling.
//!
//! Commands that call the translation backend are deferred first, since a
//! translation can take longer than Discord's initial response window. Every other
//! command answers immediately. Command errors are rendered through
//! `AppError::user_message` and sent as the response instead of the result.

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, Context, CreateAutocompleteResponse, CreateInteractionResponse,
    Interaction,
};

use crate::{
    bot::{
        command,
        response::{self, Reply},
    },
    error::AppError,
    service::language,
    state::AppState,
};

/// Dispatches an interaction to the command or autocomplete handler.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(state, &ctx, &command).await,
        Interaction::Autocomplete(autocomplete) => handle_autocomplete(&ctx, &autocomplete).await,
        _ => {}
    }
}

async fn handle_command(state: &AppState, ctx: &Context, interaction: &CommandInteraction) {
    let name = interaction.data.name.as_str();
    let deferred = matches!(name, command::TRANSLATE | command::MULTI_TRANSLATE);

    if deferred {
        if let Err(e) = interaction.defer(&ctx.http).await {
            tracing::error!("Failed to defer /{}: {}", name, e);
            return;
        }
    }

    let reply = match run_command(state, interaction).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::debug!("/{} failed: {}", name, e);
            Reply::Text(e.user_message())
        }
    };

    let sent = if deferred {
        interaction
            .edit_response(&ctx.http, reply.into_edit())
            .await
            .map(|_| ())
    } else {
        interaction
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(reply.into_message()),
            )
            .await
    };

    if let Err(e) = sent {
        tracing::error!("Failed to respond to /{}: {}", name, e);
    }
}

async fn run_command(
    state: &AppState,
    interaction: &CommandInteraction,
) -> Result<Reply, AppError> {
    let channel_id = interaction.channel_id.get();
    let guild_id = interaction.guild_id.map(|id| id.get());
    let commands = &state.commands;

    match interaction.data.name.as_str() {
        command::TRANSLATE => {
            let text = string_option(interaction, "text")?;
            let target = string_option(interaction, "target_language")?;

            let translation = commands.translate_one(text, target).await?;

            Ok(Reply::Embed(response::translation_embed(
                text,
                &translation,
                Some(&interaction.user.name),
            )))
        }
        command::MULTI_TRANSLATE => {
            let text = string_option(interaction, "text")?;
            let languages = string_option(interaction, "languages")?;

            let translation = commands.translate_many(text, languages).await?;

            Ok(Reply::Embed(response::multi_translation_embed(
                text,
                &translation,
                &interaction.user.name,
            )))
        }
        command::AUTO_TRANSLATE => {
            let languages = string_option(interaction, "languages")?;

            if bool_option(interaction, "enable")? {
                let targets = commands.enable_channel(channel_id, languages).await?;
                Ok(Reply::Text(response::channel_enabled(&targets)))
            } else {
                commands.disable_channel(channel_id).await;
                Ok(Reply::Text(response::channel_disabled()))
            }
        }
        command::AUTO_TRANSLATE_SERVER => {
            let languages = string_option(interaction, "languages")?;

            if bool_option(interaction, "enable")? {
                let targets = commands.enable_guild(guild_id, languages).await?;
                Ok(Reply::Text(response::guild_enabled(&targets)))
            } else {
                commands.disable_guild(guild_id).await?;
                Ok(Reply::Text(response::guild_disabled()))
            }
        }
        command::ADD_LANGUAGE => {
            let language = string_option(interaction, "language")?;
            let (code, outcome) = commands.add_language(channel_id, language).await?;
            Ok(Reply::Text(response::language_added(&code, &outcome)))
        }
        command::REMOVE_LANGUAGE => {
            let language = string_option(interaction, "language")?;
            let (code, outcome) = commands.remove_language(channel_id, language).await?;
            Ok(Reply::Text(response::language_removed(&code, &outcome)))
        }
        command::DETECT_LANGUAGE => {
            let text = string_option(interaction, "text")?;
            let detected = commands.detect(text);
            Ok(Reply::Embed(response::detection_embed(text, &detected)))
        }
        command::LANGUAGES => Ok(Reply::Embed(response::languages_embed())),
        command::INVITE => Ok(Reply::Embed(response::invite_embed(
            interaction.application_id.get(),
        ))),
        other => Err(AppError::BadRequest(format!("Unknown command `/{}`", other))),
    }
}

/// Answers a language option autocomplete request with matching language names.
async fn handle_autocomplete(ctx: &Context, autocomplete: &CommandInteraction) {
    let Some(focused) = autocomplete.data.autocomplete() else {
        return;
    };

    let choices = language::suggest(focused.value)
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |choices, suggestion| {
            choices.add_string_choice(suggestion.name, suggestion.value)
        });

    if let Err(e) = autocomplete
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(choices))
        .await
    {
        tracing::warn!("Failed to answer autocomplete: {}", e);
    }
}

fn string_option<'a>(
    interaction: &'a CommandInteraction,
    name: &str,
) -> Result<&'a str, AppError> {
    interaction
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
        .ok_or_else(|| AppError::BadRequest(format!("Missing option `{}`", name)))
}

fn bool_option(interaction: &CommandInteraction, name: &str) -> Result<bool, AppError> {
    interaction
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_bool())
        .ok_or_else(|| AppError::BadRequest(format!("Missing option `{}`", name)))
}
