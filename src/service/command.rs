//! Business logic behind the bot's slash and prefix commands.
//!
//! Each method validates user input through the language resolver before touching
//! configuration, so an invalid language aborts the command with
//! `AppError::InvalidLanguage` and leaves every entry as it was. Rendering results
//! into Discord responses is left to the bot layer.

use crate::{
    error::AppError,
    model::{
        language::{LanguageCode, LanguageSet},
        settings::{AddLanguageOutcome, RemoveLanguageOutcome, ScopeKey},
        translation::{MultiTranslation, SingleTranslation, TranslationRequest},
    },
    service::{
        detector::LanguageDetector, language, settings::SettingsStore,
        translation::TranslationEngine,
    },
};

#[derive(Clone)]
pub struct CommandService {
    settings: SettingsStore,
    detector: LanguageDetector,
    engine: TranslationEngine,
}

impl CommandService {
    /// Creates a new CommandService instance.
    ///
    /// # Arguments
    /// - `settings` - Configuration store mutated by the auto-translate commands
    /// - `detector` - Detector used to label source text
    /// - `engine` - Engine used for one-shot translations
    ///
    /// # Returns
    /// - `CommandService` - New service
    pub fn new(
        settings: SettingsStore,
        detector: LanguageDetector,
        engine: TranslationEngine,
    ) -> Self {
        Self {
            settings,
            detector,
            engine,
        }
    }

    /// Enables auto-translate for a channel, replacing any previous targets.
    ///
    /// # Arguments
    /// - `channel_id` - Channel to configure
    /// - `languages` - Comma-separated language names or codes
    ///
    /// # Returns
    /// - `Ok(LanguageSet)` - Targets now configured
    /// - `Err(AppError::InvalidLanguage)` - An entry did not resolve
    /// - `Err(AppError::BadRequest)` - No languages were given
    pub async fn enable_channel(
        &self,
        channel_id: u64,
        languages: &str,
    ) -> Result<LanguageSet, AppError> {
        self.enable(ScopeKey::Channel(channel_id), languages).await
    }

    /// Disables auto-translate for a channel.
    ///
    /// # Returns
    /// - `true` - An entry existed and was removed
    /// - `false` - The channel was not configured
    pub async fn disable_channel(&self, channel_id: u64) -> bool {
        self.settings
            .clear(ScopeKey::Channel(channel_id))
            .await
            .is_some()
    }

    /// Enables guild-wide auto-translate, replacing any previous targets.
    ///
    /// Channel entries in the guild keep taking precedence over the new guild entry.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was used in, `None` outside guilds
    /// - `languages` - Comma-separated language names or codes
    ///
    /// # Returns
    /// - `Ok(LanguageSet)` - Targets now configured
    /// - `Err(AppError::BadRequest)` - Used outside a guild or without languages
    /// - `Err(AppError::InvalidLanguage)` - An entry did not resolve
    pub async fn enable_guild(
        &self,
        guild_id: Option<u64>,
        languages: &str,
    ) -> Result<LanguageSet, AppError> {
        let guild_id = require_guild(guild_id)?;
        self.enable(ScopeKey::Guild(guild_id), languages).await
    }

    /// Disables guild-wide auto-translate.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether an entry existed
    /// - `Err(AppError::BadRequest)` - Used outside a guild
    pub async fn disable_guild(&self, guild_id: Option<u64>) -> Result<bool, AppError> {
        let guild_id = require_guild(guild_id)?;
        Ok(self.settings.clear(ScopeKey::Guild(guild_id)).await.is_some())
    }

    /// Adds one language to a channel's existing configuration.
    ///
    /// # Arguments
    /// - `channel_id` - Configured channel
    /// - `language` - Language name or code
    ///
    /// # Returns
    /// - `Ok((LanguageCode, AddLanguageOutcome))` - Resolved code, and whether it was
    ///   added or already present
    /// - `Err(AppError::NotEnabled)` - The channel has no configuration
    /// - `Err(AppError::InvalidLanguage)` - `language` did not resolve
    pub async fn add_language(
        &self,
        channel_id: u64,
        language: &str,
    ) -> Result<(LanguageCode, AddLanguageOutcome), AppError> {
        let key = ScopeKey::Channel(channel_id);
        self.require_enabled(key).await?;

        let code = language::resolve_required(language)?;

        let outcome = self
            .settings
            .add_language(key, code.clone())
            .await
            .ok_or(AppError::NotEnabled)?;

        Ok((code, outcome))
    }

    /// Removes one language from a channel's existing configuration.
    ///
    /// Removing the last language disables auto-translate for the channel.
    ///
    /// # Arguments
    /// - `channel_id` - Configured channel
    /// - `language` - Language name or code
    ///
    /// # Returns
    /// - `Ok((LanguageCode, RemoveLanguageOutcome))` - Resolved code, and whether it
    ///   was removed, removed last, or not present
    /// - `Err(AppError::NotEnabled)` - The channel has no configuration
    /// - `Err(AppError::InvalidLanguage)` - `language` did not resolve
    pub async fn remove_language(
        &self,
        channel_id: u64,
        language: &str,
    ) -> Result<(LanguageCode, RemoveLanguageOutcome), AppError> {
        let key = ScopeKey::Channel(channel_id);
        self.require_enabled(key).await?;

        let code = language::resolve_required(language)?;

        let outcome = self
            .settings
            .remove_language(key, &code)
            .await
            .ok_or(AppError::NotEnabled)?;

        Ok((code, outcome))
    }

    /// Translates text into one explicitly requested language.
    ///
    /// # Arguments
    /// - `text` - Text to translate
    /// - `target` - Language name or code
    ///
    /// # Returns
    /// - `Ok(SingleTranslation)` - Detected source and translated text
    /// - `Err(AppError::InvalidLanguage)` - `target` did not resolve
    /// - `Err(AppError::TranslationErr)` - Backend failed
    pub async fn translate_one(
        &self,
        text: &str,
        target: &str,
    ) -> Result<SingleTranslation, AppError> {
        let target = language::resolve_required(target)?;
        let source = self.detector.detect(text);

        let translated = self.engine.translate_single(text, &target).await?;

        Ok(SingleTranslation {
            source,
            target,
            text: translated,
        })
    }

    /// Translates text into several languages at once.
    ///
    /// Targets sharing the detected source's base subtag are skipped. Per-target
    /// failures are kept in the result for display.
    ///
    /// # Arguments
    /// - `text` - Text to translate
    /// - `languages` - Comma-separated language names or codes
    ///
    /// # Returns
    /// - `Ok(MultiTranslation)` - Detected source and one outcome per remaining target
    /// - `Err(AppError::InvalidLanguage)` - An entry did not resolve
    /// - `Err(AppError::BadRequest)` - No languages were given, or every language
    ///   matches the source
    pub async fn translate_many(
        &self,
        text: &str,
        languages: &str,
    ) -> Result<MultiTranslation, AppError> {
        let targets = require_languages(languages)?;
        let source = self.detector.detect(text);

        let request = TranslationRequest::new(text, source.clone(), targets.codes());
        if request.is_empty() {
            return Err(AppError::BadRequest(format!(
                "The text is already in {} ({}), nothing to translate",
                language::display_name(&source),
                source
            )));
        }

        let outcomes = self.engine.fan_out(&request).await;

        Ok(MultiTranslation { source, outcomes })
    }

    /// Detects the language of text.
    pub fn detect(&self, text: &str) -> LanguageCode {
        self.detector.detect(text)
    }

    async fn enable(&self, key: ScopeKey, languages: &str) -> Result<LanguageSet, AppError> {
        let targets = require_languages(languages)?;
        self.settings.set(key, targets.clone()).await;
        Ok(targets)
    }

    async fn require_enabled(&self, key: ScopeKey) -> Result<(), AppError> {
        match self.settings.get(key).await {
            Some(_) => Ok(()),
            None => Err(AppError::NotEnabled),
        }
    }
}

fn require_languages(input: &str) -> Result<LanguageSet, AppError> {
    let codes = language::resolve_list(input)?;
    LanguageSet::from_codes(codes)
        .ok_or_else(|| AppError::BadRequest("No valid target languages specified".to_string()))
}

fn require_guild(guild_id: Option<u64>) -> Result<u64, AppError> {
    guild_id.ok_or_else(|| {
        AppError::BadRequest("This command can only be used in a server".to_string())
    })
}
