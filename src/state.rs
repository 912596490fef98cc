//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds the services the Discord
//! event handlers need. The state is built once during startup and handed to the
//! serenity event handler; serenity then runs every event on its own task, so all
//! mutable state inside the services sits behind async locks.
//!
//! The state includes:
//! - Settings store holding the channel and guild auto-translate configuration
//! - Auto-translate pipeline run on every message
//! - Lifecycle tracker linking originals to their translation replies
//! - Command service backing the slash and prefix commands

use std::sync::Arc;

use url::Url;

use crate::{
    data::settings::SettingsRepository,
    service::{
        command::CommandService,
        detector::LanguageDetector,
        lifecycle::LifecycleTracker,
        pipeline::AutoTranslatePipeline,
        settings::SettingsStore,
        translation::{google::GoogleTranslateBackend, TranslationEngine},
    },
};

/// Application state containing shared services.
///
/// All fields are cheap to clone; clones share the underlying maps and clients.
#[derive(Clone)]
pub struct AppState {
    /// Auto-translate configuration store.
    pub settings: SettingsStore,

    /// Pipeline deciding whether and how to translate each message.
    pub pipeline: AutoTranslatePipeline,

    /// Links from original messages to translation replies for deletion sync.
    pub lifecycle: LifecycleTracker,

    /// Business logic behind the bot's commands.
    pub commands: CommandService,
}

impl AppState {
    /// Creates a new application state, wiring the services together.
    ///
    /// The pipeline and command service share one settings store and one translation
    /// engine, so configuration changes made by commands apply to the very next
    /// message.
    ///
    /// # Arguments
    /// - `settings` - Loaded configuration store
    /// - `engine` - Translation engine used for auto-translate and commands
    /// - `detector` - Source language detector
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        settings: SettingsStore,
        engine: TranslationEngine,
        detector: LanguageDetector,
    ) -> Self {
        let lifecycle = LifecycleTracker::new();
        let pipeline = AutoTranslatePipeline::new(
            settings.clone(),
            detector.clone(),
            engine.clone(),
            lifecycle.clone(),
        );
        let commands = CommandService::new(settings.clone(), detector, engine);

        Self {
            settings,
            pipeline,
            lifecycle,
            commands,
        }
    }

    /// Builds the state with the production backends.
    ///
    /// # Arguments
    /// - `repository` - Settings file repository to load from and save to
    /// - `http_client` - HTTP client for the translation backend
    /// - `translate_api_url` - Translation endpoint URL
    ///
    /// # Returns
    /// - `AppState` - State using Google Translate and `whatlang`
    pub async fn load(
        repository: SettingsRepository,
        http_client: reqwest::Client,
        translate_api_url: Url,
    ) -> Self {
        let settings = SettingsStore::load(repository).await;
        let backend = GoogleTranslateBackend::new(http_client, translate_api_url);
        let engine = TranslationEngine::new(Arc::new(backend));

        Self::new(settings, engine, LanguageDetector::default())
    }
}
