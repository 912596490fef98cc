//! In-memory auto-translate configuration backed by the settings file.
//!
//! `SettingsStore` owns the channel and guild configuration maps for the lifetime of
//! the process. Every mutation is applied and written to disk while the store's write
//! lock is held, so concurrent commands cannot interleave their read-modify-write
//! cycles and the file always reflects some complete in-memory state. Persistence
//! failures are logged; the in-memory state stays authoritative until the next
//! successful save.

use std::sync::Arc;

use dioxus_logger::tracing;
use tokio::sync::RwLock;

use crate::{
    data::settings::SettingsRepository,
    model::{
        language::{LanguageCode, LanguageSet},
        settings::{describe, AddLanguageOutcome, RemoveLanguageOutcome, ScopeKey, Settings},
    },
};

/// Shared auto-translate configuration store.
///
/// Cheap to clone; clones share the same maps.
#[derive(Clone)]
pub struct SettingsStore {
    settings: Arc<RwLock<Settings>>,
    repository: SettingsRepository,
}

impl SettingsStore {
    /// Loads the store from the settings file.
    ///
    /// A missing file is a normal first start. Any other read or parse failure is
    /// logged and the store starts empty; the broken file is left in place until the
    /// next configuration change overwrites it.
    ///
    /// # Arguments
    /// - `repository` - Settings file repository
    ///
    /// # Returns
    /// - `SettingsStore` - Store holding the loaded or empty configuration
    pub async fn load(repository: SettingsRepository) -> Self {
        let settings = match repository.load().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(
                    "Error loading settings from {}: {}",
                    repository.path().display(),
                    e
                );
                Settings::default()
            }
        };

        Self::with_settings(repository, settings)
    }

    /// Creates a store from already loaded settings.
    pub fn with_settings(repository: SettingsRepository, settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            repository,
        }
    }

    /// Gets the languages configured for a channel or guild.
    pub async fn get(&self, key: ScopeKey) -> Option<LanguageSet> {
        self.settings.read().await.get(key).cloned()
    }

    /// Resolves the target languages for a message.
    ///
    /// The channel configuration, if present, is used as-is; otherwise the guild
    /// configuration applies. The two are never merged.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the message was posted in
    /// - `guild_id` - Guild the message was posted in, if any
    ///
    /// # Returns
    /// - `Some(LanguageSet)` - Applicable targets
    /// - `None` - Auto-translate is not configured for this message
    pub async fn targets_for(&self, channel_id: u64, guild_id: Option<u64>) -> Option<LanguageSet> {
        self.settings
            .read()
            .await
            .targets_for(channel_id, guild_id)
            .cloned()
    }

    /// Copy of the complete configuration.
    pub async fn snapshot(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Replaces the languages of an entry, creating it if needed, and persists.
    ///
    /// # Arguments
    /// - `key` - Channel or guild entry
    /// - `languages` - New target languages
    pub async fn set(&self, key: ScopeKey, languages: LanguageSet) {
        let mut settings = self.settings.write().await;

        tracing::info!("Auto-translate for {} set to [{}]", key, describe(&languages));
        settings.insert(key, languages);

        self.persist(&settings).await;
    }

    /// Removes an entry and persists.
    ///
    /// Nothing is written if the entry did not exist.
    ///
    /// # Arguments
    /// - `key` - Channel or guild entry
    ///
    /// # Returns
    /// - `Some(LanguageSet)` - Languages the removed entry held
    /// - `None` - No entry existed
    pub async fn clear(&self, key: ScopeKey) -> Option<LanguageSet> {
        let mut settings = self.settings.write().await;

        let removed = settings.remove(key);
        if removed.is_some() {
            tracing::info!("Auto-translate for {} cleared", key);
            self.persist(&settings).await;
        }

        removed
    }

    /// Appends a language to an existing entry.
    ///
    /// # Arguments
    /// - `key` - Channel or guild entry
    /// - `code` - Language to add
    ///
    /// # Returns
    /// - `Some(AddLanguageOutcome::Added)` - Language appended and persisted
    /// - `Some(AddLanguageOutcome::AlreadyPresent)` - Nothing changed
    /// - `None` - No entry exists for `key`
    pub async fn add_language(&self, key: ScopeKey, code: LanguageCode) -> Option<AddLanguageOutcome> {
        let mut settings = self.settings.write().await;
        let current = settings.get(key)?.clone();

        let outcome = match current.with(code) {
            Some(updated) => {
                settings.insert(key, updated.clone());
                tracing::info!("Auto-translate for {} now [{}]", key, describe(&updated));
                self.persist(&settings).await;
                AddLanguageOutcome::Added(updated)
            }
            None => AddLanguageOutcome::AlreadyPresent(current),
        };

        Some(outcome)
    }

    /// Removes a language from an existing entry.
    ///
    /// Removing the last language deletes the entry, since an entry may never be
    /// empty.
    ///
    /// # Arguments
    /// - `key` - Channel or guild entry
    /// - `code` - Language to remove
    ///
    /// # Returns
    /// - `Some(RemoveLanguageOutcome::Removed)` - Language removed and persisted
    /// - `Some(RemoveLanguageOutcome::RemovedLast)` - Entry deleted and persisted
    /// - `Some(RemoveLanguageOutcome::NotPresent)` - Nothing changed
    /// - `None` - No entry exists for `key`
    pub async fn remove_language(
        &self,
        key: ScopeKey,
        code: &LanguageCode,
    ) -> Option<RemoveLanguageOutcome> {
        let mut settings = self.settings.write().await;
        let current = settings.get(key)?.clone();

        if !current.contains(code) {
            return Some(RemoveLanguageOutcome::NotPresent(current));
        }

        let outcome = match current.without(code) {
            Some(remaining) => {
                settings.insert(key, remaining.clone());
                RemoveLanguageOutcome::Removed(remaining)
            }
            None => {
                settings.remove(key);
                RemoveLanguageOutcome::RemovedLast
            }
        };

        tracing::info!("Removed {} from auto-translate for {}", code, key);
        self.persist(&settings).await;

        Some(outcome)
    }

    async fn persist(&self, settings: &Settings) {
        if let Err(e) = self.repository.save(settings).await {
            tracing::error!(
                "Error saving settings to {}: {}",
                self.repository.path().display(),
                e
            );
        }
    }
}
