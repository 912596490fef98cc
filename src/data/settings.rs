//! Settings file repository for auto-translate configuration persistence.
//!
//! This module provides the `SettingsRepository` which reads and writes the JSON
//! settings document holding per-channel and per-guild target languages. The document
//! shape is converted to and from the `Settings` domain model at this boundary,
//! upgrading legacy single-code values to one-element sets on read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::{
    language::{LanguageCode, LanguageSet},
    settings::Settings,
};

/// Stored value for one channel or guild.
///
/// Early versions of the settings file stored a single code as a plain string; the
/// writer only ever emits the list form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredLanguages {
    Single(String),
    Many(Vec<String>),
}

impl StoredLanguages {
    fn into_language_set(self) -> Option<LanguageSet> {
        let codes = match self {
            Self::Single(code) => vec![code],
            Self::Many(codes) => codes,
        };

        LanguageSet::from_codes(
            codes
                .iter()
                .filter(|code| !code.trim().is_empty())
                .map(LanguageCode::new),
        )
    }
}

/// On-disk settings document as read from the file.
#[derive(Debug, Default, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    auto_translate_channels: HashMap<u64, StoredLanguages>,
    #[serde(default)]
    auto_translate_servers: HashMap<u64, StoredLanguages>,
}

/// On-disk settings document as written to the file.
#[derive(Debug, Serialize)]
struct SettingsDocumentRef<'a> {
    auto_translate_channels: &'a HashMap<u64, LanguageSet>,
    auto_translate_servers: &'a HashMap<u64, LanguageSet>,
}

/// Repository providing file operations for auto-translate settings.
///
/// Holds the path of the settings file. Reads tolerate a missing file (treated as
/// empty configuration); writes go to a sibling temporary file which is then renamed
/// over the real one so a crash mid-write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository instance.
    ///
    /// # Arguments
    /// - `path` - Location of the JSON settings file
    ///
    /// # Returns
    /// - `SettingsRepository` - New repository instance
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings from the file.
    ///
    /// Missing file yields empty settings. Codes are normalized to lowercase, duplicates
    /// are dropped keeping first occurrence, legacy string values become one-element
    /// sets and entries with no codes are discarded.
    ///
    /// # Returns
    /// - `Ok(Settings)` - Settings read from the file, or empty if it does not exist
    /// - `Err(AppError::IoErr)` - File exists but could not be read
    /// - `Err(AppError::JsonErr)` - File contents are not a valid settings document
    pub async fn load(&self) -> Result<Settings, AppError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "Settings file {} does not exist yet",
                    self.path.display()
                );
                return Ok(Settings::default());
            }
            Err(e) => return Err(e.into()),
        };

        let document: SettingsDocument = serde_json::from_str(&contents)?;

        Ok(Settings {
            channels: Self::upgrade_entries(document.auto_translate_channels, "channel"),
            guilds: Self::upgrade_entries(document.auto_translate_servers, "guild"),
        })
    }

    /// Writes settings to the file, replacing its previous contents.
    ///
    /// # Arguments
    /// - `settings` - Complete configuration to persist
    ///
    /// # Returns
    /// - `Ok(())` - File written and renamed into place
    /// - `Err(AppError::IoErr)` - Write or rename failed; the previous file is untouched
    /// - `Err(AppError::JsonErr)` - Settings could not be encoded
    pub async fn save(&self, settings: &Settings) -> Result<(), AppError> {
        let document = SettingsDocumentRef {
            auto_translate_channels: &settings.channels,
            auto_translate_servers: &settings.guilds,
        };
        let contents = serde_json::to_string_pretty(&document)?;

        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        tokio::fs::write(&tmp_path, contents).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }

    fn upgrade_entries(
        entries: HashMap<u64, StoredLanguages>,
        kind: &str,
    ) -> HashMap<u64, LanguageSet> {
        entries
            .into_iter()
            .filter_map(|(id, stored)| match stored.into_language_set() {
                Some(languages) => Some((id, languages)),
                None => {
                    tracing::warn!("Dropping empty auto-translate entry for {} {}", kind, id);
                    None
                }
            })
            .collect()
    }
}
