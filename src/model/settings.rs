//! Domain models for auto-translate configuration.
//!
//! Auto-translate targets are configured per channel and per guild in two
//! independent key-spaces. A channel entry, when present, fully replaces the guild
//! entry for that channel; the two sets are never merged.

use std::collections::HashMap;
use std::fmt;

use crate::model::language::{LanguageCode, LanguageSet};

/// Identifies one configuration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// Channel-specific configuration
    Channel(u64),
    /// Guild-wide configuration
    Guild(u64),
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel(id) => write!(f, "channel {}", id),
            Self::Guild(id) => write!(f, "guild {}", id),
        }
    }
}

/// Complete auto-translate configuration for all channels and guilds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Channel ID to target languages
    pub channels: HashMap<u64, LanguageSet>,
    /// Guild ID to target languages
    pub guilds: HashMap<u64, LanguageSet>,
}

impl Settings {
    pub fn get(&self, key: ScopeKey) -> Option<&LanguageSet> {
        match key {
            ScopeKey::Channel(id) => self.channels.get(&id),
            ScopeKey::Guild(id) => self.guilds.get(&id),
        }
    }

    pub fn insert(&mut self, key: ScopeKey, languages: LanguageSet) {
        match key {
            ScopeKey::Channel(id) => self.channels.insert(id, languages),
            ScopeKey::Guild(id) => self.guilds.insert(id, languages),
        };
    }

    /// Removes an entry, returning the languages it held.
    pub fn remove(&mut self, key: ScopeKey) -> Option<LanguageSet> {
        match key {
            ScopeKey::Channel(id) => self.channels.remove(&id),
            ScopeKey::Guild(id) => self.guilds.remove(&id),
        }
    }

    /// Resolves the target languages that apply to a message.
    ///
    /// The channel entry takes precedence; the guild entry is only consulted when the
    /// channel has none and the message came from a guild.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the message was posted in
    /// - `guild_id` - Guild the message was posted in, if any
    ///
    /// # Returns
    /// - `Some(&LanguageSet)` - Applicable targets
    /// - `None` - Auto-translate is not configured for this message
    pub fn targets_for(&self, channel_id: u64, guild_id: Option<u64>) -> Option<&LanguageSet> {
        self.channels
            .get(&channel_id)
            .or_else(|| guild_id.and_then(|id| self.guilds.get(&id)))
    }
}

/// Result of adding a language to a configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub enum AddLanguageOutcome {
    /// Language appended; contains the updated set
    Added(LanguageSet),
    /// Language was already configured, nothing changed
    AlreadyPresent(LanguageSet),
}

/// Result of removing a language from a configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveLanguageOutcome {
    /// Language removed; contains the remaining set
    Removed(LanguageSet),
    /// Language removed and nothing remains, the entry was deleted
    RemovedLast,
    /// Language was not configured, nothing changed
    NotPresent(LanguageSet),
}

/// Renders a set as `es, fr` for log output.
pub fn describe(languages: &LanguageSet) -> String {
    languages
        .iter()
        .map(LanguageCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
