//! Domain models for translation requests and their per-target outcomes.

use crate::model::language::LanguageCode;

/// Work handed to the fan-out engine for a single source text.
///
/// Targets equivalent to the source language are removed at construction, along
/// with duplicates. Remaining targets keep the order they were requested in.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Detected language of `text`
    pub source: LanguageCode,
    /// Targets to translate into, in rendering order
    pub targets: Vec<LanguageCode>,
}

impl TranslationRequest {
    /// Creates a request, filtering targets that need no translation.
    ///
    /// # Arguments
    /// - `text` - Source text
    /// - `source` - Detected source language
    /// - `targets` - Requested target codes in order
    ///
    /// # Returns
    /// - `TranslationRequest` - Request with self-equivalent and duplicate targets removed
    pub fn new<'a>(
        text: impl Into<String>,
        source: LanguageCode,
        targets: impl IntoIterator<Item = &'a LanguageCode>,
    ) -> Self {
        let mut filtered: Vec<LanguageCode> = Vec::new();
        for target in targets {
            if target.is_equivalent(&source) || filtered.contains(target) {
                continue;
            }
            filtered.push(target.clone());
        }

        Self {
            text: text.into(),
            source,
            targets: filtered,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Result of translating into one target language.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    /// Target language code
    pub target: LanguageCode,
    /// Human readable name of the target language
    pub display_name: String,
    /// Translated text or the reason the translation failed
    pub result: Result<String, String>,
}

impl TranslationOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Translated text, if this target succeeded.
    pub fn text(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }
}

/// Result of a one-shot `/translate` or `!tr` command.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleTranslation {
    pub source: LanguageCode,
    pub target: LanguageCode,
    pub text: String,
}

/// Result of a `/multitranslate` command, failures included.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiTranslation {
    pub source: LanguageCode,
    /// One outcome per requested target, in request order
    pub outcomes: Vec<TranslationOutcome>,
}
