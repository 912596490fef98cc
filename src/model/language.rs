//! Language code domain models.
//!
//! Defines the canonical `LanguageCode` used throughout the bot and the ordered,
//! duplicate-free `LanguageSet` stored per channel and per guild. Codes are always
//! lowercase; region-qualified codes such as `zh-cn` keep their region subtag but
//! compare equivalent to any code sharing the same base subtag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical lowercase language code (`es`, `fr`, `zh-cn`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Default code used whenever detection has nothing to work with.
    pub const FALLBACK: &'static str = "en";

    /// Creates a language code, normalizing case and surrounding whitespace.
    ///
    /// No validation happens here; user input must go through the language resolver
    /// first. Codes coming back from the detector or the settings file are trusted.
    ///
    /// # Arguments
    /// - `code` - Raw code string
    ///
    /// # Returns
    /// - `LanguageCode` - Lowercased, trimmed code
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_lowercase())
    }

    /// The `en` fallback code.
    pub fn fallback() -> Self {
        Self(Self::FALLBACK.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language portion of the code, ignoring any region qualifier.
    ///
    /// # Returns
    /// - `&str` - `zh` for `zh-cn`, `es` for `es`
    pub fn base(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Checks whether two codes share the same base subtag.
    ///
    /// Used to drop translation targets that would translate a message into the
    /// language it was already written in.
    ///
    /// # Arguments
    /// - `other` - Code to compare against
    ///
    /// # Returns
    /// - `true` - Both codes have the same base subtag
    /// - `false` - Codes refer to different languages
    pub fn is_equivalent(&self, other: &LanguageCode) -> bool {
        self.base() == other.base()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of distinct language codes, never empty.
///
/// Insertion order is preserved because it determines the order translations are
/// rendered in. Construction rejects empty input so an empty configuration can never
/// be stored; removing the last code is modelled by [`LanguageSet::without`] returning
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageSet(Vec<LanguageCode>);

impl LanguageSet {
    /// Builds a set from codes, dropping duplicates while keeping first occurrence order.
    ///
    /// # Arguments
    /// - `codes` - Codes in the desired order
    ///
    /// # Returns
    /// - `Some(LanguageSet)` - At least one code was supplied
    /// - `None` - The input was empty
    pub fn from_codes(codes: impl IntoIterator<Item = LanguageCode>) -> Option<Self> {
        let mut unique: Vec<LanguageCode> = Vec::new();
        for code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }

        if unique.is_empty() {
            None
        } else {
            Some(Self(unique))
        }
    }

    pub fn contains(&self, code: &LanguageCode) -> bool {
        self.0.contains(code)
    }

    pub fn codes(&self) -> &[LanguageCode] {
        &self.0
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageCode> {
        self.0.iter()
    }

    /// Returns a copy of the set with `code` appended, or `None` if it is already present.
    pub fn with(&self, code: LanguageCode) -> Option<Self> {
        if self.contains(&code) {
            return None;
        }

        let mut codes = self.0.clone();
        codes.push(code);
        Some(Self(codes))
    }

    /// Returns a copy of the set without `code`.
    ///
    /// # Arguments
    /// - `code` - Code to remove
    ///
    /// # Returns
    /// - `Some(LanguageSet)` - Remaining codes, order preserved
    /// - `None` - `code` was the last code in the set
    pub fn without(&self, code: &LanguageCode) -> Option<Self> {
        Self::from_codes(self.0.iter().filter(|c| *c != code).cloned())
    }

    /// Renders the set as `**es**, **fr**` for command responses.
    pub fn display_bold(&self) -> String {
        self.0
            .iter()
            .map(|code| format!("**{}**", code))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'a> IntoIterator for &'a LanguageSet {
    type Item = &'a LanguageCode;
    type IntoIter = std::slice::Iter<'a, LanguageCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
