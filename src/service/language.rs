//! Language name and code resolution.
//!
//! Normalizes whatever a user typed into a command ("Spanish", "es", "zh-CN") into a
//! canonical `LanguageCode`, and provides the display data (names, flags) used when
//! rendering translations. Resolution is purely table-driven, so the same input always
//! yields the same code.

use crate::{error::AppError, model::language::LanguageCode};

/// Region-qualified codes accepted as-is.
const REGION_EXCEPTIONS: &[&str] = &["zh-cn", "zh-tw"];

/// Maximum number of autocomplete choices Discord accepts.
const MAX_SUGGESTIONS: usize = 25;

/// Supported language names and their canonical codes.
///
/// Order here is the order suggestions are offered in when the user has not typed
/// anything yet.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("english", "en"),
    ("spanish", "es"),
    ("french", "fr"),
    ("german", "de"),
    ("italian", "it"),
    ("portuguese", "pt"),
    ("russian", "ru"),
    ("japanese", "ja"),
    ("korean", "ko"),
    ("chinese", "zh-cn"),
    ("arabic", "ar"),
    ("hindi", "hi"),
    ("dutch", "nl"),
    ("polish", "pl"),
    ("turkish", "tr"),
    ("vietnamese", "vi"),
    ("thai", "th"),
    ("swedish", "sv"),
    ("norwegian", "no"),
    ("danish", "da"),
    ("finnish", "fi"),
    ("greek", "el"),
    ("czech", "cs"),
    ("romanian", "ro"),
    ("hungarian", "hu"),
    ("hebrew", "iw"),
    ("indonesian", "id"),
    ("malay", "ms"),
    ("filipino", "tl"),
    ("ukrainian", "uk"),
    ("bengali", "bn"),
    ("tamil", "ta"),
];

/// Flag emoji shown next to each translation.
const LANGUAGE_FLAGS: &[(&str, &str)] = &[
    ("en", "🇬🇧"),
    ("es", "🇪🇸"),
    ("fr", "🇫🇷"),
    ("de", "🇩🇪"),
    ("it", "🇮🇹"),
    ("pt", "🇵🇹"),
    ("ru", "🇷🇺"),
    ("ja", "🇯🇵"),
    ("ko", "🇰🇷"),
    ("zh-cn", "🇨🇳"),
    ("zh-tw", "🇹🇼"),
    ("ar", "🇸🇦"),
    ("hi", "🇮🇳"),
    ("nl", "🇳🇱"),
    ("pl", "🇵🇱"),
    ("tr", "🇹🇷"),
    ("vi", "🇻🇳"),
    ("th", "🇹🇭"),
    ("sv", "🇸🇪"),
    ("no", "🇳🇴"),
    ("da", "🇩🇰"),
    ("fi", "🇫🇮"),
    ("el", "🇬🇷"),
    ("cs", "🇨🇿"),
    ("ro", "🇷🇴"),
    ("hu", "🇭🇺"),
    ("iw", "🇮🇱"),
    ("id", "🇮🇩"),
    ("ms", "🇲🇾"),
    ("tl", "🇵🇭"),
    ("uk", "🇺🇦"),
    ("bn", "🇧🇩"),
    ("ta", "🇮🇳"),
];

const FALLBACK_FLAG: &str = "🌐";

/// Resolves a language name or code to its canonical code.
///
/// Input is lower-cased and trimmed. Two-letter codes and known region-qualified
/// codes are returned unchanged; anything else is looked up by language name.
///
/// # Arguments
/// - `input` - Language name or code as typed by the user
///
/// # Returns
/// - `Some(LanguageCode)` - Canonical code
/// - `None` - Input is not a recognised language; callers must reject it
pub fn resolve(input: &str) -> Option<LanguageCode> {
    let normalized = input.trim().to_lowercase();

    let is_two_letter_code =
        normalized.len() == 2 && normalized.chars().all(|c| c.is_ascii_alphabetic());
    if is_two_letter_code || REGION_EXCEPTIONS.contains(&normalized.as_str()) {
        return Some(LanguageCode::new(normalized));
    }

    LANGUAGE_NAMES
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, code)| LanguageCode::new(code))
}

/// Resolves a comma-separated list of languages.
///
/// Blank entries (such as a trailing comma) are ignored and duplicates collapse onto
/// their first occurrence. The first entry that does not resolve rejects the whole
/// list.
///
/// # Arguments
/// - `input` - Comma-separated names or codes, e.g. `"spanish, fr"`
///
/// # Returns
/// - `Ok(Vec<LanguageCode>)` - Codes in input order, possibly empty
/// - `Err(AppError::InvalidLanguage)` - An entry did not resolve
pub fn resolve_list(input: &str) -> Result<Vec<LanguageCode>, AppError> {
    let mut codes: Vec<LanguageCode> = Vec::new();

    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let code = resolve(entry).ok_or_else(|| AppError::InvalidLanguage(entry.to_string()))?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    Ok(codes)
}

/// Resolves a single required language, turning `None` into a validation error.
pub fn resolve_required(input: &str) -> Result<LanguageCode, AppError> {
    resolve(input).ok_or_else(|| AppError::InvalidLanguage(input.trim().to_string()))
}

/// Human readable name for a code, falling back to the code itself.
///
/// # Returns
/// - `String` - Title-cased language name such as `Spanish`, or the raw code
pub fn display_name(code: &LanguageCode) -> String {
    LANGUAGE_NAMES
        .iter()
        .find(|(_, c)| *c == code.as_str())
        .map(|(name, _)| title_case(name))
        .unwrap_or_else(|| code.to_string())
}

/// Flag emoji for a code, or a globe for languages without one.
pub fn flag(code: &LanguageCode) -> &'static str {
    LANGUAGE_FLAGS
        .iter()
        .find(|(c, _)| *c == code.as_str())
        .map(|(_, flag)| *flag)
        .unwrap_or(FALLBACK_FLAG)
}

/// All supported languages as `(name, code)` pairs sorted by name.
pub fn supported() -> Vec<(&'static str, &'static str)> {
    let mut languages = LANGUAGE_NAMES.to_vec();
    languages.sort_by_key(|(name, _)| *name);
    languages
}

/// Autocomplete suggestion for a language option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Label shown in the Discord client
    pub name: String,
    /// Value inserted into the option when chosen
    pub value: String,
}

/// Suggests language names matching what the user is typing.
///
/// Comma-separated input is supported: only the segment after the last comma is
/// matched, and everything before it is kept as a prefix in both the label and the
/// value so picking a suggestion extends the list instead of replacing it.
///
/// # Arguments
/// - `current` - Current contents of the option field
///
/// # Returns
/// - `Vec<Suggestion>` - At most 25 suggestions, substring matches on language name
pub fn suggest(current: &str) -> Vec<Suggestion> {
    let (prefix, fragment) = match current.rsplit_once(',') {
        Some((before, last)) => (Some(format!("{},", before)), last.trim()),
        None => (None, current.trim()),
    };
    let fragment = fragment.to_lowercase();

    LANGUAGE_NAMES
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| fragment.is_empty() || name.contains(fragment.as_str()))
        .take(MAX_SUGGESTIONS)
        .map(|name| match &prefix {
            Some(prefix) => Suggestion {
                name: format!("{} {}", prefix, title_case(name)),
                value: format!("{} {}", prefix, name),
            },
            None => Suggestion {
                name: title_case(name),
                value: name.to_string(),
            },
        })
        .collect()
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
