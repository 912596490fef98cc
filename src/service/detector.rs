//! Source language detection.
//!
//! Wraps a statistical language identifier with the rules the auto-translate pipeline
//! relies on: emoji and pictographic symbols are stripped before identification, very
//! short text is treated as English without asking the identifier, and any identifier
//! failure also falls back to English. Detection therefore never fails outward.

use std::sync::Arc;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::language::LanguageCode;

/// Minimum number of characters left after stripping symbols for detection to run.
const MIN_DETECTABLE_CHARS: usize = 3;

/// Error returned by a language identifier.
#[derive(Error, Debug)]
pub enum DetectionError {
    /// The identifier could not settle on any language.
    #[error("no language identified")]
    Unidentified,

    /// The identifier recognised a language the bot has no code for.
    #[error("unsupported language '{0}'")]
    Unsupported(String),
}

/// Statistical language identification capability.
///
/// Implementations must be deterministic: identical input always produces the
/// identical result.
pub trait LanguageIdentifier: Send + Sync {
    /// Identifies the language of `text`.
    ///
    /// # Arguments
    /// - `text` - Text already stripped of decorative symbols
    ///
    /// # Returns
    /// - `Ok(LanguageCode)` - Canonical code of the identified language
    /// - `Err(DetectionError)` - Identification failed
    fn identify(&self, text: &str) -> Result<LanguageCode, DetectionError>;
}

/// Identifier backed by the `whatlang` trigram model.
///
/// `whatlang` has no random state, so repeated calls on the same text are
/// reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangIdentifier;

impl LanguageIdentifier for WhatlangIdentifier {
    fn identify(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        let info = whatlang::detect(text).ok_or(DetectionError::Unidentified)?;
        let iso639_3 = info.lang().code();

        iso639_1(iso639_3)
            .map(LanguageCode::new)
            .ok_or_else(|| DetectionError::Unsupported(iso639_3.to_string()))
    }
}

/// Maps `whatlang`'s ISO 639-3 codes to the canonical codes the bot uses.
///
/// Chinese maps to the simplified regional code and Hebrew to the legacy `iw` code,
/// matching what the language resolver produces for those names.
fn iso639_1(code: &str) -> Option<&'static str> {
    let mapped = match code {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh-cn",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "iw",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "no",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        _ => return None,
    };

    Some(mapped)
}

/// Checks whether a character is an emoji or other decorative symbol.
///
/// Covers emoticons, pictographs, transport and map symbols, regional indicator
/// flags, dingbats, miscellaneous symbols and arrows, box drawing and geometric
/// shapes, plus the joiners and variation selectors used to compose emoji sequences.
fn is_decorative(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF
            | 0x2190..=0x21FF
            | 0x2300..=0x23FF
            | 0x2460..=0x24FF
            | 0x2500..=0x27BF
            | 0x2900..=0x297F
            | 0x2B00..=0x2BFF
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
            | 0x200D
            | 0x20E3
            | 0xFE00..=0xFE0F
            | 0xE0020..=0xE007F
    )
}

/// Removes decorative symbols from text and trims the result.
pub fn strip_decorative(text: &str) -> String {
    text.chars()
        .filter(|c| !is_decorative(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Detects the source language of message text.
///
/// Cheap to clone; the identifier is shared.
#[derive(Clone)]
pub struct LanguageDetector {
    identifier: Arc<dyn LanguageIdentifier>,
}

impl LanguageDetector {
    /// Creates a new LanguageDetector instance.
    ///
    /// # Arguments
    /// - `identifier` - Identification capability to run on cleaned text
    ///
    /// # Returns
    /// - `LanguageDetector` - New detector
    pub fn new(identifier: Arc<dyn LanguageIdentifier>) -> Self {
        Self { identifier }
    }

    /// Detects the language of `text`.
    ///
    /// Strips decorative symbols first since emoji skew identification. When fewer
    /// than three characters remain the identifier is not invoked at all. Identifier
    /// errors are logged and mapped to `en`. A Catalan result is logged as a possible
    /// Spanish misidentification but returned unchanged.
    ///
    /// # Arguments
    /// - `text` - Raw message text
    ///
    /// # Returns
    /// - `LanguageCode` - Detected code, `en` on any fallback path
    pub fn detect(&self, text: &str) -> LanguageCode {
        let cleaned = strip_decorative(text);

        if cleaned.chars().count() < MIN_DETECTABLE_CHARS {
            tracing::debug!(
                "Text too short for detection: '{}' - defaulting to 'en'",
                preview(text, 50)
            );
            return LanguageCode::fallback();
        }

        match self.identifier.identify(&cleaned) {
            Ok(code) => {
                tracing::debug!("Detected language {} for text: {}", code, preview(&cleaned, 50));

                if code.as_str() == "ca" {
                    tracing::info!(
                        "Detected Catalan (ca) - may be Spanish (es). Text: {}",
                        preview(&cleaned, 100)
                    );
                }

                code
            }
            Err(e) => {
                tracing::warn!("Language detection error: {} - defaulting to 'en'", e);
                LanguageCode::fallback()
            }
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(Arc::new(WhatlangIdentifier))
    }
}

/// First `max` characters of `text`, for log lines.
pub(crate) fn preview(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
