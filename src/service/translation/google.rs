//! Google Translate backend.
//!
//! Uses the public `translate_a/single` endpoint with the `gtx` client, which needs no
//! API key. The source language is left on `auto`: the backend's own detection sees
//! the full text including symbols and is at least as good as ours.

use serde_json::Value;
use serenity::async_trait;
use url::Url;

use crate::{
    error::translation::TranslationError, model::language::LanguageCode,
    service::translation::TranslationBackend,
};

/// Translation backend calling Google Translate over HTTP.
#[derive(Clone)]
pub struct GoogleTranslateBackend {
    client: reqwest::Client,
    api_url: Url,
}

impl GoogleTranslateBackend {
    /// Creates a new GoogleTranslateBackend instance.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `api_url` - Full URL of the `translate_a/single` endpoint
    ///
    /// # Returns
    /// - `GoogleTranslateBackend` - New backend
    pub fn new(client: reqwest::Client, api_url: Url) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl TranslationBackend for GoogleTranslateBackend {
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", api_code(target).as_str()),
                ("dt", "t"),
            ])
            .form(&[("q", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;

        parse_translation(&body)
    }
}

/// Converts a canonical code to the form Google expects.
///
/// Region subtags are upper-case on Google's side (`zh-CN`).
fn api_code(code: &LanguageCode) -> String {
    match code.as_str().split_once('-') {
        Some((base, region)) => format!("{}-{}", base, region.to_uppercase()),
        None => code.to_string(),
    }
}

/// Extracts translated text from a `translate_a/single` response.
///
/// The response is a nested array whose first element lists sentence segments as
/// `[translated, original, ...]`; long texts come back split into several segments.
fn parse_translation(body: &Value) -> Result<String, TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::MalformedResponse("missing sentence list".to_string()))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}
