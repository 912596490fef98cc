//! Translation fan-out.
//!
//! The `TranslationEngine` takes one source text and a list of target languages and
//! translates into every target concurrently, one spawned task per target. Each task
//! yields a `TranslationOutcome` carrying either text or a failure reason, so a failing
//! backend call for one language never affects its siblings. Outcomes are gathered by
//! target position, not completion order.

pub mod google;

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::async_trait;

use crate::{
    error::translation::TranslationError,
    model::{
        language::LanguageCode,
        translation::{TranslationOutcome, TranslationRequest},
    },
    service::language,
};

/// External machine translation capability.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translates `text` into `target`.
    ///
    /// The backend is expected to detect the source language itself.
    ///
    /// # Arguments
    /// - `text` - Text to translate
    /// - `target` - Canonical target language code
    ///
    /// # Returns
    /// - `Ok(String)` - Translated text, possibly empty if the backend had nothing
    /// - `Err(TranslationError)` - Request failed or response was unusable
    async fn translate(&self, text: &str, target: &LanguageCode)
        -> Result<String, TranslationError>;
}

/// Concurrent multi-target translator.
///
/// Cheap to clone; the backend is shared between clones and spawned tasks.
#[derive(Clone)]
pub struct TranslationEngine {
    backend: Arc<dyn TranslationBackend>,
}

impl TranslationEngine {
    /// Creates a new TranslationEngine instance.
    ///
    /// # Arguments
    /// - `backend` - Translation backend every target is dispatched to
    ///
    /// # Returns
    /// - `TranslationEngine` - New engine
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        Self { backend }
    }

    /// Translates text into each target that differs from the source language.
    ///
    /// Targets sharing the source's base subtag are omitted entirely. When no target
    /// produced a translation, either because all were omitted or all failed, the
    /// result is empty and callers must not post anything.
    ///
    /// # Arguments
    /// - `text` - Source text
    /// - `source` - Detected source language
    /// - `targets` - Target languages in rendering order
    ///
    /// # Returns
    /// - `Vec<TranslationOutcome>` - One outcome per remaining target in request order,
    ///   or empty if nothing succeeded
    pub async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        targets: &[LanguageCode],
    ) -> Vec<TranslationOutcome> {
        let request = TranslationRequest::new(text, source.clone(), targets);
        let outcomes = self.fan_out(&request).await;

        if outcomes.iter().any(TranslationOutcome::is_success) {
            outcomes
        } else {
            Vec::new()
        }
    }

    /// Translates text into a single target without any source filtering.
    ///
    /// Used by one-shot commands, where the caller explicitly asked for `target`.
    /// An empty backend result counts as an error.
    ///
    /// # Arguments
    /// - `text` - Source text
    /// - `target` - Target language
    ///
    /// # Returns
    /// - `Ok(String)` - Translated text
    /// - `Err(TranslationError)` - Backend failed or returned nothing
    pub async fn translate_single(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let translated = self.backend.translate(text, target).await?;

        if translated.trim().is_empty() {
            return Err(TranslationError::EmptyResult(target.to_string()));
        }

        Ok(translated)
    }

    /// Dispatches every target of a request concurrently and waits for all of them.
    ///
    /// Unlike [`translate`](Self::translate) this keeps failure outcomes even when
    /// every target failed, for callers that report failures to the user.
    ///
    /// # Arguments
    /// - `request` - Prepared request; its targets are used as given
    ///
    /// # Returns
    /// - `Vec<TranslationOutcome>` - Exactly one outcome per target, in target order
    pub async fn fan_out(&self, request: &TranslationRequest) -> Vec<TranslationOutcome> {
        let text: Arc<str> = Arc::from(request.text.as_str());

        let handles: Vec<_> = request
            .targets
            .iter()
            .cloned()
            .map(|target| {
                let backend = Arc::clone(&self.backend);
                let text = Arc::clone(&text);
                tokio::spawn(async move { translate_one(backend.as_ref(), &text, target).await })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (target, handle) in request.targets.iter().zip(handles) {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Translation task for {} did not complete: {}", target, e);
                    failure(target.clone(), TranslationError::TaskAborted(e.to_string()))
                }
            };
            outcomes.push(outcome);
        }

        outcomes
    }
}

async fn translate_one(
    backend: &dyn TranslationBackend,
    text: &str,
    target: LanguageCode,
) -> TranslationOutcome {
    match backend.translate(text, &target).await {
        Ok(translated) if !translated.trim().is_empty() => TranslationOutcome {
            display_name: language::display_name(&target),
            target,
            result: Ok(translated),
        },
        Ok(_) => {
            tracing::warn!("Empty translation for {}, skipping", target);
            let err = TranslationError::EmptyResult(target.to_string());
            failure(target, err)
        }
        Err(e) => {
            tracing::warn!("Error translating to {}: {}", target, e);
            failure(target, e)
        }
    }
}

fn failure(target: LanguageCode, err: TranslationError) -> TranslationOutcome {
    TranslationOutcome {
        display_name: language::display_name(&target),
        target,
        result: Err(err.to_string()),
    }
}
