//! Ambient auto-translate pipeline.
//!
//! Every message-created event passes through [`AutoTranslatePipeline::handle`]. The
//! message is checked against a fixed sequence of gates (automated author, blank
//! content, bare link, no configuration) and, if it survives them, is detected,
//! translated into every configured target and answered with a single reply. Nothing
//! in here fails outward: problems are logged and reported through the returned
//! [`PipelineOutcome`].

use dioxus_logger::tracing;

use crate::{
    model::{
        language::LanguageCode, message::IncomingMessage, settings::describe,
        translation::TranslationOutcome,
    },
    service::{
        detector::{preview, LanguageDetector},
        gateway::MessageGateway,
        language,
        lifecycle::LifecycleTracker,
        settings::SettingsStore,
        translation::TranslationEngine,
    },
};

/// Maximum characters of each translation included in an auto-translate reply.
pub const MAX_TRANSLATION_CHARS: usize = 500;

/// Discord's limit on embed description length.
pub const MAX_REPLY_CHARS: usize = 4096;

/// Why a message did not reach translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AutomatedAuthor,
    EmptyContent,
    BareUrl,
    NotConfigured,
}

/// What the pipeline did with a message.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Message stopped at a gate before detection.
    Skipped(SkipReason),

    /// Targets were configured but no translation succeeded, so nothing was posted.
    ///
    /// Also covers every target being equivalent to the detected source.
    NothingTranslated { source: LanguageCode },

    /// A reply was posted and linked to the original message.
    Posted {
        source: LanguageCode,
        reply_id: u64,
        /// Targets included in the reply, in order
        languages: Vec<LanguageCode>,
    },

    /// Translations were ready but Discord rejected the reply.
    PostFailed { source: LanguageCode, reason: String },
}

/// Detects, translates and replies to messages in configured channels and guilds.
#[derive(Clone)]
pub struct AutoTranslatePipeline {
    settings: SettingsStore,
    detector: LanguageDetector,
    engine: TranslationEngine,
    lifecycle: LifecycleTracker,
}

impl AutoTranslatePipeline {
    /// Creates a new AutoTranslatePipeline instance.
    ///
    /// # Arguments
    /// - `settings` - Channel and guild target configuration
    /// - `detector` - Source language detector
    /// - `engine` - Translation fan-out engine
    /// - `lifecycle` - Tracker that receives a link for every posted reply
    ///
    /// # Returns
    /// - `AutoTranslatePipeline` - New pipeline
    pub fn new(
        settings: SettingsStore,
        detector: LanguageDetector,
        engine: TranslationEngine,
        lifecycle: LifecycleTracker,
    ) -> Self {
        Self {
            settings,
            detector,
            engine,
            lifecycle,
        }
    }

    /// Runs one message through the pipeline.
    ///
    /// Gates are evaluated in order and the first that matches stops processing.
    /// Targets come from the channel configuration, falling back to the guild's.
    /// Translations that succeed are rendered in configured order into one reply
    /// posted without pinging the author, and the reply is linked to the original
    /// so it can be removed when the original is deleted.
    ///
    /// # Arguments
    /// - `message` - The message-created event
    /// - `gateway` - Discord operations used to post the reply
    ///
    /// # Returns
    /// - `PipelineOutcome` - How far the message got and what was posted
    pub async fn handle(
        &self,
        message: &IncomingMessage,
        gateway: &dyn MessageGateway,
    ) -> PipelineOutcome {
        if message.is_automated_author {
            return PipelineOutcome::Skipped(SkipReason::AutomatedAuthor);
        }

        if message.content.trim().is_empty() {
            return PipelineOutcome::Skipped(SkipReason::EmptyContent);
        }

        if is_bare_url(&message.content) {
            tracing::debug!("Skipping URL/GIF link: {}", preview(&message.content, 50));
            return PipelineOutcome::Skipped(SkipReason::BareUrl);
        }

        let Some(targets) = self
            .settings
            .targets_for(message.channel_id, message.guild_id)
            .await
        else {
            return PipelineOutcome::Skipped(SkipReason::NotConfigured);
        };

        tracing::debug!(
            "Auto-translating message {} in channel {} to [{}]",
            message.id,
            message.channel_id,
            describe(&targets)
        );

        let source = self.detector.detect(&message.content);
        let outcomes = self
            .engine
            .translate(&message.content, &source, targets.codes())
            .await;

        if outcomes.is_empty() {
            tracing::debug!("No translations for message {}", message.id);
            return PipelineOutcome::NothingTranslated { source };
        }

        let reply = compose_reply(&outcomes);
        let languages: Vec<LanguageCode> = outcomes
            .iter()
            .filter(|outcome| outcome.is_success())
            .map(|outcome| outcome.target.clone())
            .collect();

        match gateway
            .post_reply(message.channel_id, message.id, &reply)
            .await
        {
            Ok(reply_id) => {
                self.lifecycle
                    .link(message.id, message.channel_id, reply_id)
                    .await;

                PipelineOutcome::Posted {
                    source,
                    reply_id,
                    languages,
                }
            }
            Err(e) => {
                tracing::error!("Auto-translation error for message {}: {}", message.id, e);

                PipelineOutcome::PostFailed {
                    source,
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Checks whether content is nothing but a single http(s) link.
///
/// Such messages are typically GIFs or image embeds and carry no text worth
/// translating.
pub fn is_bare_url(content: &str) -> bool {
    let trimmed = content.trim();

    let Some(rest) = strip_prefix_ignore_case(trimmed, "https://")
        .or_else(|| strip_prefix_ignore_case(trimmed, "http://"))
    else {
        return false;
    };

    !rest.is_empty() && !rest.chars().any(char::is_whitespace)
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}

/// Renders successful outcomes as the body of an auto-translate reply.
///
/// One line per success in outcome order: flag, upper-case code in bold, then the
/// translation truncated to [`MAX_TRANSLATION_CHARS`]. Lines that would push the
/// body past [`MAX_REPLY_CHARS`] are dropped.
///
/// # Arguments
/// - `outcomes` - Fan-out results in configured target order
///
/// # Returns
/// - `String` - Reply body, empty if no outcome succeeded
pub fn compose_reply(outcomes: &[TranslationOutcome]) -> String {
    let mut reply = String::new();
    let mut length = 0;

    for outcome in outcomes {
        let Some(text) = outcome.text() else {
            continue;
        };

        let truncated: String = text.chars().take(MAX_TRANSLATION_CHARS).collect();
        let line = format!(
            "{} **{}:** {}\n",
            language::flag(&outcome.target),
            outcome.target.as_str().to_uppercase(),
            truncated
        );

        let line_length = line.chars().count();
        if length + line_length > MAX_REPLY_CHARS {
            tracing::warn!(
                "Auto-translate reply too long, dropping {} and later languages",
                outcome.target
            );
            break;
        }

        length += line_length;
        reply.push_str(&line);
    }

    reply
}
