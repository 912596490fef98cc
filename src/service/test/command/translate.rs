use super::*;

/// Tests a one-shot translation.
///
/// Expected: Ok with detected source, resolved target and backend text
#[tokio::test]
async fn translates_into_requested_language() -> Result<(), AppError> {
    let backend = ScriptedBackend::new().reply("es", "Buenos días");
    let harness = Harness::new(Settings::default(), backend, "en");

    let translation = harness
        .commands()
        .translate_one("Good morning", "spanish")
        .await?;

    assert_eq!(translation.source, LanguageCode::new("en"));
    assert_eq!(translation.target, LanguageCode::new("es"));
    assert_eq!(translation.text, "Buenos días");

    Ok(())
}

/// Tests a one-shot translation with an unknown language.
///
/// Expected: Err(InvalidLanguage) without calling the backend
#[tokio::test]
async fn one_shot_rejects_unknown_language() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");

    let result = harness
        .commands()
        .translate_one("Good morning", "elvish")
        .await;

    assert!(matches!(result, Err(AppError::InvalidLanguage(_))));
    assert!(harness.backend.calls().is_empty());
}

/// Tests a one-shot translation when the backend fails.
///
/// Expected: Err(TranslationErr)
#[tokio::test]
async fn one_shot_surfaces_backend_failure() {
    let backend = ScriptedBackend::new().fail("fr");
    let harness = Harness::new(Settings::default(), backend, "en");

    let result = harness.commands().translate_one("Good morning", "fr").await;

    assert!(matches!(result, Err(AppError::TranslationErr(_))));
}

/// Tests multi-target translation with a failing target.
///
/// Verifies that failures are reported per target rather than failing the command.
///
/// Expected: Ok with one outcome per target, fr marked failed
#[tokio::test]
async fn multi_translation_reports_failures() -> Result<(), AppError> {
    let backend = ScriptedBackend::new()
        .reply("es", "Hola")
        .fail("fr")
        .reply("de", "Hallo");
    let harness = Harness::new(Settings::default(), backend, "en");

    let result = harness
        .commands()
        .translate_many("Hello", "spanish, french, german")
        .await?;

    assert_eq!(result.source, LanguageCode::new("en"));
    assert_eq!(result.outcomes.len(), 3);
    assert_eq!(result.outcomes[0].text(), Some("Hola"));
    assert!(!result.outcomes[1].is_success());
    assert_eq!(result.outcomes[2].text(), Some("Hallo"));

    Ok(())
}

/// Tests multi-target translation where one target is the source language.
///
/// Verifies that a target sharing the detected language is skipped and never sent
/// to the backend.
///
/// Expected: Ok with only fr, backend called for fr only
#[tokio::test]
async fn multi_translation_skips_source_language() -> Result<(), AppError> {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");

    let result = harness
        .commands()
        .translate_many("Hello there everyone", "english, french")
        .await?;

    let targets: Vec<&str> = result.outcomes.iter().map(|o| o.target.as_str()).collect();
    assert_eq!(targets, vec!["fr"]);
    assert_eq!(harness.backend.calls(), vec!["fr".to_string()]);

    Ok(())
}

/// Tests multi-target translation where every target matches the source.
///
/// Expected: Err(BadRequest) without calling the backend
#[tokio::test]
async fn multi_translation_rejects_only_source_language() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "zh-cn");

    let result = harness
        .commands()
        .translate_many("你好，大家今天好吗", "chinese, zh-tw")
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(harness.backend.calls().is_empty());
}

/// Tests detection through the command service.
///
/// Expected: identifier result for long text, en for short text
#[tokio::test]
async fn detects_language() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "ja");
    let commands = harness.commands();

    assert_eq!(commands.detect("こんにちは、元気ですか"), LanguageCode::new("ja"));
    assert_eq!(commands.detect("hi"), LanguageCode::new("en"));
}
