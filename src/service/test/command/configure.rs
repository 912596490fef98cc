use super::*;

/// Tests enabling a channel from a mixed list of names and codes.
///
/// Expected: Ok with resolved codes in input order
#[tokio::test]
async fn enables_channel_with_names_and_codes() -> Result<(), AppError> {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");

    let targets = harness
        .commands()
        .enable_channel(CHANNEL_ID, "Spanish, fr, chinese")
        .await?;

    assert_eq!(targets, set(&["es", "fr", "zh-cn"]));
    assert_eq!(
        harness.store.get(ScopeKey::Channel(CHANNEL_ID)).await,
        Some(targets)
    );

    Ok(())
}

/// Tests enabling a channel with an unrecognised language.
///
/// Verifies that one bad entry rejects the whole list and nothing is configured.
///
/// Expected: Err(InvalidLanguage("xx-notalang")), configuration unchanged
#[tokio::test]
async fn rejects_unknown_language_without_mutation() {
    let harness = Harness::new(
        channel_settings(CHANNEL_ID, &["de"]),
        ScriptedBackend::new(),
        "en",
    );

    let result = harness
        .commands()
        .enable_channel(CHANNEL_ID, "es, xx-notalang")
        .await;

    assert!(matches!(result, Err(AppError::InvalidLanguage(ref input)) if input == "xx-notalang"));
    assert_eq!(
        harness.store.get(ScopeKey::Channel(CHANNEL_ID)).await,
        Some(set(&["de"]))
    );
}

/// Tests enabling with nothing but separators.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_language_list() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");

    let result = harness.commands().enable_channel(CHANNEL_ID, " , ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests disabling a configured channel.
///
/// Expected: true, entry removed
#[tokio::test]
async fn disables_channel() {
    let harness = Harness::new(
        channel_settings(CHANNEL_ID, &["es"]),
        ScriptedBackend::new(),
        "en",
    );

    assert!(harness.commands().disable_channel(CHANNEL_ID).await);
    assert!(!harness.commands().disable_channel(CHANNEL_ID).await);
    assert_eq!(harness.store.get(ScopeKey::Channel(CHANNEL_ID)).await, None);
}

/// Tests guild-wide enable and disable.
///
/// Expected: guild entry created then removed, channel entries untouched
#[tokio::test]
async fn enables_and_disables_guild() -> Result<(), AppError> {
    let harness = Harness::new(
        channel_settings(CHANNEL_ID, &["fr"]),
        ScriptedBackend::new(),
        "en",
    );
    let commands = harness.commands();

    let targets = commands.enable_guild(Some(GUILD_ID), "german").await?;
    assert_eq!(targets, set(&["de"]));
    assert_eq!(
        harness.store.targets_for(CHANNEL_ID, Some(GUILD_ID)).await,
        Some(set(&["fr"]))
    );
    assert_eq!(
        harness.store.targets_for(999, Some(GUILD_ID)).await,
        Some(set(&["de"]))
    );

    assert!(commands.disable_guild(Some(GUILD_ID)).await?);
    assert_eq!(harness.store.get(ScopeKey::Guild(GUILD_ID)).await, None);

    Ok(())
}

/// Tests guild commands outside a guild.
///
/// Expected: Err(BadRequest) for both enable and disable
#[tokio::test]
async fn guild_commands_require_guild() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");
    let commands = harness.commands();

    assert!(matches!(
        commands.enable_guild(None, "es").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        commands.disable_guild(None).await,
        Err(AppError::BadRequest(_))
    ));
}

/// Tests adding a language by name.
///
/// Expected: Added with the resolved code appended
#[tokio::test]
async fn adds_language_by_name() -> Result<(), AppError> {
    let harness = Harness::new(
        channel_settings(CHANNEL_ID, &["es"]),
        ScriptedBackend::new(),
        "en",
    );

    let (code, outcome) = harness.commands().add_language(CHANNEL_ID, "Japanese").await?;

    assert_eq!(code, LanguageCode::new("ja"));
    assert_eq!(outcome, AddLanguageOutcome::Added(set(&["es", "ja"])));

    Ok(())
}

/// Tests adding to a channel without auto-translate.
///
/// Verifies that the enabled check runs before language validation.
///
/// Expected: Err(NotEnabled) even for an invalid language
#[tokio::test]
async fn add_requires_enabled_channel() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");

    let result = harness.commands().add_language(CHANNEL_ID, "klingon").await;

    assert!(matches!(result, Err(AppError::NotEnabled)));
}

/// Tests adding an invalid language to a configured channel.
///
/// Expected: Err(InvalidLanguage), set unchanged
#[tokio::test]
async fn add_rejects_invalid_language() {
    let harness = Harness::new(
        channel_settings(CHANNEL_ID, &["es"]),
        ScriptedBackend::new(),
        "en",
    );

    let result = harness.commands().add_language(CHANNEL_ID, "klingon").await;

    assert!(matches!(result, Err(AppError::InvalidLanguage(_))));
    assert_eq!(
        harness.store.get(ScopeKey::Channel(CHANNEL_ID)).await,
        Some(set(&["es"]))
    );
}

/// Tests removing the last language through the command.
///
/// Expected: RemovedLast and auto-translate disabled
#[tokio::test]
async fn removing_last_language_disables_channel() -> Result<(), AppError> {
    let harness = Harness::new(
        channel_settings(CHANNEL_ID, &["es"]),
        ScriptedBackend::new(),
        "en",
    );

    let (code, outcome) = harness
        .commands()
        .remove_language(CHANNEL_ID, "spanish")
        .await?;

    assert_eq!(code, LanguageCode::new("es"));
    assert_eq!(outcome, RemoveLanguageOutcome::RemovedLast);
    assert_eq!(harness.store.get(ScopeKey::Channel(CHANNEL_ID)).await, None);

    Ok(())
}

/// Tests removing from a channel without auto-translate.
///
/// Expected: Err(NotEnabled)
#[tokio::test]
async fn remove_requires_enabled_channel() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");

    let result = harness.commands().remove_language(CHANNEL_ID, "es").await;

    assert!(matches!(result, Err(AppError::NotEnabled)));
}
