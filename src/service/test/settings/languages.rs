use super::*;

/// Tests adding a language to an existing entry.
///
/// Expected: Added with the language appended at the end
#[tokio::test]
async fn adds_language_to_entry() {
    let harness = Harness::new(channel_settings(111, &["es"]), ScriptedBackend::new(), "en");

    let outcome = harness
        .store
        .add_language(ScopeKey::Channel(111), LanguageCode::new("fr"))
        .await;

    assert_eq!(outcome, Some(AddLanguageOutcome::Added(set(&["es", "fr"]))));
    let reloaded = harness.repository.load().await.unwrap();
    assert_eq!(reloaded.get(ScopeKey::Channel(111)), Some(&set(&["es", "fr"])));
}

/// Tests adding a language that is already configured.
///
/// Expected: AlreadyPresent with the set unchanged
#[tokio::test]
async fn adding_present_language_changes_nothing() {
    let harness = Harness::new(
        channel_settings(111, &["es", "fr"]),
        ScriptedBackend::new(),
        "en",
    );

    let outcome = harness
        .store
        .add_language(ScopeKey::Channel(111), LanguageCode::new("es"))
        .await;

    assert_eq!(
        outcome,
        Some(AddLanguageOutcome::AlreadyPresent(set(&["es", "fr"])))
    );
    assert_eq!(
        harness.store.get(ScopeKey::Channel(111)).await,
        Some(set(&["es", "fr"]))
    );
    assert!(!harness.test.settings_path().exists());
}

/// Tests adding a language where no entry exists.
///
/// Expected: None and no entry created
#[tokio::test]
async fn adding_without_entry_returns_none() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");

    let outcome = harness
        .store
        .add_language(ScopeKey::Channel(111), LanguageCode::new("es"))
        .await;

    assert_eq!(outcome, None);
    assert_eq!(harness.store.get(ScopeKey::Channel(111)).await, None);
}

/// Tests removing one of several languages.
///
/// Expected: Removed with remaining languages in order
#[tokio::test]
async fn removes_language_from_entry() {
    let harness = Harness::new(
        channel_settings(111, &["es", "fr", "de"]),
        ScriptedBackend::new(),
        "en",
    );

    let outcome = harness
        .store
        .remove_language(ScopeKey::Channel(111), &LanguageCode::new("fr"))
        .await;

    assert_eq!(
        outcome,
        Some(RemoveLanguageOutcome::Removed(set(&["es", "de"])))
    );
}

/// Tests removing the only configured language.
///
/// Verifies that the entry itself is deleted rather than left empty.
///
/// Expected: RemovedLast, entry gone from memory and disk
#[tokio::test]
async fn removing_last_language_deletes_entry() {
    let harness = Harness::new(channel_settings(111, &["es"]), ScriptedBackend::new(), "en");

    let outcome = harness
        .store
        .remove_language(ScopeKey::Channel(111), &LanguageCode::new("es"))
        .await;

    assert_eq!(outcome, Some(RemoveLanguageOutcome::RemovedLast));
    assert_eq!(harness.store.get(ScopeKey::Channel(111)).await, None);

    let written = harness.test.read_settings_json().unwrap();
    assert_eq!(written["auto_translate_channels"], serde_json::json!({}));
}

/// Tests removing a language that is not configured.
///
/// Expected: NotPresent with the set unchanged
#[tokio::test]
async fn removing_absent_language_changes_nothing() {
    let harness = Harness::new(channel_settings(111, &["es"]), ScriptedBackend::new(), "en");

    let outcome = harness
        .store
        .remove_language(ScopeKey::Channel(111), &LanguageCode::new("fr"))
        .await;

    assert_eq!(outcome, Some(RemoveLanguageOutcome::NotPresent(set(&["es"]))));
    assert!(!harness.test.settings_path().exists());
}
