use super::*;

/// Tests that setting an entry writes it to the settings file.
///
/// Verifies that a fresh store reading the same file sees identical configuration.
///
/// Expected: reloaded settings equal the in-memory settings
#[tokio::test]
async fn persists_and_reloads_entries() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");

    harness.store.set(ScopeKey::Channel(111), set(&["es", "fr"])).await;
    harness.store.set(ScopeKey::Guild(222), set(&["de"])).await;

    let reloaded = SettingsStore::load(harness.repository.clone()).await;
    assert_eq!(reloaded.snapshot().await, harness.store.snapshot().await);

    let written = harness.test.read_settings_json().unwrap();
    assert_eq!(
        written,
        serde_json::json!({
            "auto_translate_channels": { "111": ["es", "fr"] },
            "auto_translate_servers": { "222": ["de"] }
        })
    );
}

/// Tests replacing an existing entry.
///
/// Expected: new languages replace the old ones entirely
#[tokio::test]
async fn replaces_existing_entry() {
    let harness = Harness::new(
        channel_settings(111, &["es", "fr"]),
        ScriptedBackend::new(),
        "en",
    );

    harness.store.set(ScopeKey::Channel(111), set(&["ja"])).await;

    assert_eq!(harness.store.get(ScopeKey::Channel(111)).await, Some(set(&["ja"])));
}

/// Tests clearing an entry.
///
/// Expected: entry removed from memory and from the file
#[tokio::test]
async fn clears_entry_and_persists() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");
    harness.store.set(ScopeKey::Channel(111), set(&["es"])).await;

    let removed = harness.store.clear(ScopeKey::Channel(111)).await;

    assert_eq!(removed, Some(set(&["es"])));
    assert_eq!(harness.store.get(ScopeKey::Channel(111)).await, None);

    let reloaded = harness.repository.load().await.unwrap();
    assert_eq!(reloaded, Settings::default());
}

/// Tests clearing an entry that does not exist.
///
/// Expected: None and no settings file written
#[tokio::test]
async fn clearing_missing_entry_writes_nothing() {
    let harness = Harness::new(Settings::default(), ScriptedBackend::new(), "en");

    let removed = harness.store.clear(ScopeKey::Guild(222)).await;

    assert_eq!(removed, None);
    assert!(!harness.test.settings_path().exists());
}

/// Tests concurrent mutations of the same entry.
///
/// Verifies that read-modify-write cycles do not lose updates.
///
/// Expected: every added language present in memory and on disk
#[tokio::test]
async fn concurrent_additions_are_not_lost() {
    let harness = Harness::new(channel_settings(111, &["en"]), ScriptedBackend::new(), "en");

    let handles: Vec<_> = ["es", "fr", "de", "it", "ja"]
        .into_iter()
        .map(|code| {
            let store = harness.store.clone();
            tokio::spawn(async move {
                store
                    .add_language(ScopeKey::Channel(111), LanguageCode::new(code))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let current = harness.store.get(ScopeKey::Channel(111)).await.unwrap();
    assert_eq!(current.len(), 6);

    let reloaded = harness.repository.load().await.unwrap();
    assert_eq!(reloaded.get(ScopeKey::Channel(111)).unwrap().len(), 6);
}
