use super::*;

/// Tests starting from a settings file that cannot be parsed.
///
/// Verifies that a broken file yields empty configuration instead of an error.
///
/// Expected: store with no entries
#[tokio::test]
async fn starts_empty_from_corrupt_file() {
    let test = TestBuilder::new()
        .with_settings_raw("{ not json")
        .build()
        .unwrap();

    let store = SettingsStore::load(SettingsRepository::new(test.settings_path())).await;

    assert_eq!(store.snapshot().await, Settings::default());
}

/// Tests starting from an existing settings file.
///
/// Expected: channel and guild entries available through the store
#[tokio::test]
async fn loads_existing_entries() {
    let test = TestBuilder::new()
        .with_settings_json(serde_json::json!({
            "auto_translate_channels": { "111": "es" },
            "auto_translate_servers": { "222": ["de", "fr"] }
        }))
        .build()
        .unwrap();

    let store = SettingsStore::load(SettingsRepository::new(test.settings_path())).await;

    assert_eq!(store.get(ScopeKey::Channel(111)).await, Some(set(&["es"])));
    assert_eq!(store.targets_for(333, Some(222)).await, Some(set(&["de", "fr"])));
}
