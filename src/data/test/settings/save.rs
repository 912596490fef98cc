use super::*;

/// Tests that saving writes the list form for every entry.
///
/// Verifies the on-disk document shape: two top-level maps with string keys and
/// arrays of codes.
///
/// Expected: Ok with expected JSON document
#[tokio::test]
async fn writes_list_form() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let repo = SettingsRepository::new(test.settings_path());

    let mut settings = Settings::default();
    settings.insert(ScopeKey::Channel(111), set(&["es"]));
    settings.insert(ScopeKey::Guild(222), set(&["fr", "de"]));

    repo.save(&settings).await?;

    let stored = test.read_settings_json().unwrap();
    assert_eq!(
        stored,
        serde_json::json!({
            "auto_translate_channels": { "111": ["es"] },
            "auto_translate_servers": { "222": ["fr", "de"] }
        })
    );

    Ok(())
}

/// Tests that saving then loading reproduces the configuration.
///
/// Verifies same keys, same codes per key and same order after a round trip
/// through the file.
///
/// Expected: Ok with equal settings
#[tokio::test]
async fn reload_reproduces_saved_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let repo = SettingsRepository::new(test.settings_path());

    let mut settings = Settings::default();
    settings.insert(ScopeKey::Channel(111), set(&["ja", "es", "zh-cn"]));
    settings.insert(ScopeKey::Channel(112), set(&["en"]));
    settings.insert(ScopeKey::Guild(222), set(&["fr", "de"]));

    repo.save(&settings).await?;
    let reloaded = repo.load().await?;

    assert_eq!(reloaded, settings);

    Ok(())
}

/// Tests that saving replaces a legacy document entirely.
///
/// Verifies that after a save, scalar values from an older file are gone and only
/// the list form remains.
///
/// Expected: Ok with list form on disk
#[tokio::test]
async fn overwrites_legacy_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_raw(r#"{"auto_translate_channels": {"111": "es"}}"#)
        .build()
        .unwrap();
    let repo = SettingsRepository::new(test.settings_path());

    let settings = repo.load().await?;
    repo.save(&settings).await?;

    let stored = test.read_settings_json().unwrap();
    assert_eq!(stored["auto_translate_channels"]["111"], serde_json::json!(["es"]));

    Ok(())
}

/// Tests saving into a directory that does not exist.
///
/// Expected: Err(AppError::IoErr)
#[tokio::test]
async fn fails_when_directory_missing() {
    let test = TestBuilder::new().build().unwrap();
    let repo = SettingsRepository::new(test.dir.path().join("missing").join("settings.json"));

    let result = repo.save(&Settings::default()).await;

    assert!(matches!(result, Err(AppError::IoErr(_))));
}
