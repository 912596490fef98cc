use dioxus_logger::tracing;

use crate::{
    config::Config, data::settings::SettingsRepository, error::AppError, state::AppState,
};

/// Builds the HTTP client used for translation requests.
///
/// Redirects are disabled; the translation endpoint answers directly and following
/// redirects would let a misconfigured URL send message text elsewhere.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError)` - Client could not be built
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Loads the settings file and builds the application state.
///
/// # Arguments
/// - `config` - Application configuration
/// - `http_client` - HTTP client for the translation backend
///
/// # Returns
/// - `AppState` - State with configuration loaded (empty if the file was unusable)
pub async fn build_state(config: &Config, http_client: reqwest::Client) -> AppState {
    let repository = SettingsRepository::new(&config.settings_file);
    let state = AppState::load(repository, http_client, config.translate_api_url.clone()).await;

    let settings = state.settings.snapshot().await;
    tracing::info!(
        "Loaded settings from {}: {} channel(s), {} server(s)",
        config.settings_file.display(),
        settings.channels.len(),
        settings.guilds.len()
    );

    state
}
