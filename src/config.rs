use std::path::PathBuf;

use dioxus_logger::tracing::Level;
use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_SETTINGS_FILE: &str = "bot_settings.json";
const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

pub struct Config {
    pub discord_bot_token: String,

    pub settings_file: PathBuf,
    pub translate_api_url: Url,

    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            settings_file: std::env::var("SETTINGS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_FILE)),
            translate_api_url: parse_api_url(
                &std::env::var("TRANSLATE_API_URL")
                    .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
            )?,
            log_level: match std::env::var("LOG_LEVEL") {
                Ok(value) => parse_log_level(&value)?,
                Err(_) => Level::INFO,
            },
        })
    }
}

fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "LOG_LEVEL".to_string(),
            value: value.to_string(),
        })
}

fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim())
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "TRANSLATE_API_URL".to_string(),
            value: value.to_string(),
        })
}
