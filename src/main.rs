mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let http_client = startup::setup_reqwest_client()?;
    let state = startup::build_state(&config, http_client).await;

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await?;

    Ok(())
}
