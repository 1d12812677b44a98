mod api;
mod app;
mod config;
mod form;
mod screens;
mod store;
mod validation;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use api::{HttpApi, PlatformApi};
use app::App;
use config::Config;
use store::JsonFileStorage;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    info!(api = %config.api_base_url, "запуск клиента");

    let api: Arc<dyn PlatformApi> =
        Arc::new(HttpApi::new(&config.api_base_url, config.request_timeout())?);
    let storage = JsonFileStorage::new(config.session_file.clone());

    iced::application("Образовательная платформа", App::update, App::view)
        .theme(|app: &App| app.theme.clone())
        .window_size(iced::Size::new(1400.0, 800.0))
        .run_with(move || App::new(config, api, Box::new(storage)))?;
    Ok(())
}
