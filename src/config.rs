use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use iced::Theme;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const CONFIG_FILE: &str = "config.json";
pub const API_URL_ENV: &str = "PLATFORM_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_SESSION_FILE: &str = "session.json";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub theme_name: String,
    #[serde(default = "default_api_url")]
    pub api_base_url: String,
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_session_file() -> PathBuf {
    PathBuf::from(DEFAULT_SESSION_FILE)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: theme_to_str(&Theme::Light).to_string(),
            api_base_url: default_api_url(),
            session_file: default_session_file(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// config.json, если он читается, иначе значения по умолчанию.
    /// Адрес API можно переопределить переменной окружения.
    pub fn load() -> Self {
        let mut config = load_config().unwrap_or_default();
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.api_base_url = url.trim().to_string();
            }
        }
        config
    }

    pub fn theme(&self) -> Theme {
        theme_from_str(&self.theme_name).unwrap_or(Theme::Light)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

pub fn load_config() -> Option<Config> {
    let contents = fs::read_to_string(CONFIG_FILE).ok()?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> Option<Config> {
    match serde_json::from_str(contents) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!(error = %err, "config.json не разобран, используются значения по умолчанию");
            None
        }
    }
}

pub fn save_config(config: &Config) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(CONFIG_FILE, json)?;
    Ok(())
}

pub fn theme_from_str(name: &str) -> Option<Theme> {
    Theme::ALL
        .iter()
        .find(|t| theme_to_str(t).eq_ignore_ascii_case(name))
        .cloned()
}

pub fn theme_to_str(theme: &Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
        Theme::Dracula => "Dracula",
        Theme::Nord => "Nord",
        Theme::SolarizedLight => "SolarizedLight",
        Theme::SolarizedDark => "SolarizedDark",
        Theme::GruvboxLight => "GruvboxLight",
        Theme::GruvboxDark => "GruvboxDark",
        Theme::CatppuccinLatte => "CatppuccinLatte",
        Theme::CatppuccinFrappe => "CatppuccinFrappe",
        Theme::CatppuccinMacchiato => "CatppuccinMacchiato",
        Theme::CatppuccinMocha => "CatppuccinMocha",
        Theme::TokyoNight => "TokyoNight",
        Theme::TokyoNightStorm => "TokyoNightStorm",
        Theme::TokyoNightLight => "TokyoNightLight",
        Theme::KanagawaWave => "KanagawaWave",
        Theme::KanagawaDragon => "KanagawaDragon",
        Theme::KanagawaLotus => "KanagawaLotus",
        Theme::Moonfly => "Moonfly",
        Theme::Nightfly => "Nightfly",
        Theme::Oxocarbon => "Oxocarbon",
        Theme::Ferra => "Ferra",
        _ => "Unknown",
    }
}
