use std::env;

use thiserror::Error;
use url::Url;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATABASE: &str = "Travel";
const GEMINI_MODEL: &str = "gemini-pro";
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const TRANSLATE_API_URL: &str = "https://libretranslate.com/translate";
const OPENWEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: Url,
}

#[derive(Debug, Clone)]
pub struct TranslateConfig {
    pub url: Url,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub mongodb_uri: String,
    pub database: String,
    pub jwt_secret: String,
    pub gemini: GeminiConfig,
    pub translate: TranslateConfig,
    pub weather: WeatherConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|err| ConfigError::Invalid {
                key: "PORT",
                reason: format!("{}", err),
            })?,
            None => PORT,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| HOST.to_string()),
            port,
            environment: get("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            mongodb_uri: require("MONGODB_URI")?,
            database: get("MONGODB_DATABASE").unwrap_or_else(|| DATABASE.to_string()),
            jwt_secret: require("JWT_SECRET")?,
            gemini: GeminiConfig {
                api_key: require("GEMINI_API_KEY")?,
                model: get("GEMINI_MODEL").unwrap_or_else(|| GEMINI_MODEL.to_string()),
                base_url: parse_url("GEMINI_API_URL", get("GEMINI_API_URL"), GEMINI_API_URL)?,
            },
            translate: TranslateConfig {
                url: parse_url(
                    "TRANSLATE_API_URL",
                    get("TRANSLATE_API_URL"),
                    TRANSLATE_API_URL,
                )?,
                api_key: get("TRANSLATE_API_KEY"),
            },
            weather: WeatherConfig {
                api_key: get("OPENWEATHER_API_KEY"),
                base_url: parse_url(
                    "OPENWEATHER_API_URL",
                    get("OPENWEATHER_API_URL"),
                    OPENWEATHER_API_URL,
                )?,
            },
        })
    }
}

fn parse_url(key: &'static str, value: Option<String>, default: &str) -> Result<Url, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
    })
}
