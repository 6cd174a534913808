use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{config::WeatherConfig, error::ApiError, models::weather::ForecastDay};

const FORECAST_ENTRIES: &str = "5";

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastDay>, ApiError>;
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: MainReading,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReading {
    temp: f64,
    temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
    icon: String,
}

impl ForecastEntry {
    fn into_day(self) -> Option<ForecastDay> {
        let date = DateTime::<Utc>::from_timestamp(self.dt, 0)?;
        let condition = self.weather.into_iter().next()?;
        Some(ForecastDay {
            date,
            day: date.format("%a").to_string(),
            temp: self.main.temp.round() as i32,
            min_temp: self.main.temp_min.round() as i32,
            weather: condition.main,
            icon: condition.icon,
        })
    }
}

#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastDay>, ApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ApiError::UpstreamCallFailed("OPENWEATHER_API_KEY not configured".to_string())
        })?;

        let response = self
            .client
            .get(format!("{}/forecast", self.base_url))
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", "metric"),
                ("cnt", FORECAST_ENTRIES),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UpstreamCallFailed(format!(
                "weather service responded with status {}",
                status
            )));
        }

        let body: ForecastResponse = response.json().await?;
        Ok(body
            .list
            .into_iter()
            .filter_map(ForecastEntry::into_day)
            .collect())
    }
}

/// "Kyoto, Japan" -> "Kyoto".
pub fn city_from_destination(destination: &str) -> &str {
    destination.split(',').next().unwrap_or_default().trim()
}

/// Weather is decoration: any failure is logged and turns into an empty
/// forecast instead of failing the surrounding request.
pub async fn forecast_or_empty(provider: &dyn WeatherProvider, destination: &str) -> Vec<ForecastDay> {
    let city = city_from_destination(destination);
    if city.is_empty() {
        return Vec::new();
    }
    match provider.forecast(city).await {
        Ok(days) => days,
        Err(err) => {
            log::warn!("Failed to fetch weather data for {}: {}", city, err);
            Vec::new()
        }
    }
}
