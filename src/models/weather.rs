use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: DateTime<Utc>,
    /// Short weekday name, e.g. "Mon".
    pub day: String,
    pub temp: i32,
    pub min_temp: i32,
    pub weather: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub destination: Option<String>,
}

#[derive(Serialize)]
pub struct ForecastResponse {
    pub forecast: Vec<ForecastDay>,
}
