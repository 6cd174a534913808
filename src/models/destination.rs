use serde::{Deserialize, Serialize};

use crate::models::weather::ForecastDay;

/// Generated entities come back with either numeric or string ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeasonalWeather {
    pub spring: Option<String>,
    pub summer: Option<String>,
    pub fall: Option<String>,
    pub winter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Attraction {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDetail {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub weather: Option<SeasonalWeather>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DestinationSort {
    #[default]
    Default,
    NameAsc,
    NameDesc,
    RatingHigh,
    RatingLow,
    BudgetLow,
    BudgetHigh,
}

#[derive(Debug, Default, Deserialize)]
pub struct DestinationQuery {
    /// Comma-separated, fed into the prompt.
    pub interests: Option<String>,
    pub budget: Option<String>,
    pub duration: Option<u32>,
    pub search: Option<String>,
    /// Comma-separated tag filter applied to the generated list.
    pub tags: Option<String>,
    #[serde(default)]
    pub sort: DestinationSort,
}

#[derive(Serialize)]
pub struct DestinationsResponse {
    pub destinations: Vec<Destination>,
}

#[derive(Serialize)]
pub struct DestinationDetailResponse {
    pub destination: DestinationDetail,
    pub forecast: Vec<ForecastDay>,
}
