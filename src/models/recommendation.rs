use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::destination::EntityId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Restaurants,
    Attractions,
    Activities,
    #[default]
    All,
}

impl RecommendationKind {
    /// Categories an `All` response is keyed by.
    pub const CATEGORIES: [RecommendationKind; 3] = [
        RecommendationKind::Restaurants,
        RecommendationKind::Attractions,
        RecommendationKind::Activities,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RecommendationKind::Restaurants => "restaurants",
            RecommendationKind::Attractions => "attractions",
            RecommendationKind::Activities => "activities",
            RecommendationKind::All => "all",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Models sometimes answer with a street address instead of coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PlaceLocation {
    Point(GeoPoint),
    Address(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Recommendation {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location: Option<PlaceLocation>,
    /// Category specific fields (cuisine, entrance fee, ...) passed through untouched.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendationSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<Recommendation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attractions: Option<Vec<Recommendation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Recommendation>>,
}

impl RecommendationSet {
    pub fn category_mut(&mut self, kind: RecommendationKind) -> Option<&mut Option<Vec<Recommendation>>> {
        match kind {
            RecommendationKind::Restaurants => Some(&mut self.restaurants),
            RecommendationKind::Attractions => Some(&mut self.attractions),
            RecommendationKind::Activities => Some(&mut self.activities),
            RecommendationKind::All => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_none() && self.attractions.is_none() && self.activities.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub location: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: RecommendationKind,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RecommendationQuery {
    /// The place to recommend for: the named location, or "lat,lng" when
    /// only coordinates are given.
    pub fn resolve_location(&self) -> Option<String> {
        if let Some(location) = self.location.as_deref().map(str::trim) {
            if !location.is_empty() {
                return Some(location.to_string());
            }
        }
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(format!("{},{}", lat, lng)),
            _ => None,
        }
    }
}
