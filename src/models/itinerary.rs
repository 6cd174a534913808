use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Food,
    Attraction,
    Activity,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    pub time: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Day {
    pub day: u32,
    pub title: String,
    pub activities: Vec<Activity>,
}

/// A generated multi-day plan. Once returned it is only ever touched again
/// to attach the id of the trip it was saved as.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub destination: String,
    pub duration: u32,
    pub summary: String,
    pub days: Vec<Day>,
    /// Set only once the itinerary has been stored; never read from input.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
}

#[derive(Serialize)]
pub struct ItineraryResponse {
    pub itinerary: Itinerary,
}
