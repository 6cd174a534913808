use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use crate::models::itinerary::{Activity, ActivityType, Day, Itinerary};
use crate::models::preferences::DateRange;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TripDestination {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TripActivity {
    pub time: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TripDay {
    pub day: u32,
    pub title: String,
    pub activities: Vec<TripActivity>,
}

/// A saved trip. Destinations and the day-by-day plan are embedded so the
/// whole trip is written and deleted as one document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Trip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub start_date: Option<BsonDateTime>,
    pub end_date: Option<BsonDateTime>,
    pub destinations: Vec<TripDestination>,
    // Left out of list projections
    #[serde(default)]
    pub itinerary: Vec<TripDay>,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

impl Trip {
    pub fn from_itinerary(
        user_id: &str,
        itinerary: &Itinerary,
        dates: Option<&DateRange>,
        now: DateTime<Utc>,
    ) -> Self {
        let now = to_bson_datetime(now);
        Self {
            id: None,
            user_id: user_id.to_string(),
            title: format!("Trip to {}", itinerary.destination),
            description: itinerary.summary.clone(),
            start_date: dates.and_then(|d| d.start_date).map(to_bson_datetime),
            end_date: dates.and_then(|d| d.end_date).map(to_bson_datetime),
            destinations: vec![TripDestination {
                name: itinerary.destination.clone(),
                description: itinerary.summary.clone(),
            }],
            itinerary: itinerary.days.iter().map(TripDay::from).collect(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<&Day> for TripDay {
    fn from(day: &Day) -> Self {
        Self {
            day: day.day,
            title: day.title.clone(),
            activities: day.activities.iter().map(TripActivity::from).collect(),
        }
    }
}

impl From<&Activity> for TripActivity {
    fn from(activity: &Activity) -> Self {
        Self {
            time: activity.time.clone(),
            title: activity.title.clone(),
            description: activity.description.clone(),
            kind: activity.kind,
            duration: activity.duration.clone(),
        }
    }
}

pub fn to_bson_datetime(value: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(value.timestamp_millis())
}

pub fn from_bson_datetime(value: BsonDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// The only fields a trip owner may change after saving.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    pub trip_id: Option<String>,
    pub updates: Option<TripUpdate>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTripRequest {
    pub itinerary: Option<Itinerary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub destinations: Vec<TripDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<TripDay>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TripView {
    /// List entries carry destinations but not the day-by-day plan.
    pub fn summary(trip: Trip) -> Self {
        let mut view = Self::detail(trip);
        view.itinerary = None;
        view
    }

    pub fn detail(trip: Trip) -> Self {
        Self {
            id: trip.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: trip.title,
            description: trip.description,
            start_date: trip.start_date.map(from_bson_datetime),
            end_date: trip.end_date.map(from_bson_datetime),
            destinations: trip.destinations,
            itinerary: Some(trip.itinerary),
            created_at: from_bson_datetime(trip.created_at),
            updated_at: from_bson_datetime(trip.updated_at),
        }
    }
}

#[derive(Serialize)]
pub struct TripListResponse {
    pub trips: Vec<TripView>,
}

#[derive(Serialize)]
pub struct TripResponse {
    pub trip: TripView,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSavedResponse {
    pub message: String,
    pub trip_id: String,
}

#[derive(Serialize)]
pub struct TripUpdatedResponse {
    pub message: String,
    pub trip: TripView,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
