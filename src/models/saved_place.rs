use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use crate::models::trip::from_bson_datetime;

/// A bookmarked destination or attraction. `place_id` is supplied by the
/// caller and is only unique within one user's bookmarks.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SavedPlace {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub place_id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceAction {
    Save,
    Delete,
}

#[derive(Debug, Deserialize)]
pub struct SavedPlaceRequest {
    pub action: PlaceAction,
    pub place: PlaceInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlaceView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<SavedPlace> for SavedPlaceView {
    fn from(place: SavedPlace) -> Self {
        Self {
            id: place.place_id,
            name: place.name,
            description: place.description,
            image: place.image,
            place_type: place.place_type,
            created_at: from_bson_datetime(place.created_at),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlacesResponse {
    pub saved_places: Vec<SavedPlaceView>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsSavedResponse {
    pub is_saved: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSavedResponse {
    pub message: String,
    pub saved_place: SavedPlaceView,
}
