use std::sync::Arc;

use async_trait::async_trait;
use bson::doc;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Client, Collection, IndexModel,
};

use crate::{
    error::ApiError,
    models::{
        saved_place::{PlaceInput, SavedPlace},
        trip::to_bson_datetime,
    },
};

/// Bookmarks keyed by (user, caller supplied place id).
#[async_trait]
pub trait SavedPlaceRepository: Send + Sync {
    async fn exists(&self, user_id: &str, place_id: &str) -> Result<bool, ApiError>;
    /// Newest first.
    async fn list(&self, user_id: &str) -> Result<Vec<SavedPlace>, ApiError>;
    /// Inserts or overwrites the bookmark, keeping its original creation time.
    async fn upsert(&self, place: SavedPlace) -> Result<SavedPlace, ApiError>;
    /// Deletes the bookmark if present.
    async fn remove(&self, user_id: &str, place_id: &str) -> Result<(), ApiError>;
}

pub struct MongoSavedPlaceRepository {
    collection: Collection<SavedPlace>,
}

impl MongoSavedPlaceRepository {
    pub fn new(client: Arc<Client>, database: &str) -> Self {
        Self {
            collection: client.database(database).collection("SavedPlaces"),
        }
    }

    /// Makes the (user, place id) pair unique so concurrent saves can't
    /// produce duplicates.
    pub async fn ensure_indexes(&self) -> Result<(), ApiError> {
        let index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "place_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl SavedPlaceRepository for MongoSavedPlaceRepository {
    async fn exists(&self, user_id: &str, place_id: &str) -> Result<bool, ApiError> {
        let found = self
            .collection
            .find_one(doc! { "user_id": user_id, "place_id": place_id })
            .await?;
        Ok(found.is_some())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<SavedPlace>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?;
        let places: Vec<SavedPlace> = cursor.try_collect().await?;
        Ok(places)
    }

    async fn upsert(&self, place: SavedPlace) -> Result<SavedPlace, ApiError> {
        let filter = doc! { "user_id": place.user_id.as_str(), "place_id": place.place_id.as_str() };
        let update = doc! {
            "$set": {
                "name": place.name.as_str(),
                "description": place.description.clone(),
                "image": place.image.clone(),
                "type": place.place_type.clone(),
                "updated_at": place.updated_at,
            },
            "$setOnInsert": { "created_at": place.created_at },
        };

        self.collection
            .find_one_and_update(filter, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| ApiError::Storage("upserted place was not returned".to_string()))
    }

    async fn remove(&self, user_id: &str, place_id: &str) -> Result<(), ApiError> {
        self.collection
            .delete_many(doc! { "user_id": user_id, "place_id": place_id })
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct SavedPlaceService {
    repository: Arc<dyn SavedPlaceRepository>,
}

impl SavedPlaceService {
    pub fn new(repository: Arc<dyn SavedPlaceRepository>) -> Self {
        Self { repository }
    }

    pub async fn is_saved(&self, user_id: &str, place_id: &str) -> Result<bool, ApiError> {
        self.repository.exists(user_id, place_id.trim()).await
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<SavedPlace>, ApiError> {
        self.repository.list(user_id).await
    }

    pub async fn save(&self, user_id: &str, input: PlaceInput) -> Result<SavedPlace, ApiError> {
        let place_id = required_place_id(&input)?;
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::validation("Place name is required"))?
            .to_string();

        let now = to_bson_datetime(Utc::now());
        let place = SavedPlace {
            id: None,
            user_id: user_id.to_string(),
            place_id,
            name,
            description: input.description,
            image: input.image,
            place_type: input.place_type,
            created_at: now,
            updated_at: now,
        };
        self.repository.upsert(place).await
    }

    pub async fn remove(&self, user_id: &str, input: &PlaceInput) -> Result<(), ApiError> {
        let place_id = required_place_id(input)?;
        self.repository.remove(user_id, &place_id).await
    }
}

fn required_place_id(input: &PlaceInput) -> Result<String, ApiError> {
    input
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::validation("Place id is required"))
}
