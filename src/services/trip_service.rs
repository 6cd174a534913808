use std::sync::Arc;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{options::ReturnDocument, Client, Collection};

use crate::{
    error::ApiError,
    models::{
        itinerary::Itinerary,
        preferences::DateRange,
        trip::{from_bson_datetime, to_bson_datetime, Trip, TripUpdate},
    },
};

/// Persistence for trips. Every call is scoped to the owning user: a trip
/// that exists but belongs to somebody else behaves exactly like a missing
/// one.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Writes the whole trip, embedded days included, in one operation.
    async fn insert(&self, trip: Trip) -> Result<ObjectId, ApiError>;
    /// Newest first, without the embedded itinerary.
    async fn list(&self, user_id: &str) -> Result<Vec<Trip>, ApiError>;
    async fn find(&self, id: &ObjectId, user_id: &str) -> Result<Option<Trip>, ApiError>;
    async fn update(
        &self,
        id: &ObjectId,
        user_id: &str,
        update: &TripUpdate,
    ) -> Result<Option<Trip>, ApiError>;
    /// Returns whether anything was deleted.
    async fn delete(&self, id: &ObjectId, user_id: &str) -> Result<bool, ApiError>;
    async fn ping(&self) -> Result<(), ApiError>;
}

pub struct MongoTripRepository {
    client: Arc<Client>,
    collection: Collection<Trip>,
    database: String,
}

impl MongoTripRepository {
    pub fn new(client: Arc<Client>, database: &str) -> Self {
        let collection = client.database(database).collection::<Trip>("Trips");
        Self {
            client,
            collection,
            database: database.to_string(),
        }
    }
}

fn update_document(update: &TripUpdate) -> Document {
    let mut set = doc! { "updated_at": to_bson_datetime(Utc::now()) };
    if let Some(title) = &update.title {
        set.insert("title", title.clone());
    }
    if let Some(description) = &update.description {
        set.insert("description", description.clone());
    }
    if let Some(start) = update.start_date {
        set.insert("start_date", to_bson_datetime(start));
    }
    if let Some(end) = update.end_date {
        set.insert("end_date", to_bson_datetime(end));
    }
    doc! { "$set": set }
}

#[async_trait]
impl TripRepository for MongoTripRepository {
    async fn insert(&self, trip: Trip) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(&trip).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::Storage("inserted trip has no ObjectId".to_string()))
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Trip>, ApiError> {
        let cursor = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .projection(doc! { "itinerary": 0 })
            .await?;
        let trips: Vec<Trip> = cursor.try_collect().await?;
        Ok(trips)
    }

    async fn find(&self, id: &ObjectId, user_id: &str) -> Result<Option<Trip>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "_id": *id, "user_id": user_id })
            .await?)
    }

    async fn update(
        &self,
        id: &ObjectId,
        user_id: &str,
        update: &TripUpdate,
    ) -> Result<Option<Trip>, ApiError> {
        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": *id, "user_id": user_id }, update_document(update))
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete(&self, id: &ObjectId, user_id: &str) -> Result<bool, ApiError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id, "user_id": user_id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), ApiError> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

/// Trip persistence operations on behalf of an authenticated user.
#[derive(Clone)]
pub struct TripService {
    repository: Arc<dyn TripRepository>,
}

impl TripService {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    /// Persists a generated itinerary as a new trip. Saving the same
    /// itinerary twice yields two trips.
    pub async fn save_itinerary(
        &self,
        user_id: &str,
        itinerary: &Itinerary,
        dates: Option<&DateRange>,
    ) -> Result<ObjectId, ApiError> {
        let trip = Trip::from_itinerary(user_id, itinerary, dates, Utc::now());
        let id = self.repository.insert(trip).await?;
        log::info!("Saved trip {} for user {}", id, user_id);
        Ok(id)
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<Trip>, ApiError> {
        self.repository.list(user_id).await
    }

    pub async fn get(&self, trip_id: &str, user_id: &str) -> Result<Trip, ApiError> {
        let id = parse_trip_id(trip_id)?;
        let mut trip = self
            .repository
            .find(&id, user_id)
            .await?
            .ok_or_else(trip_not_found)?;
        trip.itinerary.sort_by_key(|day| day.day);
        Ok(trip)
    }

    pub async fn update(
        &self,
        trip_id: Option<&str>,
        update: Option<&TripUpdate>,
        user_id: &str,
    ) -> Result<Trip, ApiError> {
        let (Some(trip_id), Some(update)) = (trip_id.filter(|id| !id.trim().is_empty()), update)
        else {
            return Err(ApiError::validation("Trip ID and updates are required"));
        };
        DateRange {
            start_date: update.start_date,
            end_date: update.end_date,
        }
        .validate()?;

        let id = parse_trip_id(trip_id)?;
        if update.start_date.is_some() != update.end_date.is_some() {
            // A lone date must still fit the one already stored
            let current = self
                .repository
                .find(&id, user_id)
                .await?
                .ok_or_else(trip_not_found)?;
            DateRange {
                start_date: update.start_date.or(current.start_date.map(from_bson_datetime)),
                end_date: update.end_date.or(current.end_date.map(from_bson_datetime)),
            }
            .validate()?;
        }

        self.repository
            .update(&id, user_id, update)
            .await?
            .ok_or_else(trip_not_found)
    }

    pub async fn delete(&self, trip_id: &str, user_id: &str) -> Result<(), ApiError> {
        let id = parse_trip_id(trip_id)?;
        if self.repository.delete(&id, user_id).await? {
            log::info!("Deleted trip {} for user {}", id, user_id);
            Ok(())
        } else {
            Err(trip_not_found())
        }
    }

    pub async fn ping(&self) -> Result<(), ApiError> {
        self.repository.ping().await
    }
}

// A malformed id can't name anyone's trip, so it reads as not found.
fn parse_trip_id(trip_id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(trip_id.trim()).map_err(|_| trip_not_found())
}

fn trip_not_found() -> ApiError {
    ApiError::not_found("Trip not found")
}
