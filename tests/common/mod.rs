#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use std::sync::{Arc, Mutex};

use wayfarer_api::{
    error::ApiError,
    middleware::auth::generate_token,
    models::{
        saved_place::SavedPlace,
        translation::Translated,
        trip::{to_bson_datetime, Trip, TripUpdate},
        weather::ForecastDay,
    },
    routes,
    services::{
        generation_service::{ResponseShape, TextGenerator},
        saved_place_service::SavedPlaceRepository,
        translation_service::Translator,
        trip_service::TripRepository,
        weather_service::WeatherProvider,
    },
    state::{AppState, ServiceSettings},
};

pub const TEST_JWT_SECRET: &str = "test_jwt_secret";

pub fn bearer_token(user_id: &str) -> String {
    let token = generate_token(TEST_JWT_SECRET, &format!("{}@example.com", user_id), user_id)
        .expect("token should encode");
    format!("Bearer {}", token)
}

#[derive(Default)]
pub struct InMemoryTripRepository {
    trips: Mutex<Vec<Trip>>,
}

impl InMemoryTripRepository {
    pub fn count(&self) -> usize {
        self.trips.lock().unwrap().len()
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn insert(&self, mut trip: Trip) -> Result<ObjectId, ApiError> {
        let id = ObjectId::new();
        trip.id = Some(id);
        self.trips.lock().unwrap().push(trip);
        Ok(id)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Trip>, ApiError> {
        let mut trips: Vec<Trip> = self
            .trips
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .map(|mut t| {
                t.itinerary.clear();
                t
            })
            .collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }

    async fn find(&self, id: &ObjectId, user_id: &str) -> Result<Option<Trip>, ApiError> {
        Ok(self
            .trips
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id.as_ref() == Some(id) && t.user_id == user_id)
            .cloned())
    }

    async fn update(
        &self,
        id: &ObjectId,
        user_id: &str,
        update: &TripUpdate,
    ) -> Result<Option<Trip>, ApiError> {
        let mut trips = self.trips.lock().unwrap();
        let Some(trip) = trips
            .iter_mut()
            .find(|t| t.id.as_ref() == Some(id) && t.user_id == user_id)
        else {
            return Ok(None);
        };
        if let Some(title) = &update.title {
            trip.title = title.clone();
        }
        if let Some(description) = &update.description {
            trip.description = description.clone();
        }
        if let Some(start) = update.start_date {
            trip.start_date = Some(to_bson_datetime(start));
        }
        if let Some(end) = update.end_date {
            trip.end_date = Some(to_bson_datetime(end));
        }
        trip.updated_at = to_bson_datetime(Utc::now());
        Ok(Some(trip.clone()))
    }

    async fn delete(&self, id: &ObjectId, user_id: &str) -> Result<bool, ApiError> {
        let mut trips = self.trips.lock().unwrap();
        let before = trips.len();
        trips.retain(|t| !(t.id.as_ref() == Some(id) && t.user_id == user_id));
        Ok(trips.len() < before)
    }

    async fn ping(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySavedPlaceRepository {
    places: Mutex<Vec<SavedPlace>>,
}

#[async_trait]
impl SavedPlaceRepository for InMemorySavedPlaceRepository {
    async fn exists(&self, user_id: &str, place_id: &str) -> Result<bool, ApiError> {
        Ok(self
            .places
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.user_id == user_id && p.place_id == place_id))
    }

    async fn list(&self, user_id: &str) -> Result<Vec<SavedPlace>, ApiError> {
        let mut places: Vec<SavedPlace> = self
            .places
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        places.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(places)
    }

    async fn upsert(&self, mut place: SavedPlace) -> Result<SavedPlace, ApiError> {
        let mut places = self.places.lock().unwrap();
        if let Some(existing) = places
            .iter_mut()
            .find(|p| p.user_id == place.user_id && p.place_id == place.place_id)
        {
            place.id = existing.id;
            place.created_at = existing.created_at;
            *existing = place.clone();
            return Ok(place);
        }
        place.id = Some(ObjectId::new());
        places.push(place.clone());
        Ok(place)
    }

    async fn remove(&self, user_id: &str, place_id: &str) -> Result<(), ApiError> {
        self.places
            .lock()
            .unwrap()
            .retain(|p| !(p.user_id == user_id && p.place_id == place_id));
        Ok(())
    }
}

/// Returns a canned response and remembers every prompt it was given.
pub struct MockGenerator {
    response: Result<String, String>,
    pub prompts: Mutex<Vec<(String, ResponseShape)>>,
}

impl MockGenerator {
    pub fn returning(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().map(|(p, _)| p.clone())
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, shape: ResponseShape) -> Result<String, ApiError> {
        self.prompts.lock().unwrap().push((prompt.to_string(), shape));
        self.response
            .clone()
            .map_err(ApiError::UpstreamCallFailed)
    }
}

pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<Translated, ApiError> {
        Err(ApiError::UpstreamCallFailed("translation service unreachable".to_string()))
    }
}

/// Uppercases the text and claims it was English.
pub struct UppercaseTranslator;

#[async_trait]
impl Translator for UppercaseTranslator {
    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<Translated, ApiError> {
        Ok(Translated {
            text: text.to_uppercase(),
            detected_language: Some("en".to_string()),
        })
    }
}

pub struct MockWeather {
    forecast: Option<Vec<ForecastDay>>,
    pub cities: Mutex<Vec<String>>,
}

impl MockWeather {
    pub fn sunny() -> Self {
        let date = Utc::now();
        Self {
            forecast: Some(vec![ForecastDay {
                date,
                day: date.format("%a").to_string(),
                temp: 24,
                min_temp: 17,
                weather: "Clear".to_string(),
                icon: "01d".to_string(),
            }]),
            cities: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            forecast: None,
            cities: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WeatherProvider for MockWeather {
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastDay>, ApiError> {
        self.cities.lock().unwrap().push(city.to_string());
        self.forecast
            .clone()
            .ok_or_else(|| ApiError::UpstreamCallFailed("weather service unreachable".to_string()))
    }
}

pub struct TestApp {
    pub generator: Arc<MockGenerator>,
    pub trips: Arc<InMemoryTripRepository>,
    pub saved_places: Arc<InMemorySavedPlaceRepository>,
    pub translator: Arc<dyn Translator>,
    pub weather: Arc<MockWeather>,
}

impl TestApp {
    pub fn new(generator: MockGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
            trips: Arc::new(InMemoryTripRepository::default()),
            saved_places: Arc::new(InMemorySavedPlaceRepository::default()),
            translator: Arc::new(FailingTranslator),
            weather: Arc::new(MockWeather::sunny()),
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_weather(mut self, weather: MockWeather) -> Self {
        self.weather = Arc::new(weather);
        self
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            self.generator.clone(),
            self.trips.clone(),
            self.saved_places.clone(),
            self.translator.clone(),
            self.weather.clone(),
            ServiceSettings {
                environment: "test".to_string(),
                generation_configured: true,
                translation_configured: false,
                weather_configured: true,
            },
        )
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.state()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(|cfg| routes::configure(cfg, TEST_JWT_SECRET))
    }
}

/// A well-formed generated itinerary with `days` consecutive days.
pub fn itinerary_json(destination: &str, days: u32) -> String {
    let days: Vec<serde_json::Value> = (1..=days)
        .map(|day| {
            serde_json::json!({
                "day": day,
                "title": format!("Day {} in {}", day, destination),
                "activities": [
                    {
                        "time": "09:00",
                        "title": "Breakfast",
                        "description": "Local breakfast spot",
                        "type": "food",
                        "duration": "1 hour"
                    },
                    {
                        "time": "11:00",
                        "title": "Temple visit",
                        "description": "Walk through the old town",
                        "type": "attraction",
                        "duration": "2 hours"
                    }
                ]
            })
        })
        .collect();

    serde_json::json!({
        "destination": destination,
        "duration": days.len(),
        "summary": format!("A relaxed trip through {}", destination),
        "days": days,
    })
    .to_string()
}
