use std::sync::Arc;

use crate::services::{
    destination_service::DestinationService,
    generation_service::TextGenerator,
    itinerary_service::ItineraryService,
    recommendation_service::RecommendationService,
    saved_place_service::{SavedPlaceRepository, SavedPlaceService},
    translation_service::{TranslationService, Translator},
    trip_service::{TripRepository, TripService},
    weather_service::WeatherProvider,
};

/// Which outside services have credentials, reported by `/health`.
#[derive(Debug, Clone, Default)]
pub struct ServiceSettings {
    pub environment: String,
    pub generation_configured: bool,
    pub translation_configured: bool,
    pub weather_configured: bool,
}

/// Everything a handler needs, built once in `main` (or by a test) from
/// explicitly constructed clients.
#[derive(Clone)]
pub struct AppState {
    pub itineraries: ItineraryService,
    pub destinations: DestinationService,
    pub recommendations: RecommendationService,
    pub trips: TripService,
    pub saved_places: SavedPlaceService,
    pub translation: TranslationService,
    pub weather: Arc<dyn WeatherProvider>,
    pub settings: ServiceSettings,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        trip_repository: Arc<dyn TripRepository>,
        saved_place_repository: Arc<dyn SavedPlaceRepository>,
        translator: Arc<dyn Translator>,
        weather: Arc<dyn WeatherProvider>,
        settings: ServiceSettings,
    ) -> Self {
        let trips = TripService::new(trip_repository);
        Self {
            itineraries: ItineraryService::new(generator.clone(), trips.clone()),
            destinations: DestinationService::new(generator.clone()),
            recommendations: RecommendationService::new(generator),
            trips,
            saved_places: SavedPlaceService::new(saved_place_repository),
            translation: TranslationService::new(translator),
            weather,
            settings,
        }
    }
}
