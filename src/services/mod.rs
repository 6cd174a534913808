pub mod destination_service;
pub mod generation_service;
pub mod itinerary_service;
pub mod phrasebook;
pub mod prompt_service;
pub mod recommendation_service;
pub mod response_parser;
pub mod saved_place_service;
pub mod translation_service;
pub mod trip_service;
pub mod weather_service;
