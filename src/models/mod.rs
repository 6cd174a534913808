pub mod destination;
pub mod itinerary;
pub mod preferences;
pub mod recommendation;
pub mod saved_place;
pub mod translation;
pub mod trip;
pub mod weather;
