use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{itinerary::Itinerary, preferences::ItineraryRequest},
    services::{
        generation_service::{ResponseShape, TextGenerator},
        prompt_service,
        response_parser,
        trip_service::TripService,
    },
};

/// Preferences -> prompt -> generation -> validation -> optional save.
#[derive(Clone)]
pub struct ItineraryService {
    generator: Arc<dyn TextGenerator>,
    trips: TripService,
}

impl ItineraryService {
    pub fn new(generator: Arc<dyn TextGenerator>, trips: TripService) -> Self {
        Self { generator, trips }
    }

    pub async fn plan(&self, user_id: &str, request: &ItineraryRequest) -> Result<Itinerary, ApiError> {
        let preferences = &request.preferences;
        preferences.validate()?;

        let prompt = prompt_service::itinerary_prompt(preferences);
        let raw = self.generator.generate(&prompt, ResponseShape::Itinerary).await?;
        let mut itinerary = response_parser::parse_itinerary(&raw, preferences.duration)?;

        if request.save_trip {
            let trip_id = self
                .trips
                .save_itinerary(user_id, &itinerary, preferences.dates.as_ref())
                .await?;
            itinerary.trip_id = Some(trip_id.to_hex());
        }

        log::info!(
            "Generated {}-day itinerary for {}",
            itinerary.duration,
            preferences.destination_label()
        );
        Ok(itinerary)
    }
}
