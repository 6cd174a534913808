//! Strict decoding of generated text plus deterministic repair of the
//! display fields the model is allowed to leave out.
//!
//! Text that is not JSON, or JSON that misses a required field, is rejected
//! as a whole: there is no fence stripping and no partial result. Backfill
//! only ever fills values that are absent, so running it again on its own
//! output changes nothing.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::ApiError,
    models::{
        destination::{Destination, DestinationDetail, EntityId},
        itinerary::Itinerary,
        recommendation::{GeoPoint, PlaceLocation, Recommendation, RecommendationKind, RecommendationSet},
    },
};

pub const DESTINATION_IMAGE: (u32, u32) = (600, 400);
pub const DESTINATION_HERO_IMAGE: (u32, u32) = (1200, 600);
pub const ATTRACTION_IMAGE: (u32, u32) = (400, 300);
pub const RECOMMENDATION_IMAGE: (u32, u32) = (300, 200);

/// `(width, height)` placeholder for an entity without an image.
pub fn placeholder_image(name: &str, (width, height): (u32, u32)) -> String {
    format!(
        "/placeholder.svg?height={}&width={}&text={}",
        height,
        width,
        encode_component(name)
    )
}

// URI component encoding: `!'()*` stay literal on top of the unreserved set.
fn encode_component(text: &str) -> String {
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

// Blank strings count as missing.
fn lacks_image(image: &Option<String>) -> bool {
    image.as_deref().map_or(true, |url| url.trim().is_empty())
}

fn decode<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw).map_err(|err| {
        log::warn!("Generated {} is not valid: {} ({} bytes)", what, err, raw.len());
        ApiError::Parse(format!("invalid {} data: {}", what, err))
    })
}

/// Decodes an itinerary and checks it has exactly `expected_days` days
/// numbered 1..=expected_days in order.
pub fn parse_itinerary(raw: &str, expected_days: u32) -> Result<Itinerary, ApiError> {
    let itinerary: Itinerary = decode(raw, "itinerary")?;
    validate_day_sequence(&itinerary, expected_days)?;
    Ok(itinerary)
}

pub fn validate_day_sequence(itinerary: &Itinerary, expected_days: u32) -> Result<(), ApiError> {
    if itinerary.days.len() != expected_days as usize {
        return Err(ApiError::Parse(format!(
            "expected {} days but the itinerary has {}",
            expected_days,
            itinerary.days.len()
        )));
    }
    if itinerary.duration != expected_days {
        return Err(ApiError::Parse(format!(
            "itinerary duration {} does not match the {} requested days",
            itinerary.duration, expected_days
        )));
    }
    for (index, day) in itinerary.days.iter().enumerate() {
        let expected = index as u32 + 1;
        if day.day != expected {
            return Err(ApiError::Parse(format!(
                "day {} found where day {} was expected",
                day.day, expected
            )));
        }
    }
    Ok(())
}

pub fn parse_destinations(raw: &str) -> Result<Vec<Destination>, ApiError> {
    let mut destinations: Vec<Destination> = decode(raw, "destination list")?;
    backfill_destinations(&mut destinations);
    Ok(destinations)
}

pub fn backfill_destinations(destinations: &mut [Destination]) {
    for (index, destination) in destinations.iter_mut().enumerate() {
        if destination.id.is_none() {
            destination.id = Some(EntityId::Number(index as u64 + 1));
        }
        if lacks_image(&destination.image) {
            destination.image = Some(placeholder_image(&destination.name, DESTINATION_IMAGE));
        }
    }
}

pub fn parse_destination_detail(raw: &str) -> Result<DestinationDetail, ApiError> {
    let mut destination: DestinationDetail = decode(raw, "destination")?;
    backfill_destination_detail(&mut destination);
    Ok(destination)
}

pub fn backfill_destination_detail(destination: &mut DestinationDetail) {
    if lacks_image(&destination.image) {
        destination.image = Some(placeholder_image(&destination.name, DESTINATION_HERO_IMAGE));
    }
    for attraction in destination.attractions.iter_mut() {
        if lacks_image(&attraction.image) {
            attraction.image = Some(placeholder_image(&attraction.name, ATTRACTION_IMAGE));
        }
    }
}

/// A single kind must come back as a list; `All` must come back as an
/// object keyed by category, each category repaired on its own.
pub fn parse_recommendations(
    raw: &str,
    kind: RecommendationKind,
) -> Result<RecommendationSet, ApiError> {
    let value: Value = decode(raw, "recommendations")?;
    let mut set = RecommendationSet::default();

    match kind {
        RecommendationKind::All => {
            let Value::Object(mut categories) = value else {
                return Err(ApiError::Parse(
                    "expected an object keyed by recommendation category".to_string(),
                ));
            };
            for category in RecommendationKind::CATEGORIES {
                if let Some(entries) = categories.remove(category.key()) {
                    let list = category_list(entries, category)?;
                    if let Some(slot) = set.category_mut(category) {
                        *slot = Some(list);
                    }
                }
            }
            if set.is_empty() {
                return Err(ApiError::Parse(
                    "no recommendation categories in generated data".to_string(),
                ));
            }
        }
        single => {
            let list = category_list(value, single)?;
            if let Some(slot) = set.category_mut(single) {
                *slot = Some(list);
            }
        }
    }

    Ok(set)
}

fn category_list(value: Value, kind: RecommendationKind) -> Result<Vec<Recommendation>, ApiError> {
    if !value.is_array() {
        return Err(ApiError::Parse(format!("expected a list of {}", kind)));
    }
    let mut list: Vec<Recommendation> = serde_json::from_value(value)
        .map_err(|err| ApiError::Parse(format!("invalid {} data: {}", kind, err)))?;
    backfill_recommendations(&mut list);
    Ok(list)
}

pub fn backfill_recommendations(recommendations: &mut [Recommendation]) {
    for (index, recommendation) in recommendations.iter_mut().enumerate() {
        if recommendation.id.is_none() {
            recommendation.id = Some(EntityId::Number(index as u64 + 1));
        }
        if lacks_image(&recommendation.image) {
            recommendation.image = Some(placeholder_image(&recommendation.name, RECOMMENDATION_IMAGE));
        }
        // No geocoding, coordinates are zeroed for the map view
        if recommendation.location.is_none() {
            recommendation.location = Some(PlaceLocation::Point(GeoPoint { lat: 0.0, lng: 0.0 }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn itinerary_json(days: &[u32], duration: u32) -> String {
        let days: Vec<Value> = days
            .iter()
            .map(|n| {
                json!({
                    "day": n,
                    "title": format!("Day {}", n),
                    "activities": [{
                        "time": "9:00 AM",
                        "title": "Breakfast",
                        "description": "Local cafe",
                        "type": "food",
                        "duration": "1 hour"
                    }]
                })
            })
            .collect();
        json!({
            "destination": "Tokyo, Japan",
            "duration": duration,
            "summary": "Food and temples",
            "days": days
        })
        .to_string()
    }

    #[test]
    fn test_placeholder_encodes_name() {
        assert_eq!(
            placeholder_image("Kyoto, Japan", DESTINATION_IMAGE),
            "/placeholder.svg?height=400&width=600&text=Kyoto%2C%20Japan"
        );
        assert_eq!(
            placeholder_image("St. Peter's (Rome)!", ATTRACTION_IMAGE),
            "/placeholder.svg?height=300&width=400&text=St.%20Peter's%20(Rome)!"
        );
    }

    #[test]
    fn test_itinerary_in_order_is_accepted() {
        let itinerary = parse_itinerary(&itinerary_json(&[1, 2, 3], 3), 3).unwrap();
        let numbers: Vec<u32> = itinerary.days.iter().map(|d| d.day).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_itinerary_day_sequence_violations() {
        for (days, duration) in [
            (vec![1, 2], 3),
            (vec![1, 3, 4], 3),
            (vec![1, 1, 2], 3),
            (vec![2, 1, 3], 3),
            (vec![1, 2, 3], 4),
        ] {
            let result = parse_itinerary(&itinerary_json(&days, duration), 3);
            assert!(matches!(result, Err(ApiError::Parse(_))), "{:?}", days);
        }
    }

    #[test]
    fn test_non_json_is_parse_error() {
        for raw in ["", "Here is your plan!", "```json\n{}\n```", "{\"destination\": "] {
            assert!(matches!(parse_itinerary(raw, 1), Err(ApiError::Parse(_))));
            assert!(matches!(parse_destinations(raw), Err(ApiError::Parse(_))));
        }
    }

    #[test]
    fn test_unknown_activity_type_is_rejected() {
        let raw = itinerary_json(&[1], 1).replace("\"food\"", "\"shopping\"");
        assert!(matches!(parse_itinerary(&raw, 1), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_destinations_backfill_missing_fields_only() {
        let raw = json!([
            {"name": "Lisbon", "description": "Hills", "tags": ["food"], "image": null},
            {"id": "porto", "name": "Porto", "description": "Wine", "image": "/porto.jpg"}
        ])
        .to_string();
        let destinations = parse_destinations(&raw).unwrap();

        assert_eq!(destinations[0].id, Some(EntityId::Number(1)));
        assert_eq!(
            destinations[0].image.as_deref(),
            Some("/placeholder.svg?height=400&width=600&text=Lisbon")
        );
        assert_eq!(destinations[1].id, Some(EntityId::Text("porto".to_string())));
        assert_eq!(destinations[1].image.as_deref(), Some("/porto.jpg"));
    }

    #[test]
    fn test_destination_list_must_be_array() {
        let raw = json!({"name": "Lisbon", "description": "Hills"}).to_string();
        assert!(matches!(parse_destinations(&raw), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_backfill_is_idempotent() {
        let raw = json!([
            {"name": "Cusco", "description": "Andes"},
            {"name": "Lima", "description": "Coast"}
        ])
        .to_string();
        let once = parse_destinations(&raw).unwrap();
        let mut twice = once.clone();
        backfill_destinations(&mut twice);
        assert_eq!(once, twice);

        let mut detail = parse_destination_detail(
            &json!({
                "name": "Cusco",
                "description": "Andes",
                "attractions": [{"name": "Sacsayhuaman", "description": "Ruins"}]
            })
            .to_string(),
        )
        .unwrap();
        let snapshot = detail.clone();
        backfill_destination_detail(&mut detail);
        assert_eq!(snapshot, detail);
    }

    #[test]
    fn test_destination_detail_backfills_attractions() {
        let detail = parse_destination_detail(
            &json!({
                "name": "Reykjavik",
                "description": "Northern lights",
                "weather": {"spring": "Cool", "summer": "Mild", "fall": "Windy", "winter": "Cold"},
                "attractions": [
                    {"name": "Blue Lagoon", "description": "Spa"},
                    {"name": "Hallgrimskirkja", "description": "Church", "image": "/church.png"}
                ]
            })
            .to_string(),
        )
        .unwrap();

        assert_eq!(
            detail.image.as_deref(),
            Some("/placeholder.svg?height=600&width=1200&text=Reykjavik")
        );
        assert_eq!(
            detail.attractions[0].image.as_deref(),
            Some("/placeholder.svg?height=300&width=400&text=Blue%20Lagoon")
        );
        assert_eq!(detail.attractions[1].image.as_deref(), Some("/church.png"));
    }

    #[test]
    fn test_blank_images_are_backfilled() {
        let raw = json!([
            {"name": "Oslo", "description": "Fjords", "image": ""},
            {"name": "Bergen", "description": "Rain", "image": "   "}
        ])
        .to_string();
        let mut destinations = parse_destinations(&raw).unwrap();
        assert_eq!(
            destinations[0].image.as_deref(),
            Some("/placeholder.svg?height=400&width=600&text=Oslo")
        );
        assert_eq!(
            destinations[1].image.as_deref(),
            Some("/placeholder.svg?height=400&width=600&text=Bergen")
        );

        let once = destinations.clone();
        backfill_destinations(&mut destinations);
        assert_eq!(destinations, once);

        let mut places: Vec<Recommendation> =
            serde_json::from_value(json!([{"name": "Fika Bar", "image": ""}])).unwrap();
        backfill_recommendations(&mut places);
        assert_eq!(
            places[0].image.as_deref(),
            Some("/placeholder.svg?height=200&width=300&text=Fika%20Bar")
        );
    }

    #[test]
    fn test_single_kind_recommendations() {
        let raw = json!([
            {"name": "Trattoria", "cuisine": "Roman", "priceLevel": "$$"},
            {"name": "Pizzeria", "id": 9}
        ])
        .to_string();
        let set = parse_recommendations(&raw, RecommendationKind::Restaurants).unwrap();

        let restaurants = set.restaurants.unwrap();
        assert!(set.attractions.is_none());
        assert_eq!(restaurants[0].id, Some(EntityId::Number(1)));
        assert_eq!(restaurants[1].id, Some(EntityId::Number(9)));
        assert_eq!(restaurants[0].details.get("cuisine"), Some(&json!("Roman")));
        assert_eq!(
            restaurants[0].location,
            Some(PlaceLocation::Point(GeoPoint { lat: 0.0, lng: 0.0 }))
        );
    }

    #[test]
    fn test_single_kind_rejects_object() {
        let raw = json!({"restaurants": [{"name": "Trattoria"}]}).to_string();
        assert!(matches!(
            parse_recommendations(&raw, RecommendationKind::Restaurants),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn test_all_kinds_backfilled_per_category() {
        let raw = json!({
            "restaurants": [{"name": "A"}, {"name": "B"}],
            "activities": [{"name": "Kayak", "location": "Harbour"}],
            "notes": "ignored"
        })
        .to_string();
        let set = parse_recommendations(&raw, RecommendationKind::All).unwrap();

        let restaurants = set.restaurants.unwrap();
        let activities = set.activities.unwrap();
        assert!(set.attractions.is_none());
        assert_eq!(restaurants[1].id, Some(EntityId::Number(2)));
        // Each category is numbered from one
        assert_eq!(activities[0].id, Some(EntityId::Number(1)));
        assert_eq!(
            activities[0].location,
            Some(PlaceLocation::Address("Harbour".to_string()))
        );
    }

    #[test]
    fn test_all_kinds_require_a_category() {
        assert!(matches!(
            parse_recommendations("{\"places\": []}", RecommendationKind::All),
            Err(ApiError::Parse(_))
        ));
        assert!(matches!(
            parse_recommendations("[{\"name\": \"A\"}]", RecommendationKind::All),
            Err(ApiError::Parse(_))
        ));
    }
}
