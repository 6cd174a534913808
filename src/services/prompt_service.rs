use crate::models::{preferences::TripPreferences, recommendation::RecommendationKind};

const ITINERARY_SCHEDULE_CLAUSE: &str = " The itinerary should include a daily schedule with morning, afternoon, and evening activities, recommended places to eat, and transportation tips.";

const ITINERARY_FORMAT_CLAUSE: &str = r#" Format the response as a JSON object with the following structure: {
      "destination": string,
      "duration": number,
      "summary": string,
      "days": [
        {
          "day": number,
          "title": string,
          "activities": [
            {
              "time": string,
              "title": string,
              "description": string,
              "type": string (one of: food, attraction, activity, transport),
              "duration": string
            }
          ]
        }
      ]
    }"#;

/// Instruction for a day-by-day itinerary. Every preference that is unset
/// or empty is left out rather than rejected.
pub fn itinerary_prompt(preferences: &TripPreferences) -> String {
    let duration = preferences.duration;
    let mut prompt = match (
        preferences.destination_name(),
        preferences.destination_description(),
    ) {
        (Some(destination), _) => format!(
            "Create a detailed travel itinerary for a {}-day trip to {}.",
            duration, destination
        ),
        (None, Some(description)) => format!(
            "Create a detailed travel itinerary for a {}-day trip to a destination matching this description: {}.",
            duration, description
        ),
        (None, None) => format!("Create a detailed travel itinerary for a {}-day trip.", duration),
    };

    push_list(&mut prompt, "The traveler is interested in", &preferences.interests);

    if let Some(style) = preferences.travel_style {
        prompt.push_str(&format!(" Their travel style is: {}.", style));
    }

    if let Some(budget) = preferences.budget {
        prompt.push_str(&format!(" Their budget level is: {}.", budget));
    }

    if let Some(amount) = preferences.budget_amount {
        prompt.push_str(&format!(
            " Their daily budget is around {} per person.",
            amount
        ));
    }

    push_list(
        &mut prompt,
        "They want to include these activities",
        &preferences.activities,
    );
    push_list(&mut prompt, "They prefer staying in", &preferences.accommodation);
    push_list(
        &mut prompt,
        "They plan to get around by",
        &preferences.transportation,
    );
    push_list(&mut prompt, "Their dietary requirements are", &preferences.dietary);

    if let Some(dates) = &preferences.dates {
        match (dates.start_date, dates.end_date) {
            (Some(start), Some(end)) => prompt.push_str(&format!(
                " The trip runs from {} to {}.",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            )),
            (Some(start), None) => prompt.push_str(&format!(
                " The trip starts on {}.",
                start.format("%Y-%m-%d")
            )),
            _ => {}
        }
    }

    if let Some(requests) = preferences
        .special_requests
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
    {
        prompt.push_str(&format!(" Special requests: {}.", requests));
    }

    prompt.push_str(ITINERARY_SCHEDULE_CLAUSE);
    prompt.push_str(ITINERARY_FORMAT_CLAUSE);
    prompt
}

fn push_list(prompt: &mut String, lead: &str, values: &[String]) {
    let values: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    if !values.is_empty() {
        prompt.push_str(&format!(" {}: {}.", lead, values.join(", ")));
    }
}

pub fn destinations_prompt(
    interests: Option<&str>,
    budget: Option<&str>,
    duration: Option<u32>,
) -> String {
    let mut prompt = String::from(
        "Suggest 5 travel destinations with the following information for each: name, description, tags (3 categories), budget level ($ to $$$), and best time to visit.",
    );

    if let Some(interests) = interests.filter(|i| !i.trim().is_empty()) {
        prompt.push_str(&format!(" The traveler is interested in: {}.", interests));
    }

    if let Some(budget) = budget.filter(|b| !b.trim().is_empty()) {
        prompt.push_str(&format!(" Their budget is around: {}.", budget));
    }

    if let Some(duration) = duration {
        prompt.push_str(&format!(" They plan to travel for: {} days.", duration));
    }

    prompt.push_str(" Return the response as a JSON array with objects containing id, name, description, image (leave as null), tags (array), budget, and bestTime fields.");
    prompt
}

pub fn destination_detail_prompt(id: &str) -> String {
    format!(
        "Generate a detailed travel description for a destination with ID {}. \
Include name, description, rating, tags (array of 3-5 interests), budget level ($ to $$$), bestTime (best time to visit), \
weather information for each season (an object with spring, summer, fall and winter), \
and at least 4 popular attractions with names and descriptions. \
If the ID doesn't give you enough information, pick a popular travel destination. \
Format the result as a JSON object.",
        id
    )
}

pub fn recommendations_prompt(location: &str, kind: RecommendationKind) -> String {
    let mut prompt = match kind {
        RecommendationKind::Restaurants => format!(
            "Recommend 5 great restaurants in {}. Include name, description, cuisine type, price level ($ to $$$), and at least one signature dish for each restaurant.",
            location
        ),
        RecommendationKind::Attractions => format!(
            "Recommend 5 must-see attractions in {}. Include name, description, why it's special, entrance fee if applicable, and best time to visit.",
            location
        ),
        RecommendationKind::Activities => format!(
            "Recommend 5 interesting activities to do in {}. Include activity name, description, approximate duration, price range, and level of physical exertion required.",
            location
        ),
        RecommendationKind::All => format!(
            "Recommend places for travelers in {}. Provide 3 restaurants, 3 attractions, and 3 activities. For each place, include name, brief description, and any relevant details like price level or special features.",
            location
        ),
    };

    match kind {
        RecommendationKind::All => prompt.push_str(
            " Format the response as a JSON object with \"restaurants\", \"attractions\" and \"activities\" arrays, every entry having at least a \"name\" field.",
        ),
        _ => prompt.push_str(
            " Format the response as a JSON array of objects, every entry having at least a \"name\" field.",
        ),
    }
    prompt
}
