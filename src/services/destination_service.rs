use std::{cmp::Ordering, sync::Arc};

use crate::{
    error::ApiError,
    models::destination::{Destination, DestinationDetail, DestinationQuery, DestinationSort},
    services::{
        generation_service::{ResponseShape, TextGenerator},
        prompt_service,
        response_parser,
    },
};

const DEFAULT_BUDGET: &str = "$$";

#[derive(Clone)]
pub struct DestinationService {
    generator: Arc<dyn TextGenerator>,
}

impl DestinationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn suggest(&self, query: &DestinationQuery) -> Result<Vec<Destination>, ApiError> {
        let prompt = prompt_service::destinations_prompt(
            query.interests.as_deref(),
            query.budget.as_deref(),
            query.duration,
        );
        let raw = self
            .generator
            .generate(&prompt, ResponseShape::DestinationList)
            .await?;
        let destinations = response_parser::parse_destinations(&raw)?;

        let tags = split_list(query.tags.as_deref());
        Ok(refine(destinations, query.search.as_deref(), &tags, query.sort))
    }

    pub async fn detail(&self, id: &str) -> Result<DestinationDetail, ApiError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ApiError::validation("Destination id is required"));
        }
        let prompt = prompt_service::destination_detail_prompt(id);
        let raw = self
            .generator
            .generate(&prompt, ResponseShape::Destination)
            .await?;
        response_parser::parse_destination_detail(&raw)
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Search, tag filter and sort over an already generated list.
pub fn refine(
    destinations: Vec<Destination>,
    search: Option<&str>,
    tags: &[String],
    sort: DestinationSort,
) -> Vec<Destination> {
    let search = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut refined: Vec<Destination> = destinations
        .into_iter()
        .filter(|d| search.as_deref().map_or(true, |q| matches_search(d, q)))
        .filter(|d| tags.is_empty() || d.tags.iter().any(|tag| tags.contains(tag)))
        .collect();

    sort_destinations(&mut refined, sort);
    refined
}

fn matches_search(destination: &Destination, query: &str) -> bool {
    destination.name.to_lowercase().contains(query)
        || destination.description.to_lowercase().contains(query)
        || destination
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

fn budget_rank(destination: &Destination) -> usize {
    destination
        .budget
        .as_deref()
        .unwrap_or(DEFAULT_BUDGET)
        .chars()
        .count()
}

fn rating(destination: &Destination) -> f64 {
    destination.rating.unwrap_or(0.0)
}

/// Stable, so `Default` keeps the generated order.
pub fn sort_destinations(destinations: &mut [Destination], sort: DestinationSort) {
    match sort {
        DestinationSort::Default => {}
        DestinationSort::NameAsc => destinations.sort_by(|a, b| a.name.cmp(&b.name)),
        DestinationSort::NameDesc => destinations.sort_by(|a, b| b.name.cmp(&a.name)),
        DestinationSort::RatingHigh => destinations
            .sort_by(|a, b| rating(b).partial_cmp(&rating(a)).unwrap_or(Ordering::Equal)),
        DestinationSort::RatingLow => destinations
            .sort_by(|a, b| rating(a).partial_cmp(&rating(b)).unwrap_or(Ordering::Equal)),
        DestinationSort::BudgetLow => destinations.sort_by_key(budget_rank),
        DestinationSort::BudgetHigh => {
            destinations.sort_by(|a, b| budget_rank(b).cmp(&budget_rank(a)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(name: &str, tags: &[&str], budget: Option<&str>, rating: Option<f64>) -> Destination {
        Destination {
            id: None,
            name: name.to_string(),
            description: format!("{} description", name),
            image: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            budget: budget.map(str::to_string),
            best_time: None,
            rating,
        }
    }

    fn sample() -> Vec<Destination> {
        vec![
            destination("Kyoto", &["Culture", "Food"], Some("$$$"), Some(4.8)),
            destination("Banff", &["Nature"], Some("$"), Some(4.9)),
            destination("Lisbon", &["Food", "Beach"], None, None),
        ]
    }

    fn names(list: &[Destination]) -> Vec<&str> {
        list.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_over_tags() {
        let refined = refine(sample(), Some("FOOD"), &[], DestinationSort::Default);
        assert_eq!(names(&refined), vec!["Kyoto", "Lisbon"]);
    }

    #[test]
    fn test_tag_filter_keeps_any_match() {
        let tags = vec!["Nature".to_string(), "Beach".to_string()];
        let refined = refine(sample(), None, &tags, DestinationSort::Default);
        assert_eq!(names(&refined), vec!["Banff", "Lisbon"]);
    }

    #[test]
    fn test_sort_options() {
        let mut list = sample();
        sort_destinations(&mut list, DestinationSort::NameDesc);
        assert_eq!(names(&list), vec!["Lisbon", "Kyoto", "Banff"]);

        sort_destinations(&mut list, DestinationSort::RatingHigh);
        assert_eq!(names(&list), vec!["Banff", "Kyoto", "Lisbon"]);

        // Missing budget ranks as "$$"
        sort_destinations(&mut list, DestinationSort::BudgetLow);
        assert_eq!(names(&list), vec!["Banff", "Lisbon", "Kyoto"]);

        sort_destinations(&mut list, DestinationSort::BudgetHigh);
        assert_eq!(names(&list), vec!["Kyoto", "Lisbon", "Banff"]);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(Some("Food, ,Beach")), vec!["Food", "Beach"]);
        assert!(split_list(None).is_empty());
    }
}
