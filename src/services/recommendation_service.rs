use std::sync::Arc;

use crate::{
    error::ApiError,
    models::recommendation::{RecommendationQuery, RecommendationSet},
    services::{
        generation_service::{ResponseShape, TextGenerator},
        prompt_service,
        response_parser,
    },
};

#[derive(Clone)]
pub struct RecommendationService {
    generator: Arc<dyn TextGenerator>,
}

impl RecommendationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn recommend(&self, query: &RecommendationQuery) -> Result<RecommendationSet, ApiError> {
        let location = query
            .resolve_location()
            .ok_or_else(|| ApiError::validation("Location is required"))?;

        let prompt = prompt_service::recommendations_prompt(&location, query.kind);
        let raw = self
            .generator
            .generate(&prompt, ResponseShape::Recommendations)
            .await?;
        response_parser::parse_recommendations(&raw, query.kind)
    }
}
