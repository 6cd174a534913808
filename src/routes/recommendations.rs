use actix_web::{web, HttpResponse};

use crate::{error::ApiError, models::recommendation::RecommendationQuery, state::AppState};

pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<RecommendationQuery>,
) -> Result<HttpResponse, ApiError> {
    let recommendations = state.recommendations.recommend(&query).await?;
    Ok(HttpResponse::Ok().json(recommendations))
}
