use actix_web::{web, HttpResponse};

use crate::{
    error::ApiError,
    models::destination::{DestinationDetailResponse, DestinationQuery, DestinationsResponse},
    services::weather_service,
    state::AppState,
};

pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<DestinationQuery>,
) -> Result<HttpResponse, ApiError> {
    let destinations = state.destinations.suggest(&query).await?;
    Ok(HttpResponse::Ok().json(DestinationsResponse { destinations }))
}

pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let destination = state.destinations.detail(&path).await?;
    let forecast = weather_service::forecast_or_empty(state.weather.as_ref(), &destination.name).await;
    Ok(HttpResponse::Ok().json(DestinationDetailResponse {
        destination,
        forecast,
    }))
}
