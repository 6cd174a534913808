use actix_web::{web, HttpResponse};

use crate::{
    error::ApiError,
    models::weather::{ForecastResponse, WeatherQuery},
    services::weather_service,
    state::AppState,
};

pub async fn forecast(
    state: web::Data<AppState>,
    query: web::Query<WeatherQuery>,
) -> Result<HttpResponse, ApiError> {
    let destination = query
        .destination
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::validation("Destination is required"))?;

    let forecast = weather_service::forecast_or_empty(state.weather.as_ref(), destination).await;
    Ok(HttpResponse::Ok().json(ForecastResponse { forecast }))
}
