use actix_web::{web, HttpResponse};

use crate::{
    error::ApiError,
    middleware::auth_context::AuthenticatedUser,
    models::{itinerary::ItineraryResponse, preferences::ItineraryRequest},
    state::AppState,
};

pub async fn generate(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    request: web::Json<ItineraryRequest>,
) -> Result<HttpResponse, ApiError> {
    let itinerary = state.itineraries.plan(&user.user_id, &request).await?;
    Ok(HttpResponse::Ok().json(ItineraryResponse { itinerary }))
}
