use actix_web::{web, HttpResponse};

use crate::{
    error::ApiError,
    middleware::auth_context::AuthenticatedUser,
    models::trip::{
        CreateTripRequest, MessageResponse, TripListResponse, TripResponse, TripSavedResponse,
        TripUpdatedResponse, TripView, UpdateTripRequest,
    },
    services::response_parser,
    state::AppState,
};

pub async fn list(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let trips = state.trips.list(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(TripListResponse {
        trips: trips.into_iter().map(TripView::summary).collect(),
    }))
}

pub async fn get_by_id(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let trip = state.trips.get(&path, &user.user_id).await?;
    Ok(HttpResponse::Ok().json(TripResponse {
        trip: TripView::detail(trip),
    }))
}

pub async fn create(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    request: web::Json<CreateTripRequest>,
) -> Result<HttpResponse, ApiError> {
    let itinerary = request
        .into_inner()
        .itinerary
        .ok_or_else(|| ApiError::validation("Itinerary is required"))?;
    if itinerary.days.is_empty() {
        return Err(ApiError::validation("Itinerary must contain at least one day"));
    }
    // Client supplied, so a broken day sequence is the caller's mistake.
    response_parser::validate_day_sequence(&itinerary, itinerary.duration).map_err(|err| match err {
        ApiError::Parse(reason) => ApiError::Validation(reason),
        other => other,
    })?;

    let trip_id = state
        .trips
        .save_itinerary(&user.user_id, &itinerary, None)
        .await?;

    Ok(HttpResponse::Ok().json(TripSavedResponse {
        message: "Trip saved successfully".to_string(),
        trip_id: trip_id.to_hex(),
    }))
}

pub async fn update(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    request: web::Json<UpdateTripRequest>,
) -> Result<HttpResponse, ApiError> {
    let trip = state
        .trips
        .update(
            request.trip_id.as_deref(),
            request.updates.as_ref(),
            &user.user_id,
        )
        .await?;

    Ok(HttpResponse::Ok().json(TripUpdatedResponse {
        message: "Trip updated successfully".to_string(),
        trip: TripView::summary(trip),
    }))
}

pub async fn delete(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state.trips.delete(&path, &user.user_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Trip deleted successfully".to_string(),
    }))
}
