use actix_web::{web, HttpResponse};

use crate::{
    error::ApiError,
    middleware::auth_context::AuthenticatedUser,
    models::{
        saved_place::{
            IsSavedResponse, PlaceAction, PlaceSavedResponse, SavedPlaceRequest, SavedPlaceView,
            SavedPlacesResponse,
        },
        trip::MessageResponse,
    },
    state::AppState,
};

pub async fn list(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let places = state.saved_places.list(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(SavedPlacesResponse {
        saved_places: places.into_iter().map(SavedPlaceView::from).collect(),
    }))
}

pub async fn is_saved(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let is_saved = state.saved_places.is_saved(&user.user_id, &path).await?;
    Ok(HttpResponse::Ok().json(IsSavedResponse { is_saved }))
}

pub async fn apply(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    request: web::Json<SavedPlaceRequest>,
) -> Result<HttpResponse, ApiError> {
    let SavedPlaceRequest { action, place } = request.into_inner();
    match action {
        PlaceAction::Save => {
            let saved = state.saved_places.save(&user.user_id, place).await?;
            Ok(HttpResponse::Ok().json(PlaceSavedResponse {
                message: "Place saved successfully".to_string(),
                saved_place: saved.into(),
            }))
        }
        PlaceAction::Delete => {
            state.saved_places.remove(&user.user_id, &place).await?;
            Ok(HttpResponse::Ok().json(MessageResponse {
                message: "Place removed successfully".to_string(),
            }))
        }
    }
}
