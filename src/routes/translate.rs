use actix_web::{web, HttpResponse};

use crate::{error::ApiError, models::translation::TranslationRequest, state::AppState};

/// Always 200 once the request is valid; upstream trouble is reported in
/// the body.
pub async fn translate(
    state: web::Data<AppState>,
    request: web::Json<TranslationRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = state.translation.translate(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}
