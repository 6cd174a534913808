use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::{error::ApiError, middleware::auth::AuthMiddleware};

pub mod destinations;
pub mod health;
pub mod itinerary;
pub mod recommendations;
pub mod saved_places;
pub mod translate;
pub mod trips;
pub mod weather;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(format!("Invalid request body: {}", err)).into()
}

/// Mounts every route. Extractor failures render the same `{"error": …}`
/// body as handler errors.
pub fn configure(cfg: &mut web::ServiceConfig, jwt_secret: &str) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            ApiError::Validation(format!("Invalid query: {}", err)).into()
        }))
        .app_data(web::PathConfig::default().error_handler(|err, _req| {
            ApiError::Validation(format!("Invalid path: {}", err)).into()
        }))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                // Public routes
                .route("/destinations", web::get().to(destinations::list))
                .route("/destinations/{id}", web::get().to(destinations::get_by_id))
                .route("/recommendations", web::get().to(recommendations::list))
                .route("/translate", web::post().to(translate::translate))
                .route("/weather", web::get().to(weather::forecast))
                // Protected routes
                .service(
                    web::scope("")
                        .wrap(AuthMiddleware::new(jwt_secret))
                        .route("/itinerary", web::post().to(itinerary::generate))
                        .service(
                            web::scope("/trips")
                                .route("", web::get().to(trips::list))
                                .route("", web::post().to(trips::create))
                                .route("", web::put().to(trips::update))
                                .route("/{id}", web::get().to(trips::get_by_id))
                                .route("/{id}", web::delete().to(trips::delete)),
                        )
                        .service(
                            web::scope("/saved-places")
                                .route("", web::get().to(saved_places::list))
                                .route("", web::post().to(saved_places::apply))
                                .route("/{id}", web::get().to(saved_places::is_saved)),
                        ),
                ),
        );
}
