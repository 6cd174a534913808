use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wayfarer_api::{
    config::AppConfig,
    db, routes,
    services::{
        generation_service::GeminiClient,
        saved_place_service::MongoSavedPlaceRepository,
        translation_service::LibreTranslateClient,
        trip_service::MongoTripRepository,
        weather_service::OpenWeatherClient,
    },
    state::{AppState, ServiceSettings},
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let client = db::mongo::create_mongo_client(&config.mongodb_uri, &config.database)
        .await
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    let trips = MongoTripRepository::new(client.clone(), &config.database);
    let saved_places = MongoSavedPlaceRepository::new(client, &config.database);
    if let Err(err) = saved_places.ensure_indexes().await {
        log::warn!("Could not create saved place indexes: {}", err);
    }

    let settings = ServiceSettings {
        environment: config.environment.clone(),
        generation_configured: true,
        translation_configured: config.translate.api_key.is_some(),
        weather_configured: config.weather.api_key.is_some(),
    };

    let state = AppState::new(
        Arc::new(GeminiClient::new(&config.gemini)),
        Arc::new(trips),
        Arc::new(saved_places),
        Arc::new(LibreTranslateClient::new(&config.translate)),
        Arc::new(OpenWeatherClient::new(&config.weather)),
        settings,
    );
    let state = web::Data::new(state);
    let jwt_secret = config.jwt_secret.clone();

    log::info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .configure(|cfg| routes::configure(cfg, &jwt_secret))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
