use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: BTreeMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

impl ServiceStatus {
    fn ok(details: &str) -> Self {
        Self {
            status: "ok".to_string(),
            details: Some(details.to_string()),
        }
    }

    fn error(details: String) -> Self {
        Self {
            status: "error".to_string(),
            details: Some(details),
        }
    }
}

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let settings = &state.settings;
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: BTreeMap::new(),
        environment: settings.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    health
        .services
        .insert("storage".to_string(), check_storage(&state).await);
    health.services.insert(
        "generation".to_string(),
        check_configured(settings.generation_configured, "GEMINI_API_KEY"),
    );
    health.services.insert(
        "translation".to_string(),
        check_configured(settings.translation_configured, "TRANSLATE_API_KEY"),
    );
    health.services.insert(
        "weather".to_string(),
        check_configured(settings.weather_configured, "OPENWEATHER_API_KEY"),
    );

    // Any service that is not ok degrades the overall status
    if health.services.values().any(|s| s.status != "ok") {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_storage(state: &AppState) -> ServiceStatus {
    match state.trips.ping().await {
        Ok(()) => ServiceStatus::ok("Connected successfully to storage"),
        Err(e) => {
            log::error!("Storage health check failed: {}", e);
            ServiceStatus::error("Failed to reach storage".to_string())
        }
    }
}

fn check_configured(configured: bool, key: &str) -> ServiceStatus {
    if configured {
        ServiceStatus::ok("API key configured")
    } else {
        ServiceStatus::error(format!("{} not set", key))
    }
}
