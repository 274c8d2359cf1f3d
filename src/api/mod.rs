//! API handlers for the front desk REST endpoints

pub mod access_cards;
pub mod attendance;
pub mod extract;
pub mod health;
pub mod openapi;
pub mod visitors;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Registration
        .route("/visitors", post(visitors::register_visitor))
        .route("/visitors/:identifier", get(visitors::get_visitor))
        .route("/visitors/:identifier/token", get(visitors::get_visitor_token))
        .route("/visitors/:identifier/pass", post(visitors::send_pass))
        .route(
            "/visitors/:identifier/visitors-count",
            put(visitors::update_visitors_count),
        )
        // Check-in / check-out
        .route("/check-ins", post(attendance::check_in))
        .route("/check-outs", post(attendance::check_out))
        // Access cards
        .route("/access-cards", post(access_cards::issue_access_card))
        .route("/access-cards/today", get(access_cards::list_issued_today))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
