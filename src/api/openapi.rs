//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{access_cards, attendance, health, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Front Desk API",
        version = "1.0.0",
        description = "Visitor registration, check-in/check-out and access card REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Visitors
        visitors::register_visitor,
        visitors::get_visitor,
        visitors::get_visitor_token,
        visitors::send_pass,
        visitors::update_visitors_count,
        // Attendance
        attendance::check_in,
        attendance::check_out,
        // Access cards
        access_cards::issue_access_card,
        access_cards::list_issued_today,
    ),
    components(
        schemas(
            // Visitors
            crate::models::visitor::Visitor,
            crate::models::visitor::RegisterVisitor,
            crate::models::visitor::UpdateVisitorsCount,
            crate::models::visitor::SendPass,
            crate::services::visitors::Registration,
            visitors::MessageResponse,
            // Attendance
            crate::models::attendance::ScanRequest,
            crate::models::attendance::CheckInResult,
            crate::models::attendance::CheckOutResult,
            // Access cards
            crate::models::access_card::AccessCard,
            crate::models::access_card::IssueAccessCard,
            crate::models::access_card::IssuedCard,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "visitors", description = "Registration and guest passes"),
        (name = "attendance", description = "Check-in and check-out"),
        (name = "access_cards", description = "Access card issuance")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
