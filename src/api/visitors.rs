//! Visitor registration endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::extract::AppJson,
    error::AppResult,
    models::visitor::{RegisterVisitor, SendPass, UpdateVisitorsCount, Visitor},
    services::visitors::Registration,
};

/// Plain status message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Register a new visitor
#[utoipa::path(
    post,
    path = "/visitors",
    tag = "visitors",
    request_body = RegisterVisitor,
    responses(
        (status = 201, description = "Visitor registered, QR code created", body = Registration),
        (status = 400, description = "Missing or malformed field", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_visitor(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<RegisterVisitor>,
) -> AppResult<(StatusCode, Json<Registration>)> {
    let registration = state.services.visitors.register(&data).await?;
    Ok((StatusCode::CREATED, Json(registration)))
}

/// Get a visitor by token identifier
#[utoipa::path(
    get,
    path = "/visitors/{identifier}",
    tag = "visitors",
    params(("identifier" = String, Path, description = "Token identifier")),
    responses(
        (status = 200, description = "Visitor details", body = Visitor),
        (status = 404, description = "Unknown identifier", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_visitor(
    State(state): State<crate::AppState>,
    Path(identifier): Path<String>,
) -> AppResult<Json<Visitor>> {
    let visitor = state.services.visitors.get(&identifier).await?;
    Ok(Json(visitor))
}

/// QR code of a visitor as PNG
#[utoipa::path(
    get,
    path = "/visitors/{identifier}/token",
    tag = "visitors",
    params(("identifier" = String, Path, description = "Token identifier")),
    responses(
        (status = 200, description = "QR code image", body = Vec<u8>, content_type = "image/png"),
        (status = 404, description = "Unknown identifier", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_visitor_token(
    State(state): State<crate::AppState>,
    Path(identifier): Path<String>,
) -> AppResult<impl IntoResponse> {
    let png = state.services.visitors.token_png(&identifier).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// Email the guest pass of a visitor
#[utoipa::path(
    post,
    path = "/visitors/{identifier}/pass",
    tag = "visitors",
    params(("identifier" = String, Path, description = "Token identifier")),
    request_body = SendPass,
    responses(
        (status = 200, description = "Guest pass sent", body = MessageResponse),
        (status = 400, description = "Invalid recipient", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown identifier", body = crate::error::ErrorResponse),
        (status = 502, description = "Mail transport failed", body = crate::error::ErrorResponse),
        (status = 504, description = "Mail server unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn send_pass(
    State(state): State<crate::AppState>,
    Path(identifier): Path<String>,
    AppJson(data): AppJson<SendPass>,
) -> AppResult<Json<MessageResponse>> {
    state.services.visitors.send_pass(&identifier, &data).await?;
    Ok(Json(MessageResponse {
        message: format!("Guest pass successfully sent to {}", data.recipient.trim()),
    }))
}

/// Change the number of visitors
#[utoipa::path(
    put,
    path = "/visitors/{identifier}/visitors-count",
    tag = "visitors",
    params(("identifier" = String, Path, description = "Token identifier")),
    request_body = UpdateVisitorsCount,
    responses(
        (status = 200, description = "Visitors count updated", body = Visitor),
        (status = 400, description = "Not a non-negative number", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown identifier", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_visitors_count(
    State(state): State<crate::AppState>,
    Path(identifier): Path<String>,
    AppJson(data): AppJson<UpdateVisitorsCount>,
) -> AppResult<Json<Visitor>> {
    let visitor = state
        .services
        .visitors
        .update_visitors_count(&identifier, &data.visitors_count)
        .await?;
    Ok(Json(visitor))
}
