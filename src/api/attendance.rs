//! Check-in / check-out endpoints

use axum::{extract::State, Json};

use crate::{
    api::extract::AppJson,
    error::AppResult,
    models::attendance::{CheckInResult, CheckOutResult, ScanRequest},
};

/// Check a visitor in
#[utoipa::path(
    post,
    path = "/check-ins",
    tag = "attendance",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Welcome!", body = CheckInResult),
        (status = 400, description = "Empty QR code", body = crate::error::ErrorResponse),
        (status = 404, description = "QR code not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Not the registered visit date", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_in(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<ScanRequest>,
) -> AppResult<Json<CheckInResult>> {
    let result = state.services.attendance.check_in(&request.identifier).await?;
    Ok(Json(result))
}

/// Check a visitor out
#[utoipa::path(
    post,
    path = "/check-outs",
    tag = "attendance",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Checked out", body = CheckOutResult),
        (status = 400, description = "Empty QR code", body = crate::error::ErrorResponse),
        (status = 404, description = "QR code not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_out(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<ScanRequest>,
) -> AppResult<Json<CheckOutResult>> {
    let result = state.services.attendance.check_out(&request.identifier).await?;
    Ok(Json(result))
}
