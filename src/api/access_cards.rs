//! Access card endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    api::extract::AppJson,
    error::AppResult,
    models::access_card::{AccessCard, IssueAccessCard, IssuedCard},
};

/// Issue an access card
#[utoipa::path(
    post,
    path = "/access-cards",
    tag = "access_cards",
    request_body = IssueAccessCard,
    responses(
        (status = 201, description = "Access card issued", body = AccessCard),
        (status = 400, description = "Missing field", body = crate::error::ErrorResponse),
        (status = 404, description = "QR code not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn issue_access_card(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<IssueAccessCard>,
) -> AppResult<(StatusCode, Json<AccessCard>)> {
    let card = state.services.access_cards.issue(&data).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// Cards issued today
#[utoipa::path(
    get,
    path = "/access-cards/today",
    tag = "access_cards",
    responses(
        (status = 200, description = "Cards issued since local midnight, newest first", body = Vec<IssuedCard>)
    )
)]
pub async fn list_issued_today(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<IssuedCard>>> {
    let cards = state.services.access_cards.issued_today().await?;
    Ok(Json(cards))
}
