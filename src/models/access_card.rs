//! Access card model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Issued access card
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AccessCard {
    pub id: i32,
    /// Token identifier of the visitor holding the card
    pub identifier: String,
    pub phone_number: String,
    pub card_number: String,
    pub issue_time: DateTime<Utc>,
}

/// Row to insert for a new card
#[derive(Debug, Clone)]
pub struct NewAccessCard {
    pub identifier: String,
    pub phone_number: String,
    pub card_number: String,
    pub issue_time: DateTime<Utc>,
}

/// Issue access card request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IssueAccessCard {
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    pub identifier: String,
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    pub card_number: String,
}

/// Card listed on the "issued today" board
#[derive(Debug, Serialize, ToSchema)]
pub struct IssuedCard {
    #[serde(flatten)]
    pub card: AccessCard,
    /// Issue time in the front desk offset, dd.mm.yyyy HH:MM:SS
    pub issued_at_local: String,
}
