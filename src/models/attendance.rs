//! Check-in / check-out ledger rows and results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Check-in ledger row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CheckInEvent {
    pub id: i32,
    pub identifier: String,
    pub check_in_time: DateTime<Utc>,
}

/// Check-out ledger row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CheckOutEvent {
    pub id: i32,
    pub identifier: String,
    pub check_out_time: DateTime<Utc>,
}

/// Scanned or typed QR code
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScanRequest {
    pub identifier: String,
}

/// Successful check-in
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckInResult {
    pub identifier: String,
    pub host: String,
    pub visitors_count: i32,
    pub check_in_time: DateTime<Utc>,
}

/// Successful check-out
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckOutResult {
    pub identifier: String,
    pub visitors_count: i32,
    pub check_out_time: DateTime<Utc>,
}
