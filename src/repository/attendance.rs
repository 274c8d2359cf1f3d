//! Check-in and check-out ledgers

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::attendance::{CheckInEvent, CheckOutEvent},
};

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: Pool<Postgres>,
}

impl AttendanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Append a check-in row. Unknown identifiers fail on the foreign key.
    pub async fn append_check_in(
        &self,
        identifier: &str,
        at: DateTime<Utc>,
    ) -> AppResult<CheckInEvent> {
        let row = sqlx::query_as::<_, CheckInEvent>(
            "INSERT INTO check_ins (identifier, check_in_time) VALUES ($1, $2) RETURNING *",
        )
        .bind(identifier)
        .bind(at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Append a check-out row
    pub async fn append_check_out(
        &self,
        identifier: &str,
        at: DateTime<Utc>,
    ) -> AppResult<CheckOutEvent> {
        let row = sqlx::query_as::<_, CheckOutEvent>(
            "INSERT INTO check_outs (identifier, check_out_time) VALUES ($1, $2) RETURNING *",
        )
        .bind(identifier)
        .bind(at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
