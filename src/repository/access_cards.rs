//! Access cards repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::access_card::{AccessCard, NewAccessCard},
};

#[derive(Clone)]
pub struct AccessCardsRepository {
    pool: Pool<Postgres>,
}

impl AccessCardsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn create(&self, card: &NewAccessCard) -> AppResult<AccessCard> {
        let row = sqlx::query_as::<_, AccessCard>(
            r#"
            INSERT INTO access_cards (identifier, phone_number, card_number, issue_time)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&card.identifier)
        .bind(&card.phone_number)
        .bind(&card.card_number)
        .bind(card.issue_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Cards issued at or after `since`, newest first
    pub async fn issued_since(&self, since: DateTime<Utc>) -> AppResult<Vec<AccessCard>> {
        let rows = sqlx::query_as::<_, AccessCard>(
            "SELECT * FROM access_cards WHERE issue_time >= $1 ORDER BY issue_time DESC, id DESC",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
