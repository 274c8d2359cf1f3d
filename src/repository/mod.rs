//! Repository layer for database operations

pub mod access_cards;
pub mod attendance;
pub mod visitors;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        access_card::{AccessCard, NewAccessCard},
        attendance::{CheckInEvent, CheckOutEvent},
        visitor::{NewVisitor, Visitor},
    },
};

/// Storage seam used by the front desk services
#[async_trait]
pub trait FrontDeskStore: Send + Sync {
    async fn create_visitor(&self, visitor: &NewVisitor) -> AppResult<Visitor>;

    async fn find_visitor(&self, identifier: &str) -> AppResult<Option<Visitor>>;

    /// Returns `None` when no visitor has this identifier
    async fn update_visitors_count(
        &self,
        identifier: &str,
        visitors_count: i32,
    ) -> AppResult<Option<Visitor>>;

    async fn append_check_in(&self, identifier: &str, at: DateTime<Utc>) -> AppResult<CheckInEvent>;

    async fn append_check_out(&self, identifier: &str, at: DateTime<Utc>)
        -> AppResult<CheckOutEvent>;

    async fn create_access_card(&self, card: &NewAccessCard) -> AppResult<AccessCard>;

    /// Cards issued at or after `since`, newest first
    async fn access_cards_issued_since(&self, since: DateTime<Utc>) -> AppResult<Vec<AccessCard>>;

    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub visitors: visitors::VisitorsRepository,
    pub attendance: attendance::AttendanceRepository,
    pub access_cards: access_cards::AccessCardsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            visitors: visitors::VisitorsRepository::new(pool.clone()),
            attendance: attendance::AttendanceRepository::new(pool.clone()),
            access_cards: access_cards::AccessCardsRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl FrontDeskStore for Repository {
    async fn create_visitor(&self, visitor: &NewVisitor) -> AppResult<Visitor> {
        self.visitors.create(visitor).await
    }

    async fn find_visitor(&self, identifier: &str) -> AppResult<Option<Visitor>> {
        self.visitors.find(identifier).await
    }

    async fn update_visitors_count(
        &self,
        identifier: &str,
        visitors_count: i32,
    ) -> AppResult<Option<Visitor>> {
        self.visitors.update_visitors_count(identifier, visitors_count).await
    }

    async fn append_check_in(&self, identifier: &str, at: DateTime<Utc>) -> AppResult<CheckInEvent> {
        self.attendance.append_check_in(identifier, at).await
    }

    async fn append_check_out(
        &self,
        identifier: &str,
        at: DateTime<Utc>,
    ) -> AppResult<CheckOutEvent> {
        self.attendance.append_check_out(identifier, at).await
    }

    async fn create_access_card(&self, card: &NewAccessCard) -> AppResult<AccessCard> {
        self.access_cards.create(card).await
    }

    async fn access_cards_issued_since(&self, since: DateTime<Utc>) -> AppResult<Vec<AccessCard>> {
        self.access_cards.issued_since(since).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
