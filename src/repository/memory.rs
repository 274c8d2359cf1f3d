//! In-memory store for unit tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::FrontDeskStore;
use crate::{
    error::{AppError, AppResult},
    models::{
        access_card::{AccessCard, NewAccessCard},
        attendance::{CheckInEvent, CheckOutEvent},
        visitor::{NewVisitor, Visitor},
    },
};

#[derive(Default)]
struct Tables {
    visitors: Vec<Visitor>,
    check_ins: Vec<CheckInEvent>,
    check_outs: Vec<CheckOutEvent>,
    access_cards: Vec<AccessCard>,
}

impl Tables {
    fn require_visitor(&self, identifier: &str) -> AppResult<()> {
        if self.visitors.iter().any(|v| v.identifier == identifier) {
            Ok(())
        } else {
            Err(AppError::NotFound("QR code not found in the system".to_string()))
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_ins(&self) -> Vec<CheckInEvent> {
        self.tables.lock().unwrap().check_ins.clone()
    }

    pub fn check_outs(&self) -> Vec<CheckOutEvent> {
        self.tables.lock().unwrap().check_outs.clone()
    }

    pub fn access_cards(&self) -> Vec<AccessCard> {
        self.tables.lock().unwrap().access_cards.clone()
    }
}

#[async_trait]
impl FrontDeskStore for MemoryStore {
    async fn create_visitor(&self, visitor: &NewVisitor) -> AppResult<Visitor> {
        let mut tables = self.tables.lock().unwrap();
        if tables.visitors.iter().any(|v| v.identifier == visitor.identifier) {
            return Err(AppError::Internal("duplicate identifier".to_string()));
        }
        let row = Visitor {
            identifier: visitor.identifier.clone(),
            name: visitor.name.clone(),
            surname: visitor.surname.clone(),
            company_name: visitor.company_name.clone(),
            visitors_count: visitor.visitors_count,
            host: visitor.host.clone(),
            visit_date: visitor.visit_date,
            registration_time: visitor.registration_time,
        };
        tables.visitors.push(row.clone());
        Ok(row)
    }

    async fn find_visitor(&self, identifier: &str) -> AppResult<Option<Visitor>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.visitors.iter().find(|v| v.identifier == identifier).cloned())
    }

    async fn update_visitors_count(
        &self,
        identifier: &str,
        visitors_count: i32,
    ) -> AppResult<Option<Visitor>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .visitors
            .iter_mut()
            .find(|v| v.identifier == identifier)
            .map(|v| {
                v.visitors_count = visitors_count;
                v.clone()
            }))
    }

    async fn append_check_in(&self, identifier: &str, at: DateTime<Utc>) -> AppResult<CheckInEvent> {
        let mut tables = self.tables.lock().unwrap();
        tables.require_visitor(identifier)?;
        let row = CheckInEvent {
            id: tables.check_ins.len() as i32 + 1,
            identifier: identifier.to_string(),
            check_in_time: at,
        };
        tables.check_ins.push(row.clone());
        Ok(row)
    }

    async fn append_check_out(
        &self,
        identifier: &str,
        at: DateTime<Utc>,
    ) -> AppResult<CheckOutEvent> {
        let mut tables = self.tables.lock().unwrap();
        tables.require_visitor(identifier)?;
        let row = CheckOutEvent {
            id: tables.check_outs.len() as i32 + 1,
            identifier: identifier.to_string(),
            check_out_time: at,
        };
        tables.check_outs.push(row.clone());
        Ok(row)
    }

    async fn create_access_card(&self, card: &NewAccessCard) -> AppResult<AccessCard> {
        let mut tables = self.tables.lock().unwrap();
        tables.require_visitor(&card.identifier)?;
        let row = AccessCard {
            id: tables.access_cards.len() as i32 + 1,
            identifier: card.identifier.clone(),
            phone_number: card.phone_number.clone(),
            card_number: card.card_number.clone(),
            issue_time: card.issue_time,
        };
        tables.access_cards.push(row.clone());
        Ok(row)
    }

    async fn access_cards_issued_since(&self, since: DateTime<Utc>) -> AppResult<Vec<AccessCard>> {
        let tables = self.tables.lock().unwrap();
        let mut cards: Vec<AccessCard> = tables
            .access_cards
            .iter()
            .filter(|c| c.issue_time >= since)
            .cloned()
            .collect();
        cards.sort_by(|a, b| b.issue_time.cmp(&a.issue_time).then(b.id.cmp(&a.id)));
        Ok(cards)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
