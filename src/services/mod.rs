//! Front desk workflow services

pub mod access_cards;
pub mod attendance;
pub mod clock;
pub mod email;
pub mod pass;
pub mod token;
pub mod visitors;

use std::sync::Arc;

use crate::{
    config::FrontDeskConfig,
    error::{AppError, AppResult},
    models::visitor::Visitor,
    repository::FrontDeskStore,
};

use self::{clock::DeskTime, email::Mailer};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub visitors: visitors::VisitorsService,
    pub attendance: attendance::AttendanceService,
    pub access_cards: access_cards::AccessCardsService,
    store: Arc<dyn FrontDeskStore>,
}

impl Services {
    /// Create all services over the given store and mail transport
    pub fn new(
        store: Arc<dyn FrontDeskStore>,
        mailer: Arc<dyn Mailer>,
        time: DeskTime,
        front_desk: FrontDeskConfig,
    ) -> Self {
        Self {
            visitors: visitors::VisitorsService::new(
                store.clone(),
                mailer,
                time.clone(),
                front_desk,
            ),
            attendance: attendance::AttendanceService::new(store.clone(), time.clone()),
            access_cards: access_cards::AccessCardsService::new(store.clone(), time),
            store,
        }
    }

    /// Check that the store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}

/// Trim a scanned or typed identifier, rejecting blank input
pub(crate) fn require_identifier(raw: &str) -> AppResult<&str> {
    let identifier = raw.trim();
    if identifier.is_empty() {
        return Err(AppError::Validation("QR code field cannot be empty.".to_string()));
    }
    Ok(identifier)
}

pub(crate) async fn find_visitor(store: &dyn FrontDeskStore, identifier: &str) -> AppResult<Visitor> {
    store
        .find_visitor(identifier)
        .await?
        .ok_or_else(|| AppError::NotFound("QR code not found in the system".to_string()))
}
