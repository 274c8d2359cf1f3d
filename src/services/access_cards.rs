//! Access card issuance

use std::sync::Arc;

use validator::Validate;

use super::{clock::DeskTime, find_visitor};
use crate::{
    error::{AppError, AppResult},
    models::access_card::{AccessCard, IssueAccessCard, IssuedCard, NewAccessCard},
    repository::FrontDeskStore,
};

const ISSUED_AT_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Clone)]
pub struct AccessCardsService {
    store: Arc<dyn FrontDeskStore>,
    time: DeskTime,
}

impl AccessCardsService {
    pub fn new(store: Arc<dyn FrontDeskStore>, time: DeskTime) -> Self {
        Self { store, time }
    }

    /// Issue a physical card to a registered visitor
    pub async fn issue(&self, data: &IssueAccessCard) -> AppResult<AccessCard> {
        let card = NewAccessCard {
            identifier: data.identifier.trim().to_string(),
            phone_number: data.phone_number.trim().to_string(),
            card_number: data.card_number.trim().to_string(),
            issue_time: self.time.now(),
        };
        if card.identifier.is_empty() || card.phone_number.is_empty() || card.card_number.is_empty() {
            return Err(AppError::Validation("Please fill in all fields.".to_string()));
        }
        data.validate()
            .map_err(|_| AppError::Validation("Please fill in all fields.".to_string()))?;

        find_visitor(self.store.as_ref(), &card.identifier).await?;

        let card = self.store.create_access_card(&card).await?;
        tracing::info!(
            identifier = %card.identifier,
            card_number = %card.card_number,
            "Access card issued"
        );
        Ok(card)
    }

    /// Cards issued since local midnight, newest first
    pub async fn issued_today(&self) -> AppResult<Vec<IssuedCard>> {
        let since = self.time.start_of_today();
        let cards = self.store.access_cards_issued_since(since).await?;

        Ok(cards
            .into_iter()
            .map(|card| IssuedCard {
                issued_at_local: self
                    .time
                    .local(card.issue_time)
                    .format(ISSUED_AT_FORMAT)
                    .to_string(),
                card,
            })
            .collect())
    }
}
