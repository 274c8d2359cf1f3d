//! Check-in and check-out at the front desk

use std::sync::Arc;

use super::{clock::DeskTime, find_visitor, require_identifier};
use crate::{
    error::{AppError, AppResult},
    models::attendance::{CheckInResult, CheckOutResult},
    repository::FrontDeskStore,
};

#[derive(Clone)]
pub struct AttendanceService {
    store: Arc<dyn FrontDeskStore>,
    time: DeskTime,
}

impl AttendanceService {
    pub fn new(store: Arc<dyn FrontDeskStore>, time: DeskTime) -> Self {
        Self { store, time }
    }

    /// Check a visitor in. Only valid on the registered visit date; repeated
    /// check-ins on that day are all recorded.
    pub async fn check_in(&self, identifier: &str) -> AppResult<CheckInResult> {
        let identifier = require_identifier(identifier)?;
        let visitor = find_visitor(self.store.as_ref(), identifier).await?;

        let today = self.time.today();
        if visitor.visit_date != today {
            tracing::info!(
                identifier = %identifier,
                expected = %visitor.display_visit_date(),
                "Check-in refused, wrong visit date"
            );
            return Err(AppError::DateMismatch {
                expected: visitor.display_visit_date(),
            });
        }

        let event = self.store.append_check_in(identifier, self.time.now()).await?;
        tracing::info!(identifier = %identifier, host = %visitor.host, "Visitor checked in");

        Ok(CheckInResult {
            identifier: event.identifier,
            host: visitor.host,
            visitors_count: visitor.visitors_count,
            check_in_time: event.check_in_time,
        })
    }

    /// Check a visitor out. The visit date is not inspected.
    pub async fn check_out(&self, identifier: &str) -> AppResult<CheckOutResult> {
        let identifier = require_identifier(identifier)?;
        let visitor = find_visitor(self.store.as_ref(), identifier).await?;

        let event = self.store.append_check_out(identifier, self.time.now()).await?;
        tracing::info!(identifier = %identifier, "Visitor checked out");

        Ok(CheckOutResult {
            identifier: event.identifier,
            visitors_count: visitor.visitors_count,
            check_out_time: event.check_out_time,
        })
    }
}
