//! Front desk visitor management
//!
//! Registers visitors and mints their QR tokens, emails guest passes,
//! records check-ins and check-outs, and issues physical access cards,
//! behind a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
