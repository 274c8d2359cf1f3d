//! Data models for the front desk

pub mod access_card;
pub mod attendance;
pub mod visitor;

pub use access_card::{AccessCard, IssuedCard, NewAccessCard};
pub use attendance::{CheckInEvent, CheckInResult, CheckOutEvent, CheckOutResult};
pub use visitor::{NewVisitor, Visitor};
