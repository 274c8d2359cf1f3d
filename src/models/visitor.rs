//! Visitor model and registration requests

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Display format of visit dates (day.month.year)
pub const VISIT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Registered visitor
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Visitor {
    /// Token identifier encoded in the QR code
    pub identifier: String,
    pub name: String,
    pub surname: String,
    pub company_name: Option<String>,
    /// Number of people in the visiting party
    pub visitors_count: i32,
    /// Person being visited
    pub host: String,
    #[serde(with = "visit_date_format")]
    #[schema(value_type = String, example = "25.12.2024")]
    pub visit_date: NaiveDate,
    pub registration_time: DateTime<Utc>,
}

impl Visitor {
    pub fn display_visit_date(&self) -> String {
        format_visit_date(self.visit_date)
    }
}

/// Row to insert for a new registration
#[derive(Debug, Clone)]
pub struct NewVisitor {
    pub identifier: String,
    pub name: String,
    pub surname: String,
    pub company_name: Option<String>,
    pub visitors_count: i32,
    pub host: String,
    pub visit_date: NaiveDate,
    pub registration_time: DateTime<Utc>,
}

/// Register visitor request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterVisitor {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Surname is required"))]
    pub surname: String,
    pub company_name: Option<String>,
    /// Visitors count as typed (digits only)
    #[validate(length(min = 1, message = "Visitors count is required"))]
    pub visitors_count: String,
    #[validate(length(min = 1, message = "Host is required"))]
    pub host: String,
    /// Visit date, dd.mm.yyyy or yyyy-mm-dd
    #[validate(length(min = 1, message = "Visit date is required"))]
    #[schema(example = "25.12.2024")]
    pub visit_date: String,
}

/// Update visitors count request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVisitorsCount {
    /// New count as typed (digits only)
    pub visitors_count: String,
}

/// Send guest pass request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendPass {
    #[validate(
        length(min = 1, message = "Please enter a valid email address."),
        contains(pattern = "@", message = "Please enter a valid email address.")
    )]
    pub recipient: String,
}

pub fn format_visit_date(date: NaiveDate) -> String {
    date.format(VISIT_DATE_FORMAT).to_string()
}

/// Parse a visit date typed at the desk or picked from a calendar
pub fn parse_visit_date(raw: &str) -> AppResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, VISIT_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| AppError::Validation(format!("Invalid visit date: {:?}", raw)))
}

/// Parse a visitors count: ASCII digits only, no sign
pub fn parse_visitors_count(raw: &str) -> AppResult<i32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Visitor count must be a non-negative number".to_string(),
        ));
    }
    raw.parse::<i32>()
        .map_err(|_| AppError::Validation(format!("Visitor count out of range: {}", raw)))
}

mod visit_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_visit_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_visit_date(&raw).map_err(serde::de::Error::custom)
    }
}
