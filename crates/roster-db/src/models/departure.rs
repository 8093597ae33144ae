//! Departure database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for member_departures table
#[derive(Debug, Clone, FromRow)]
pub struct DepartureModel {
    pub id: Uuid,
    pub member_id: Uuid,
    pub departure_reason: String,
    pub departed_at: NaiveDate,
    pub tenure_days: i32,
    pub created_at: DateTime<Utc>,
}
