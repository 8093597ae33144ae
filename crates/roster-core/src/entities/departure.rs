//! Departure entity - a member leaving the community

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::value_objects::Tenure;

/// Departure entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub id: Uuid,
    pub member_id: Uuid,
    pub departure_reason: String,
    pub departed_at: NaiveDate,
    pub tenure_days: i32,
    pub created_at: DateTime<Utc>,
}

/// Values for inserting a departure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeparture {
    pub member_id: Uuid,
    pub departure_reason: String,
    pub departed_at: NaiveDate,
    pub tenure_days: i32,
}

impl NewDeparture {
    /// Build a departure, deriving tenure from the member's join date (if known)
    pub fn new(
        member_id: Uuid,
        departure_reason: String,
        departed_at: NaiveDate,
        join_date: Option<NaiveDate>,
    ) -> Self {
        let tenure = Tenure::for_departure(join_date, departed_at);
        Self {
            member_id,
            departure_reason,
            departed_at,
            tenure_days: tenure.days_i32(),
        }
    }
}
