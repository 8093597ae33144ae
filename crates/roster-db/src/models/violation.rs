//! Violation database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for violations table
#[derive(Debug, Clone, FromRow)]
pub struct ViolationModel {
    pub id: Uuid,
    pub member_id: Uuid,
    pub violation_type: String,
    pub violation_name: String,
    pub custom_violation_name: Option<String>,
    pub description: Option<String>,
    pub severity: String,
    pub violation_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
