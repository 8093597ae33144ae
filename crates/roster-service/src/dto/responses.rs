//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Dates serialize
//! as `YYYY-MM-DD`, timestamps as RFC 3339.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use roster_core::entities::{MemberStatus, Severity, ViolationType};

/// Nickname shown for records whose member no longer exists
pub const UNKNOWN_NICKNAME: &str = "Unknown";

// ============================================================================
// Common Response Types
// ============================================================================

/// Confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Confirmation message with the number of removed rows
#[derive(Debug, Clone, Serialize)]
pub struct DeleteCountResponse {
    pub message: String,
    pub count: u64,
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub nickname: String,
    pub discord_username: String,
    pub roblox_username: String,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate member counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberStatsResponse {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    /// Active share, whole percent
    pub active_percent: i64,
}

// ============================================================================
// Violation Responses
// ============================================================================

/// Violation as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationResponse {
    pub id: Uuid,
    pub member_id: Uuid,
    pub violation_type: ViolationType,
    pub violation_name: String,
    pub custom_violation_name: Option<String>,
    pub description: Option<String>,
    pub severity: Severity,
    pub violation_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Violation joined with its member's nickname
#[derive(Debug, Clone, Serialize)]
pub struct ViolationFeedItem {
    #[serde(flatten)]
    pub violation: ViolationResponse,
    pub nickname: String,
}

// ============================================================================
// Departure Responses
// ============================================================================

/// Departure as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureResponse {
    pub id: Uuid,
    pub member_id: Uuid,
    pub departure_reason: String,
    pub departed_at: NaiveDate,
    pub tenure_days: i32,
    pub created_at: DateTime<Utc>,
}

/// Departure joined with member details and a display tenure
#[derive(Debug, Clone, Serialize)]
pub struct DepartureFeedItem {
    #[serde(flatten)]
    pub departure: DepartureResponse,
    pub nickname: String,
    pub join_date: NaiveDate,
    /// `"{n} months"` or `"{n} days"`
    pub tenure_label: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
