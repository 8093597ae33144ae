//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed responses for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create member request
#[derive(Debug, Default, Serialize)]
pub struct CreateMemberRequest {
    pub nickname: Option<String>,
    pub discord_username: Option<String>,
    pub roblox_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}

impl CreateMemberRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            nickname: Some(format!("member{suffix}")),
            discord_username: Some(format!("member{suffix}#0001")),
            roblox_username: Some(format!("Member{suffix}RBX")),
            join_date: None,
        }
    }

    pub fn joined(join_date: &str) -> Self {
        Self {
            join_date: Some(join_date.to_string()),
            ..Self::unique()
        }
    }
}

/// Update member request
#[derive(Debug, Default, Serialize)]
pub struct UpdateMemberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roblox_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Create violation request
#[derive(Debug, Serialize)]
pub struct CreateViolationRequest {
    pub member_id: String,
    pub violation_type: String,
    pub violation_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_violation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation_date: Option<String>,
}

impl CreateViolationRequest {
    pub fn template(member_id: &str, name: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            violation_type: "template".to_string(),
            violation_name: name.to_string(),
            custom_violation_name: None,
            description: None,
            severity: None,
            violation_date: None,
        }
    }

    pub fn custom(member_id: &str, name: &str, severity: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            violation_type: "custom".to_string(),
            violation_name: name.to_string(),
            custom_violation_name: Some(name.to_string()),
            description: Some("Reported by staff".to_string()),
            severity: Some(severity.to_string()),
            violation_date: None,
        }
    }
}

/// Create departure request
#[derive(Debug, Serialize)]
pub struct CreateDepartureRequest {
    pub member_id: String,
    pub departure_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departed_at: Option<String>,
}

impl CreateDepartureRequest {
    pub fn new(member_id: &str, reason: &str, departed_at: Option<&str>) -> Self {
        Self {
            member_id: member_id.to_string(),
            departure_reason: reason.to_string(),
            departed_at: departed_at.map(str::to_string),
        }
    }
}

/// Member response
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: String,
    pub nickname: String,
    pub discord_username: String,
    pub roblox_username: String,
    pub join_date: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Member statistics response
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct MemberStatsResponse {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub active_percent: i64,
}

/// Violation response
#[derive(Debug, Deserialize)]
pub struct ViolationResponse {
    pub id: String,
    pub member_id: String,
    pub violation_type: String,
    pub violation_name: String,
    pub custom_violation_name: Option<String>,
    pub description: Option<String>,
    pub severity: String,
    pub violation_date: String,
    pub created_at: String,
}

/// Violation feed entry
#[derive(Debug, Deserialize)]
pub struct ViolationFeedItem {
    #[serde(flatten)]
    pub violation: ViolationResponse,
    pub nickname: String,
}

/// Departure response
#[derive(Debug, Deserialize)]
pub struct DepartureResponse {
    pub id: String,
    pub member_id: String,
    pub departure_reason: String,
    pub departed_at: String,
    pub tenure_days: i64,
    pub created_at: String,
}

/// Departure feed entry
#[derive(Debug, Deserialize)]
pub struct DepartureFeedItem {
    #[serde(flatten)]
    pub departure: DepartureResponse,
    pub nickname: String,
    pub join_date: String,
    pub tenure_label: String,
}

/// Plain message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Delete-with-count response
#[derive(Debug, Deserialize)]
pub struct DeleteCountResponse {
    pub message: String,
    pub count: u64,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
