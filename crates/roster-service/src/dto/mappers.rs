//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! the in-memory joins behind the feed endpoints.

use std::collections::HashMap;

use uuid::Uuid;

use roster_core::entities::{Departure, Member, MemberCounts, Violation};
use roster_core::Tenure;

use super::responses::{
    DepartureFeedItem, DepartureResponse, MemberResponse, MemberStatsResponse, ViolationFeedItem,
    ViolationResponse, UNKNOWN_NICKNAME,
};

// ============================================================================
// Member Mappers
// ============================================================================

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            nickname: member.nickname,
            discord_username: member.discord_username,
            roblox_username: member.roblox_username,
            join_date: member.join_date,
            status: member.status,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

impl From<MemberCounts> for MemberStatsResponse {
    fn from(counts: MemberCounts) -> Self {
        Self {
            total: counts.total(),
            active: counts.active,
            inactive: counts.inactive,
            active_percent: counts.active_percent(),
        }
    }
}

// ============================================================================
// Violation Mappers
// ============================================================================

impl From<Violation> for ViolationResponse {
    fn from(violation: Violation) -> Self {
        Self {
            id: violation.id,
            member_id: violation.member_id,
            violation_type: violation.violation_type,
            violation_name: violation.violation_name,
            custom_violation_name: violation.custom_violation_name,
            description: violation.description,
            severity: violation.severity,
            violation_date: violation.violation_date,
            created_at: violation.created_at,
        }
    }
}

// ============================================================================
// Departure Mappers
// ============================================================================

impl From<Departure> for DepartureResponse {
    fn from(departure: Departure) -> Self {
        Self {
            id: departure.id,
            member_id: departure.member_id,
            departure_reason: departure.departure_reason,
            departed_at: departure.departed_at,
            tenure_days: departure.tenure_days,
            created_at: departure.created_at,
        }
    }
}

// ============================================================================
// Feed joins
// ============================================================================

/// Members indexed by id for feed joins
pub struct MemberIndex {
    by_id: HashMap<Uuid, Member>,
}

impl MemberIndex {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            by_id: members.into_iter().map(|m| (m.id, m)).collect(),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Member> {
        self.by_id.get(&id)
    }

    fn nickname(&self, id: Uuid) -> String {
        self.get(id)
            .map_or_else(|| UNKNOWN_NICKNAME.to_string(), |m| m.nickname.clone())
    }

    pub fn violation_item(&self, violation: Violation) -> ViolationFeedItem {
        ViolationFeedItem {
            nickname: self.nickname(violation.member_id),
            violation: violation.into(),
        }
    }

    /// Join date falls back to the departure date for orphaned departures.
    ///
    /// The label is derived from the join date shown in the item, not from the
    /// stored day count.
    pub fn departure_item(&self, departure: Departure) -> DepartureFeedItem {
        let join_date = self
            .get(departure.member_id)
            .map_or(departure.departed_at, |m| m.join_date);
        DepartureFeedItem {
            nickname: self.nickname(departure.member_id),
            join_date,
            tenure_label: Tenure::between(join_date, departure.departed_at).to_string(),
            departure: departure.into(),
        }
    }
}
