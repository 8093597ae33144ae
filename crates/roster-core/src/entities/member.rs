//! Member entity - a registered community member

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::value_objects::ParseEnumError;

/// Membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

impl MemberStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseEnumError::new("status", other)),
        }
    }
}

/// Member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Uuid,
    pub nickname: String,
    pub discord_username: String,
    pub roblox_username: String,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Apply a partial update and stamp `updated_at`
    pub fn apply(&mut self, patch: &MemberPatch, now: DateTime<Utc>) {
        if let Some(nickname) = &patch.nickname {
            self.nickname.clone_from(nickname);
        }
        if let Some(discord_username) = &patch.discord_username {
            self.discord_username.clone_from(discord_username);
        }
        if let Some(roblox_username) = &patch.roblox_username {
            self.roblox_username.clone_from(roblox_username);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = now;
    }
}

/// Values for inserting a member; the store assigns `id` and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub nickname: String,
    pub discord_username: String,
    pub roblox_username: String,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
}

/// Partial member update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub nickname: Option<String>,
    pub discord_username: Option<String>,
    pub roblox_username: Option<String>,
    pub status: Option<MemberStatus>,
}

impl MemberPatch {
    /// True when no field would change (only `updated_at` is refreshed)
    pub fn is_empty(&self) -> bool {
        self.nickname.is_none()
            && self.discord_username.is_none()
            && self.roblox_username.is_none()
            && self.status.is_none()
    }
}

/// Member counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberCounts {
    pub active: i64,
    pub inactive: i64,
}

impl MemberCounts {
    /// Tally a slice of members
    pub fn tally(members: &[Member]) -> Self {
        members.iter().fold(Self::default(), |mut counts, member| {
            match member.status {
                MemberStatus::Active => counts.active += 1,
                MemberStatus::Inactive => counts.inactive += 1,
            }
            counts
        })
    }

    #[inline]
    pub fn total(&self) -> i64 {
        self.active + self.inactive
    }

    /// Active share rounded to a whole percent, 0 with no members
    pub fn active_percent(&self) -> i64 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.active as f64 / total as f64 * 100.0).round() as i64
    }
}
