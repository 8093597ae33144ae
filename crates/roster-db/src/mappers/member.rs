//! Member model -> entity mapper

use roster_core::entities::{Member, MemberCounts, MemberStatus};
use roster_core::error::DomainError;

use crate::models::{MemberModel, StatusCountModel};

impl TryFrom<MemberModel> for Member {
    type Error = DomainError;

    fn try_from(model: MemberModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<MemberStatus>()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(Member {
            id: model.id,
            nickname: model.nickname,
            discord_username: model.discord_username,
            roblox_username: model.roblox_username,
            join_date: model.join_date,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Fold grouped status counts into `MemberCounts`
pub fn counts_from_rows(rows: Vec<StatusCountModel>) -> Result<MemberCounts, DomainError> {
    rows.into_iter().try_fold(MemberCounts::default(), |mut counts, row| {
        match row
            .status
            .parse::<MemberStatus>()
            .map_err(|e| DomainError::InternalError(e.to_string()))?
        {
            MemberStatus::Active => counts.active += row.count,
            MemberStatus::Inactive => counts.inactive += row.count,
        }
        Ok(counts)
    })
}
