//! Member service
//!
//! Registry of community members: listing, creation with defaults, partial
//! updates, deletion and status counts.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use roster_core::error::DomainError;
use roster_core::value_objects::today;

use crate::dto::{
    CreateMemberRequest, MemberResponse, MemberStatsResponse, MessageResponse, UpdateMemberRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All members, newest join date first
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().list().await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }

    /// Create a member; `join_date` defaults to today and `status` to active
    #[instrument(skip(self, request))]
    pub async fn create_member(&self, request: CreateMemberRequest) -> ServiceResult<MemberResponse> {
        let new_member = request.into_new_member(today())?;
        let member = self.ctx.member_repo().create(&new_member).await?;

        info!(member_id = %member.id, nickname = %member.nickname, "Member created");

        Ok(MemberResponse::from(member))
    }

    /// Apply a partial update; `updated_at` is refreshed even when nothing else changes
    #[instrument(skip(self, request))]
    pub async fn update_member(
        &self,
        member_id: Uuid,
        request: UpdateMemberRequest,
    ) -> ServiceResult<MemberResponse> {
        let patch = request.into_patch()?;
        let member = self
            .ctx
            .member_repo()
            .update(member_id, &patch, Utc::now())
            .await?
            .ok_or(DomainError::MemberNotFound)?;

        info!(member_id = %member_id, status = %member.status, "Member updated");

        Ok(MemberResponse::from(member))
    }

    /// Delete a member. Succeeds whether or not the member existed.
    #[instrument(skip(self))]
    pub async fn delete_member(&self, member_id: Uuid) -> ServiceResult<MessageResponse> {
        let removed = self.ctx.member_repo().delete(member_id).await?;

        info!(member_id = %member_id, removed, "Member delete processed");

        Ok(MessageResponse::new("Member deleted successfully"))
    }

    /// Active/inactive counts
    #[instrument(skip(self))]
    pub async fn member_stats(&self) -> ServiceResult<MemberStatsResponse> {
        let counts = self.ctx.member_repo().count_by_status().await?;
        Ok(MemberStatsResponse::from(counts))
    }

    /// Whether the store answers
    pub async fn store_ready(&self) -> bool {
        self.ctx.member_repo().ping().await.is_ok()
    }
}
