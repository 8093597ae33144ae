//! Violation service
//!
//! Rule violations recorded against members. Violations are dated on the day
//! they are recorded and are never edited, only deleted.

use tracing::{info, instrument};
use uuid::Uuid;

use roster_core::entities::ViolationTemplate;
use roster_core::error::DomainError;
use roster_core::value_objects::today;

use crate::dto::mappers::MemberIndex;
use crate::dto::{CreateViolationRequest, DeleteCountResponse, ViolationFeedItem, ViolationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Violation service
pub struct ViolationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ViolationService<'a> {
    /// Create a new ViolationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All violations, most recent first
    #[instrument(skip(self))]
    pub async fn list_violations(&self) -> ServiceResult<Vec<ViolationResponse>> {
        let violations = self.ctx.violation_repo().list().await?;
        Ok(violations.into_iter().map(ViolationResponse::from).collect())
    }

    /// Violations with the offending member's nickname
    #[instrument(skip(self))]
    pub async fn violation_feed(&self) -> ServiceResult<Vec<ViolationFeedItem>> {
        let (violations, members) = tokio::try_join!(
            self.ctx.violation_repo().list(),
            self.ctx.member_repo().list()
        )?;

        let index = MemberIndex::new(members);
        Ok(violations
            .into_iter()
            .map(|v| index.violation_item(v))
            .collect())
    }

    /// Template names in display order
    pub fn templates() -> Vec<&'static str> {
        ViolationTemplate::ALL.iter().map(ViolationTemplate::name).collect()
    }

    /// Record a violation dated today. The member is not looked up.
    #[instrument(skip(self, request))]
    pub async fn create_violation(
        &self,
        request: CreateViolationRequest,
    ) -> ServiceResult<ViolationResponse> {
        let new_violation = request.into_new_violation(today())?;
        let violation = self.ctx.violation_repo().create(&new_violation).await?;

        info!(
            violation_id = %violation.id,
            member_id = %violation.member_id,
            severity = %violation.severity,
            "Violation recorded"
        );

        Ok(ViolationResponse::from(violation))
    }

    /// Delete a violation; not found when no row was removed
    #[instrument(skip(self))]
    pub async fn delete_violation(&self, violation_id: Uuid) -> ServiceResult<DeleteCountResponse> {
        let count = self.ctx.violation_repo().delete(violation_id).await?;
        if count == 0 {
            return Err(DomainError::ViolationNotFound.into());
        }

        info!(violation_id = %violation_id, "Violation deleted");

        Ok(DeleteCountResponse {
            message: "Violation deleted successfully".to_string(),
            count,
        })
    }
}
