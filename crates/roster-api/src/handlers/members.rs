//! Member handlers
//!
//! Endpoints for the member registry.

use axum::{extract::State, Json};
use roster_service::{
    CreateMemberRequest, MemberResponse, MemberService, MemberStatsResponse, MessageResponse,
    UpdateMemberRequest,
};

use crate::extractors::{IdPath, MemberIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List members, newest join date first
///
/// GET /members
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let members = service.list_members().await?;
    Ok(Json(members))
}

/// Create a member
///
/// POST /members
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Created<Json<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let member = service.create_member(request).await?;
    Ok(Created(Json(member)))
}

/// Member counts by status
///
/// GET /members/stats
pub async fn member_stats(State(state): State<AppState>) -> ApiResult<Json<MemberStatsResponse>> {
    let service = MemberService::new(state.service_context());
    let stats = service.member_stats().await?;
    Ok(Json(stats))
}

/// Partially update a member
///
/// PUT /members/{member_id}
pub async fn update_member(
    State(state): State<AppState>,
    IdPath(path): IdPath<MemberIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let member_id = path.member_id()?;

    let service = MemberService::new(state.service_context());
    let member = service.update_member(member_id, request).await?;
    Ok(Json(member))
}

/// Delete a member
///
/// DELETE /members/{member_id}
pub async fn delete_member(
    State(state): State<AppState>,
    IdPath(path): IdPath<MemberIdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let member_id = path.member_id()?;

    let service = MemberService::new(state.service_context());
    let response = service.delete_member(member_id).await?;
    Ok(Json(response))
}
