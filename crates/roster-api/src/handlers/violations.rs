//! Violation handlers
//!
//! Endpoints for the violation log.

use axum::{extract::State, Json};
use roster_service::{
    CreateViolationRequest, DeleteCountResponse, ViolationFeedItem, ViolationResponse,
    ViolationService,
};

use crate::extractors::{IdPath, ValidatedJson, ViolationIdPath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List violations, most recent first
///
/// GET /violations
pub async fn list_violations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ViolationResponse>>> {
    let service = ViolationService::new(state.service_context());
    let violations = service.list_violations().await?;
    Ok(Json(violations))
}

/// Violations joined with member nicknames
///
/// GET /violations/feed
pub async fn violation_feed(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ViolationFeedItem>>> {
    let service = ViolationService::new(state.service_context());
    let feed = service.violation_feed().await?;
    Ok(Json(feed))
}

/// Template violation names
///
/// GET /violations/templates
pub async fn violation_templates() -> Json<Vec<&'static str>> {
    Json(ViolationService::templates())
}

/// Record a violation
///
/// POST /violations
pub async fn create_violation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateViolationRequest>,
) -> ApiResult<Created<Json<ViolationResponse>>> {
    let service = ViolationService::new(state.service_context());
    let violation = service.create_violation(request).await?;
    Ok(Created(Json(violation)))
}

/// Delete a violation
///
/// DELETE /violations/{violation_id}
pub async fn delete_violation(
    State(state): State<AppState>,
    IdPath(path): IdPath<ViolationIdPath>,
) -> ApiResult<Json<DeleteCountResponse>> {
    let violation_id = path.violation_id()?;

    let service = ViolationService::new(state.service_context());
    let response = service.delete_violation(violation_id).await?;
    Ok(Json(response))
}
