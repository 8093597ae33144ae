//! Departure handlers
//!
//! Endpoints for the departure log.

use axum::{extract::State, Json};
use roster_service::{CreateDepartureRequest, DepartureFeedItem, DepartureResponse, DepartureService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List departures, most recent first
///
/// GET /departures
pub async fn list_departures(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartureResponse>>> {
    let service = DepartureService::new(state.service_context());
    let departures = service.list_departures().await?;
    Ok(Json(departures))
}

/// Departures with member details and display tenure
///
/// GET /departures/feed
pub async fn departure_feed(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartureFeedItem>>> {
    let service = DepartureService::new(state.service_context());
    let feed = service.departure_feed().await?;
    Ok(Json(feed))
}

/// Record a departure
///
/// POST /departures
pub async fn create_departure(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDepartureRequest>,
) -> ApiResult<Created<Json<DepartureResponse>>> {
    let service = DepartureService::new(state.service_context());
    let departure = service.create_departure(request).await?;
    Ok(Created(Json(departure)))
}
