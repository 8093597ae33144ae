//! Route definitions
//!
//! Resource routes are served at the root and again under `/api`.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{departures, health, members, violations};
use crate::state::AppState;

/// Create the main API router with all resource routes (health is separate)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(resource_routes())
        .nest("/api", resource_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn resource_routes() -> Router<AppState> {
    Router::new()
        .merge(member_routes())
        .merge(violation_routes())
        .merge(departure_routes())
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members).post(members::create_member))
        .route("/members/stats", get(members::member_stats))
        .route(
            "/members/:member_id",
            put(members::update_member).delete(members::delete_member),
        )
}

/// Violation routes
fn violation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/violations",
            get(violations::list_violations).post(violations::create_violation),
        )
        .route("/violations/feed", get(violations::violation_feed))
        .route("/violations/templates", get(violations::violation_templates))
        .route(
            "/violations/:violation_id",
            axum::routing::delete(violations::delete_violation),
        )
}

/// Departure routes
fn departure_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/departures",
            get(departures::list_departures).post(departures::create_departure),
        )
        .route("/departures/feed", get(departures::departure_feed))
}
