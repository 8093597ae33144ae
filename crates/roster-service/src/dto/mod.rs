//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs, and their conversion into domain values
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateDepartureRequest, CreateMemberRequest, CreateViolationRequest, DepartureInput,
    UpdateMemberRequest,
};

pub use responses::{
    DeleteCountResponse, DepartureFeedItem, DepartureResponse, HealthChecks, HealthResponse,
    MemberResponse, MemberStatsResponse, MessageResponse, ReadinessResponse, ViolationFeedItem,
    ViolationResponse, UNKNOWN_NICKNAME,
};
