//! # roster-service
//!
//! Application layer: request DTOs and their validation rules, response DTOs,
//! and the member, violation and departure services built over a
//! [`ServiceContext`].

pub mod dto;
pub mod services;

pub use dto::{
    CreateDepartureRequest, CreateMemberRequest, CreateViolationRequest, DeleteCountResponse,
    DepartureFeedItem, DepartureResponse, HealthResponse, MemberResponse, MemberStatsResponse,
    MessageResponse, ReadinessResponse, UpdateMemberRequest, ViolationFeedItem, ViolationResponse,
};
pub use services::{
    DepartureService, MemberService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, ViolationService,
};
