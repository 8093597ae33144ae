//! # roster-core
//!
//! Domain layer containing member, violation and departure entities, the tenure
//! value object, and the repository traits the storage layer implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Departure, Member, MemberCounts, MemberPatch, MemberStatus, NewDeparture, NewMember,
    NewViolation, Severity, Violation, ViolationTemplate, ViolationType,
};
pub use error::DomainError;
pub use traits::{DepartureRepository, MemberRepository, RepoResult, ViolationRepository};
pub use value_objects::{today, ParseEnumError, Tenure};
