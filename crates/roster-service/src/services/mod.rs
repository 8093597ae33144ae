//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and turns validated
//! requests into repository calls.

pub mod context;
pub mod departure;
pub mod error;
pub mod member;
pub mod violation;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use departure::DepartureService;
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use violation::ViolationService;
