//! Database models - SQLx-compatible structs for PostgreSQL tables

mod departure;
mod member;
mod violation;

pub use departure::DepartureModel;
pub use member::{MemberModel, StatusCountModel};
pub use violation::ViolationModel;
