//! Domain entities - core business objects

mod departure;
mod member;
mod violation;

pub use departure::{Departure, NewDeparture};
pub use member::{Member, MemberCounts, MemberPatch, MemberStatus, NewMember};
pub use violation::{NewViolation, Severity, Violation, ViolationTemplate, ViolationType};
