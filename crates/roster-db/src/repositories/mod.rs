//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in roster-core.

mod departure;
mod error;
mod member;
mod violation;

pub use departure::PgDepartureRepository;
pub use member::PgMemberRepository;
pub use violation::PgViolationRepository;
