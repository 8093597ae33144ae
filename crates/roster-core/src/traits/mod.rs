//! Domain traits (ports)

mod repositories;

pub use repositories::{DepartureRepository, MemberRepository, RepoResult, ViolationRepository};
