//! One slice per resource domain.

pub mod collection;
pub mod dashboard;
pub mod job_roles;
pub mod positions;
pub mod question_sets;
