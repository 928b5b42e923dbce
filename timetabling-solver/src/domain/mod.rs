//! The problem data of a school-timetabling instance.
//!
//! A [`TimetablingProblem`] is constructed once through its builder and is immutable afterwards.
//! It only exposes names, lookups, and the checks in [`TimetablingProblem::validate`]; turning it
//! into a constraint model is the job of [`crate::timetabling`].
//!
//! The typed indices and the [`ConfigurationError`] are shared with the shift-rostering variant in
//! [`crate::rostering`].
mod error;
mod ids;
mod problem;
mod time_slots;

pub use error::*;
pub use ids::*;
pub use problem::*;
pub(crate) use problem::index_names;
pub use time_slots::*;
