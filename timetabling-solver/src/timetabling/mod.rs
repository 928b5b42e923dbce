//! Compiles a [`TimetablingProblem`](crate::domain::TimetablingProblem) into a
//! [`ConstraintModel`](crate::model::ConstraintModel).
//!
//! The model has one 0-1 variable `assign[course, subject, teacher, slot]` for every tuple where
//! the teacher is eligible for the subject; tuples of ineligible teachers are left out and count
//! as constant false. On top of these variables the following constraints are posted:
//! - curriculum coverage: `sum_{teacher, slot} assign[c, s, teacher, slot] == required(level(c), s)`
//! - teacher exclusivity: `sum_{course, subject} assign[course, subject, t, l] <= 1`
//! - workload ceiling: `sum_{course, subject, slot} assign[course, subject, t, slot] <= cap(t)`
//! - teacher consistency (optional, see [`BuildOptions`]): exactly one teacher teaches each
//!   (course, subject) pair.
mod assignment_store;
mod builder;
mod lesson;

pub use assignment_store::*;
pub use builder::*;
pub use lesson::*;
