//! The shift-rostering variant: nurses are assigned to the shifts of every day of a horizon.
//!
//! It is compiled to the same [`ConstraintModel`](crate::model::ConstraintModel) as the
//! timetabling problem and enumerated by the same controller.
mod builder;
mod problem;

pub use builder::*;
pub use problem::*;
