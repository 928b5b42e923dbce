//! The solver-independent constraint model.
//!
//! Both problem variants compile to a [`ConstraintModel`]: 0-1 decision variables and linear or
//! maximum constraints over them, each tagged with the [`ConstraintOrigin`] it was generated for.
//! Solutions come back as an [`Assignment`].
mod assignment;
mod constraint_model;

pub use assignment::*;
pub use constraint_model::*;
pub(crate) use constraint_model::to_rhs;
