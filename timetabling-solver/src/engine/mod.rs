//! The adapter to the Pumpkin solver.
//!
//! This is the only module which uses `pumpkin_core`. A [`ConstraintModel`] is loaded into a
//! solver with [`CompiledModel::compile`] and its solutions are enumerated with
//! [`CompiledModel::enumerate`], which hands out every solution as an owned
//! [`Assignment`](crate::model::Assignment).
//!
//! [`ConstraintModel`]: crate::model::ConstraintModel
mod compiled_model;
mod run_limit;

pub use compiled_model::*;
pub use run_limit::*;
