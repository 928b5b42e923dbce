//! The solution enumeration controller.
//!
//! An [`EnumerationController`] compiles the model of a [`SolutionDecoder`], asks the solver for
//! every solution in turn, and forwards the solutions whose ordinal is in its
//! [`ReportedOrdinals`] to a [`SolutionReporter`](crate::reporting::SolutionReporter). The run
//! ends when the solutions are exhausted or when one of the [`EnumerationLimits`] is reached; the
//! [`RunSummary`] tells these cases apart.
mod controller;
mod ordinals;
mod summary;

pub use controller::*;
pub use ordinals::*;
pub use summary::*;
