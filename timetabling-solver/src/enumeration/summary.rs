use std::fmt::Display;
use std::fmt::Formatter;
use std::time::Duration;

use pumpkin_core::statistics::log_statistic;

use crate::model::ConstraintOrigin;

/// Why an enumeration run stopped before all solutions were found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopReason {
    SolutionLimit,
    TimeLimit,
    Interrupted,
    /// The solver gave up without any of the limits being reached.
    Solver,
}

/// The outcome of an enumeration run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumerationStatus {
    /// Every solution has been found, and there is at least one.
    Exhausted,
    /// The search space has been exhausted without finding a solution.
    Infeasible,
    /// A limit stopped the run; more solutions may exist. A run stopped before its first solution
    /// is stopped, not infeasible.
    Stopped(StopReason),
}

impl EnumerationStatus {
    pub fn is_stopped(&self) -> bool {
        matches!(self, EnumerationStatus::Stopped(_))
    }
}

impl Display for EnumerationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EnumerationStatus::Exhausted => write!(f, "exhausted"),
            EnumerationStatus::Infeasible => write!(f, "infeasible"),
            EnumerationStatus::Stopped(StopReason::SolutionLimit) => {
                write!(f, "stopped (solution limit)")
            }
            EnumerationStatus::Stopped(StopReason::TimeLimit) => write!(f, "stopped (time limit)"),
            EnumerationStatus::Stopped(StopReason::Interrupted) => {
                write!(f, "stopped (interrupted)")
            }
            EnumerationStatus::Stopped(StopReason::Solver) => write!(f, "stopped (by the solver)"),
        }
    }
}

/// Effort and size metrics of a run.
///
/// The search statistics of the solver itself (nodes, failures, propagations, ...) are not copied
/// here; they are written through the statistic logger at the end of the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub num_variables: usize,
    pub num_constraints: usize,
    /// The number of times the solver was asked for a next solution.
    pub solver_calls: u64,
    pub wall_time: Duration,
}

/// The terminal summary of an enumeration run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub status: EnumerationStatus,
    pub solutions_found: u64,
    pub solutions_reported: u64,
    pub statistics: SearchStatistics,
    /// The constraint which could not be satisfied when the model was posted, if the model is
    /// infeasible before any search.
    pub root_conflict: Option<ConstraintOrigin>,
}

impl RunSummary {
    /// Write the summary through the statistic logger of `pumpkin-core`, if it is configured.
    ///
    /// The block is left open so that the statistics of the solver can follow it.
    pub fn log_statistics(&self) {
        log_statistic("status", self.status);
        log_statistic("solutions_found", self.solutions_found);
        log_statistic("solutions_reported", self.solutions_reported);
        log_statistic("num_variables", self.statistics.num_variables);
        log_statistic("num_constraints", self.statistics.num_constraints);
        log_statistic("solver_calls", self.statistics.solver_calls);
        log_statistic("wall_time_ms", self.statistics.wall_time.as_millis());
        if let Some(origin) = &self.root_conflict {
            log_statistic("root_conflict", origin);
        }
    }
}
