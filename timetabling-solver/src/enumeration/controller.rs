use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::info;
use log::warn;
use thiserror::Error;

use super::EnumerationStatus;
use super::ReportedOrdinals;
use super::RunSummary;
use super::SearchStatistics;
use super::StopReason;
use crate::engine::CompiledModel;
use crate::engine::RunLimit;
use crate::engine::SearchOutcome;
use crate::model::Assignment;
use crate::model::ConstraintModel;
use crate::reporting::RenderedSolution;
use crate::reporting::SolutionReporter;

/// Turns the values of a solution into reportable entries.
pub trait SolutionDecoder {
    type Entry;

    /// The model whose solutions are decoded.
    fn constraint_model(&self) -> &ConstraintModel;

    fn decode(&self, assignment: &Assignment) -> Vec<Self::Entry>;
}

#[derive(Debug, Error)]
pub enum EnumerationError {
    #[error("failed to report a solution: {0}")]
    Reporting(#[from] std::io::Error),
}

/// Limits imposed on an enumeration run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerationLimits {
    /// Stop once this many solutions have been found.
    pub max_solutions: Option<u64>,
    pub time_limit: Option<Duration>,
}

/// Drives the solver through all solutions of a model and reports a selection of them.
#[derive(Clone, Debug, Default)]
pub struct EnumerationController {
    ordinals: ReportedOrdinals,
    limits: EnumerationLimits,
    interrupt: Option<Arc<AtomicBool>>,
}

/// Why the solution callback ended the search.
enum Halt {
    SolutionLimit,
    Failed(std::io::Error),
}

impl EnumerationController {
    pub fn new(ordinals: ReportedOrdinals) -> EnumerationController {
        EnumerationController {
            ordinals,
            ..Default::default()
        }
    }

    pub fn with_limits(mut self, limits: EnumerationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Stop the run once `flag` is raised.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn ordinals(&self) -> &ReportedOrdinals {
        &self.ordinals
    }

    pub fn limits(&self) -> EnumerationLimits {
        self.limits
    }

    /// Enumerate the solutions of `decoder`'s model.
    ///
    /// Solutions are numbered from 1 in the order the solver finds them. Those whose ordinal is
    /// in the reported set are decoded and passed to `reporter`; at the end the run summary is
    /// passed to `reporter` as well. A failure of the reporter aborts the run.
    ///
    /// The time limit covers posting the model to the solver as well as the search. When
    /// statistic logging is configured, the summary and the search statistics of the solver are
    /// logged as one block at the end of the run.
    pub fn run<Decoder: SolutionDecoder>(
        &self,
        decoder: &Decoder,
        reporter: &mut impl SolutionReporter<Decoder::Entry>,
    ) -> Result<RunSummary, EnumerationError> {
        let started_at = Instant::now();
        let mut limit = RunLimit::starting_now(self.limits.time_limit, self.interrupt.clone());
        let model = decoder.constraint_model();
        let mut compiled = CompiledModel::compile(model);

        let mut solutions_found = 0;
        let mut solutions_reported = 0;

        let status = if let Some(origin) = compiled.root_conflict() {
            warn!("The model is infeasible, the {origin} cannot be satisfied");
            EnumerationStatus::Infeasible
        } else if self.limits.max_solutions == Some(0) {
            EnumerationStatus::Stopped(StopReason::SolutionLimit)
        } else if let Some(reason) = limit.check() {
            debug!("The run was stopped before the search started");
            EnumerationStatus::Stopped(reason)
        } else {
            let outcome = compiled.enumerate(&mut limit, |assignment| {
                solutions_found += 1;

                if self.ordinals.contains(solutions_found) {
                    debug!("Reporting solution #{solutions_found}");
                    let solution = RenderedSolution {
                        ordinal: solutions_found,
                        entries: decoder.decode(assignment),
                    };

                    if let Err(error) = reporter.report_solution(&solution) {
                        return ControlFlow::Break(Halt::Failed(error));
                    }
                    solutions_reported += 1;
                }

                if self
                    .limits
                    .max_solutions
                    .is_some_and(|max_solutions| solutions_found >= max_solutions)
                {
                    return ControlFlow::Break(Halt::SolutionLimit);
                }

                ControlFlow::Continue(())
            });

            match outcome {
                SearchOutcome::Exhausted if solutions_found == 0 => EnumerationStatus::Infeasible,
                SearchOutcome::Exhausted => EnumerationStatus::Exhausted,
                SearchOutcome::Terminated => terminated_status(limit.fired()),
                SearchOutcome::Broken(Halt::SolutionLimit) => {
                    EnumerationStatus::Stopped(StopReason::SolutionLimit)
                }
                SearchOutcome::Broken(Halt::Failed(error)) => return Err(error.into()),
            }
        };

        let summary = RunSummary {
            status,
            solutions_found,
            solutions_reported,
            statistics: SearchStatistics {
                num_variables: model.num_variables(),
                num_constraints: model.num_constraints(),
                solver_calls: compiled.solver_calls(),
                wall_time: started_at.elapsed(),
            },
            root_conflict: compiled.root_conflict().cloned(),
        };

        if status.is_stopped() {
            warn!("Enumeration {status} after {solutions_found} solutions");
        } else {
            info!("Enumeration {status} with {solutions_found} solutions");
        }

        summary.log_statistics();
        compiled.log_statistics();

        reporter.report_summary(&summary)?;
        reporter.finish()?;

        Ok(summary)
    }
}

/// The status of a search which the solver ended without finding all solutions.
fn terminated_status(fired: Option<StopReason>) -> EnumerationStatus {
    match fired {
        Some(reason) => EnumerationStatus::Stopped(reason),
        None => {
            warn!("The solver stopped the search without reaching a limit");
            EnumerationStatus::Stopped(StopReason::Solver)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fired_limit_is_the_reason_for_stopping() {
        assert_eq!(
            terminated_status(Some(StopReason::TimeLimit)),
            EnumerationStatus::Stopped(StopReason::TimeLimit)
        );
        assert_eq!(
            terminated_status(Some(StopReason::Interrupted)),
            EnumerationStatus::Stopped(StopReason::Interrupted)
        );
    }

    #[test]
    fn a_stop_without_a_fired_limit_is_not_reported_as_an_interrupt() {
        assert_eq!(
            terminated_status(None),
            EnumerationStatus::Stopped(StopReason::Solver)
        );
    }
}
