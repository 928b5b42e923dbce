use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

use pumpkin_core::termination::TerminationCondition;

use crate::enumeration::StopReason;

/// A [`TerminationCondition`] which triggers when the time budget is exceeded or when the
/// interrupt flag is raised (e.g. by a SIGINT signal handler).
///
/// The condition remembers which of the two fired, so that a stopped search can be told apart
/// from an exhausted one.
#[derive(Clone, Debug)]
pub struct RunLimit {
    /// The point in time from which to measure the budget.
    started_at: Instant,
    budget: Option<Duration>,
    interrupt: Option<Arc<AtomicBool>>,
    fired: Option<StopReason>,
}

impl RunLimit {
    /// Start measuring the time budget now.
    pub fn starting_now(budget: Option<Duration>, interrupt: Option<Arc<AtomicBool>>) -> RunLimit {
        RunLimit {
            started_at: Instant::now(),
            budget,
            interrupt,
            fired: None,
        }
    }

    /// Check the limits, returning why the run must stop if it must.
    pub fn check(&mut self) -> Option<StopReason> {
        if self.fired.is_some() {
            return self.fired;
        }

        if self
            .interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            self.fired = Some(StopReason::Interrupted);
        } else if self
            .budget
            .is_some_and(|budget| self.started_at.elapsed() >= budget)
        {
            self.fired = Some(StopReason::TimeLimit);
        }

        self.fired
    }

    /// The limit which stopped the run, if any.
    pub fn fired(&self) -> Option<StopReason> {
        self.fired
    }
}

impl TerminationCondition for RunLimit {
    fn should_stop(&mut self) -> bool {
        self.check().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_limits_the_run_never_stops() {
        let mut limit = RunLimit::starting_now(None, None);

        assert!(!limit.should_stop());
        assert_eq!(limit.fired(), None);
    }

    #[test]
    fn zero_budget_stops_immediately() {
        let mut limit = RunLimit::starting_now(Some(Duration::ZERO), None);

        assert!(limit.should_stop());
        assert_eq!(limit.fired(), Some(StopReason::TimeLimit));
    }

    #[test]
    fn raised_interrupt_flag_stops_the_run() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut limit =
            RunLimit::starting_now(Some(Duration::from_secs(3600)), Some(Arc::clone(&flag)));
        assert!(!limit.should_stop());

        flag.store(true, Ordering::Relaxed);

        assert!(limit.should_stop());
        assert_eq!(limit.fired(), Some(StopReason::Interrupted));
    }
}
