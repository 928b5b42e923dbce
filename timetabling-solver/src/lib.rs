//! # Timetabling solver
//! Compiles school-timetabling problems into constraint models and enumerates their feasible
//! timetables with the Pumpkin constraint programming solver.
//!
//! A timetabling problem consists of subjects, teachers with a maximum workload, courses (levels
//! times sections), time slots (working days, optionally times periods), a curriculum stating how
//! many slots each level must receive of each subject, and the specialties stating which teachers
//! may teach which subject. A feasible timetable assigns teachers to (course, subject, slot)
//! combinations such that
//! - every course receives exactly the required number of slots of every subject,
//! - no teacher is in two places in the same slot,
//! - no teacher exceeds their workload,
//! - and, optionally, every (course, subject) pair is taught by a single teacher.
//!
//! The crate also contains a shift-rostering variant ([`rostering`]) which is compiled to the
//! same kind of model and enumerated by the same controller.
//!
//! # Example
//! ```no_run
//! # use timetabling_solver::domain::TimeSlots;
//! # use timetabling_solver::domain::TimetablingProblem;
//! # use timetabling_solver::enumeration::EnumerationController;
//! # use timetabling_solver::enumeration::EnumerationStatus;
//! # use timetabling_solver::enumeration::ReportedOrdinals;
//! # use timetabling_solver::reporting::MemoryReporter;
//! # use timetabling_solver::timetabling::BuildOptions;
//! # use timetabling_solver::solve_timetable;
//! let problem = TimetablingProblem::builder()
//!     .subjects(["English", "Math"])
//!     .teacher("Ian", 2)
//!     .levels(["1-"])
//!     .sections(["A"])
//!     .time_slots(TimeSlots::days(["Monday", "Tuesday"]))
//!     .curriculum("1-", "English", 1)
//!     .curriculum("1-", "Math", 1)
//!     .specialty("English", ["Ian"])
//!     .specialty("Math", ["Ian"])
//!     .build()?;
//!
//! let controller = EnumerationController::new(ReportedOrdinals::every());
//! let mut reporter = MemoryReporter::new();
//! let summary = solve_timetable(&problem, BuildOptions::default(), &controller, &mut reporter)?;
//!
//! assert_eq!(summary.status, EnumerationStatus::Exhausted);
//! assert_eq!(summary.solutions_found, 2);
//! # Ok::<(), timetabling_solver::TimetablingError>(())
//! ```
pub mod containers;
pub mod domain;
pub mod engine;
pub mod enumeration;
pub mod instance;
pub mod model;
pub mod reporting;
pub mod rostering;
pub mod timetabling;

use thiserror::Error;
pub use timetabling_format;
use timetabling_format::FormatError;

use crate::domain::ConfigurationError;
use crate::domain::TimetablingProblem;
use crate::enumeration::EnumerationController;
use crate::enumeration::EnumerationError;
use crate::enumeration::RunSummary;
use crate::reporting::SolutionReporter;
use crate::rostering::RosterModel;
use crate::rostering::ShiftEntry;
use crate::rostering::ShiftRosteringProblem;
use crate::timetabling::BuildOptions;
use crate::timetabling::LessonEntry;
use crate::timetabling::TimetableModel;

#[derive(Debug, Error)]
pub enum TimetablingError {
    #[error("the problem is misconfigured: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
    #[error("failed to read the instance: {0}")]
    Format(#[from] FormatError),
}

/// Build the model of `problem` and enumerate its timetables.
pub fn solve_timetable(
    problem: &TimetablingProblem,
    options: BuildOptions,
    controller: &EnumerationController,
    reporter: &mut impl SolutionReporter<LessonEntry>,
) -> Result<RunSummary, TimetablingError> {
    let timetable = TimetableModel::build(problem, options)?;
    Ok(controller.run(&timetable, reporter)?)
}

/// Build the model of `problem` and enumerate its rosters.
pub fn solve_roster(
    problem: &ShiftRosteringProblem,
    controller: &EnumerationController,
    reporter: &mut impl SolutionReporter<ShiftEntry>,
) -> Result<RunSummary, TimetablingError> {
    let roster = RosterModel::build(problem);
    Ok(controller.run(&roster, reporter)?)
}
