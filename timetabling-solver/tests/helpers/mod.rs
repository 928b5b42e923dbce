//! Shared fixtures for the integration tests of the timetabling solver.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use timetabling_solver::domain::TimeSlots;
use timetabling_solver::domain::TimetablingProblem;
use timetabling_solver::enumeration::EnumerationController;
use timetabling_solver::enumeration::ReportedOrdinals;
use timetabling_solver::enumeration::RunSummary;
use timetabling_solver::reporting::MemoryReporter;
use timetabling_solver::reporting::RenderedSolution;
use timetabling_solver::solve_timetable;
use timetabling_solver::timetabling::BuildOptions;
use timetabling_solver::timetabling::LessonEntry;
use wait_timeout::ChildExt;

/// One level with a single section, two subjects which each need one slot, two days and a single
/// teacher who may teach both subjects.
pub(crate) fn single_teacher_problem(max_workload: u32) -> TimetablingProblem {
    TimetablingProblem::builder()
        .subjects(["English", "Math"])
        .teacher("Ian", max_workload)
        .levels(["1-"])
        .sections(["A"])
        .time_slots(TimeSlots::days(["Monday", "Tuesday"]))
        .curriculum("1-", "English", 1)
        .curriculum("1-", "Math", 1)
        .specialty("English", ["Ian"])
        .specialty("Math", ["Ian"])
        .build()
        .expect("valid problem")
}

/// Two levels taught English and Math by a generalist and two specialists over two days.
pub(crate) fn small_school() -> TimetablingProblem {
    TimetablingProblem::builder()
        .subjects(["English", "Math"])
        .teacher("Ian", 2)
        .teacher("Elvis", 2)
        .teacher("Mario", 2)
        .levels(["1-", "2-"])
        .sections(["A"])
        .time_slots(TimeSlots::days(["Monday", "Tuesday"]))
        .curriculum("1-", "English", 1)
        .curriculum("1-", "Math", 1)
        .curriculum("2-", "English", 1)
        .curriculum("2-", "Math", 2)
        .specialty("English", ["Ian", "Elvis"])
        .specialty("Math", ["Ian", "Mario"])
        .build()
        .expect("valid problem")
}

/// Enumerate and keep every solution of `problem`.
pub(crate) fn enumerate_all(
    problem: &TimetablingProblem,
    options: BuildOptions,
) -> (RunSummary, Vec<RenderedSolution<LessonEntry>>) {
    let controller = EnumerationController::new(ReportedOrdinals::every());
    let mut reporter = MemoryReporter::new();

    let summary =
        solve_timetable(problem, options, &controller, &mut reporter).expect("run succeeds");

    assert_eq!(reporter.summary(), Some(&summary));
    (summary, reporter.into_solutions())
}

/// The solutions as a set of timetables, each timetable being its sorted lessons.
pub(crate) fn timetable_set(
    solutions: &[RenderedSolution<LessonEntry>],
) -> BTreeSet<Vec<LessonEntry>> {
    solutions
        .iter()
        .map(|solution| {
            let mut lessons = solution.entries.clone();
            lessons.sort();
            lessons
        })
        .collect()
}

/// The files written by a run of the binary.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) log_file: PathBuf,
}

impl Run {
    pub(crate) fn stdout(&self) -> String {
        std::fs::read_to_string(&self.log_file).expect("log file is readable")
    }

    pub(crate) fn cleanup(self) -> std::io::Result<()> {
        std::fs::remove_file(self.log_file)
    }
}

/// Write `contents` to a fresh instance file in the temporary directory.
pub(crate) fn write_instance(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "timetabling-solver-{}-{name}.toml",
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("Failed to write the instance file.");
    path
}

pub(crate) fn run_solver(
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = impl AsRef<OsStr>>,
) -> Run {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let instance_path = instance_path.as_ref();
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_timetabling-solver"));
    let log_file_path = instance_path.with_extension("log");

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(instance_path)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    Run {
        status,
        log_file: log_file_path,
    }
}
