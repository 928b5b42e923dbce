#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use timetabling_solver::enumeration::EnumerationController;
use timetabling_solver::enumeration::EnumerationStatus;
use timetabling_solver::enumeration::ReportedOrdinals;
use timetabling_solver::reporting::MemoryReporter;
use timetabling_solver::rostering::ShiftEntry;
use timetabling_solver::rostering::ShiftRosteringProblem;
use timetabling_solver::solve_roster;

fn ward(min_off_days: u32) -> ShiftRosteringProblem {
    ShiftRosteringProblem::builder()
        .nurses(["Ann", "Bea", "Cas"])
        .days(["Monday", "Tuesday"])
        .shifts(["Off", "Early"])
        .off_days(min_off_days, None)
        .max_nurses_per_shift(1)
        .build()
        .expect("valid problem")
}

#[test]
fn every_roster_covers_each_shift_once() {
    let problem = ward(0);
    let controller = EnumerationController::new(ReportedOrdinals::every());
    let mut reporter = MemoryReporter::<ShiftEntry>::new();

    let summary = solve_roster(&problem, &controller, &mut reporter).expect("run succeeds");

    // One nurse takes the early shift on both days, and either of the others is off each day.
    assert_eq!(summary.status, EnumerationStatus::Exhausted);
    assert_eq!(summary.solutions_found, 12);

    let mut rosters = BTreeSet::new();
    for solution in reporter.solutions() {
        let mut per_shift = BTreeMap::new();
        let mut per_nurse_day = BTreeSet::new();
        let mut early_nurses = BTreeSet::new();

        for entry in &solution.entries {
            *per_shift
                .entry((entry.day.as_str(), entry.shift.as_str()))
                .or_insert(0) += 1;
            assert!(per_nurse_day.insert((entry.nurse.as_str(), entry.day.as_str())));
            if entry.shift == "Early" {
                let _ = early_nurses.insert(entry.nurse.as_str());
            }
        }

        assert_eq!(per_shift.len(), 4);
        assert!(per_shift.values().all(|&count| count == 1));
        assert_eq!(early_nurses.len(), 1);

        let _ = rosters.insert(solution.entries.clone());
    }
    assert_eq!(rosters.len(), 12);
}

#[test]
fn roster_rows_are_ordered_by_day_then_nurse() {
    let problem = ward(0);
    let controller = EnumerationController::new(ReportedOrdinals::only([1]));
    let mut reporter = MemoryReporter::<ShiftEntry>::new();

    let _ = solve_roster(&problem, &controller, &mut reporter).expect("run succeeds");

    let entries = &reporter.solutions()[0].entries;
    assert_eq!(entries.len(), 4);
    assert!(entries[..2].iter().all(|entry| entry.day == "Monday"));
    assert!(entries[2..].iter().all(|entry| entry.day == "Tuesday"));
    assert!(entries[0].nurse < entries[1].nurse);
    assert!(entries[2].nurse < entries[3].nurse);
}

#[test]
fn more_required_days_off_than_available_is_infeasible() {
    // Only one nurse is off per day, so two days cannot give three nurses a day off.
    let problem = ward(1);
    let controller = EnumerationController::new(ReportedOrdinals::every());
    let mut reporter = MemoryReporter::<ShiftEntry>::new();

    let summary = solve_roster(&problem, &controller, &mut reporter).expect("run succeeds");

    assert_eq!(summary.status, EnumerationStatus::Infeasible);
    assert!(reporter.solutions().is_empty());
}
