use std::fmt::Display;
use std::fmt::Formatter;

use log::debug;

use super::ShiftRosteringProblem;
use crate::containers::StorageKey;
use crate::domain::DayId;
use crate::domain::NurseId;
use crate::domain::ShiftId;
use crate::enumeration::SolutionDecoder;
use crate::model::Assignment;
use crate::model::Comparison;
use crate::model::ConstraintClass;
use crate::model::ConstraintModel;
use crate::model::ConstraintOrigin;
use crate::model::VariableId;
use crate::model::to_rhs;
use crate::reporting::Record;

/// The constraint model of a [`ShiftRosteringProblem`].
///
/// `works[nurse, day, shift]` is one when the nurse works the shift on that day. With a staffing
/// limit, `works_shift[nurse, shift] = max_day works[nurse, day, shift]` tracks whether a nurse
/// works a shift at all during the horizon.
#[derive(Clone, Debug)]
pub struct RosterModel<'problem> {
    problem: &'problem ShiftRosteringProblem,
    model: ConstraintModel,
    /// Indexed by `(nurse * num_days + day) * num_shifts + shift`.
    works: Vec<VariableId>,
}

impl<'problem> RosterModel<'problem> {
    pub fn build(problem: &'problem ShiftRosteringProblem) -> RosterModel<'problem> {
        let mut model = ConstraintModel::new();

        let mut works = Vec::with_capacity(
            problem.num_nurses() * problem.num_days() * problem.num_shifts(),
        );
        for nurse in problem.nurses() {
            for day in problem.days() {
                for shift in problem.shifts() {
                    works.push(model.new_boolean(format!(
                        "works[{}, {}, {}]",
                        problem.nurse_name(nurse),
                        problem.day_name(day),
                        problem.shift_name(shift)
                    )));
                }
            }
        }

        let mut roster = RosterModel {
            problem,
            model,
            works,
        };

        roster.add_shift_coverage();
        roster.add_one_shift_per_day();
        roster.add_off_day_bounds();
        roster.add_shift_staffing();

        roster.model.log_summary();
        roster
    }

    pub fn problem(&self) -> &'problem ShiftRosteringProblem {
        self.problem
    }

    pub fn model(&self) -> &ConstraintModel {
        &self.model
    }

    pub fn works(&self, nurse: NurseId, day: DayId, shift: ShiftId) -> VariableId {
        let index = (nurse.index() * self.problem.num_days() + day.index())
            * self.problem.num_shifts()
            + shift.index();
        self.works[index]
    }

    /// Every (day, shift) is staffed by exactly one nurse.
    fn add_shift_coverage(&mut self) {
        let problem = self.problem;

        for day in problem.days() {
            for shift in problem.shifts() {
                let terms = problem
                    .nurses()
                    .map(|nurse| self.works(nurse, day, shift))
                    .collect();
                let origin = ConstraintOrigin {
                    class: ConstraintClass::ShiftCoverage,
                    entity: format!(
                        "day {}, shift {}",
                        problem.day_name(day),
                        problem.shift_name(shift)
                    ),
                };

                self.model.add_linear(terms, Comparison::Equal, 1, origin);
            }
        }
    }

    /// A nurse is assigned at most one shift per day.
    fn add_one_shift_per_day(&mut self) {
        let problem = self.problem;

        for nurse in problem.nurses() {
            for day in problem.days() {
                let terms = problem
                    .shifts()
                    .map(|shift| self.works(nurse, day, shift))
                    .collect();
                let origin = ConstraintOrigin {
                    class: ConstraintClass::OneShiftPerDay,
                    entity: format!(
                        "nurse {}, day {}",
                        problem.nurse_name(nurse),
                        problem.day_name(day)
                    ),
                };

                self.model
                    .add_linear(terms, Comparison::LessThanOrEqual, 1, origin);
            }
        }
    }

    /// The number of days a nurse has the off shift lies within the configured bounds.
    fn add_off_day_bounds(&mut self) {
        let problem = self.problem;
        let min = problem.min_off_days();
        let max = problem
            .max_off_days()
            .filter(|&max| (max as usize) < problem.num_days());

        if min == 0 && max.is_none() {
            return;
        }

        for nurse in problem.nurses() {
            let off_days = problem
                .days()
                .map(|day| self.works(nurse, day, problem.off_shift()))
                .collect::<Vec<_>>();
            let origin = ConstraintOrigin {
                class: ConstraintClass::OffDayBounds,
                entity: format!("nurse {}", problem.nurse_name(nurse)),
            };

            if min > 0 {
                self.model.add_linear(
                    off_days.clone(),
                    Comparison::GreaterThanOrEqual,
                    to_rhs(min),
                    origin.clone(),
                );
            }
            if let Some(max) = max {
                self.model
                    .add_linear(off_days, Comparison::LessThanOrEqual, to_rhs(max), origin);
            }
        }
    }

    /// At most `max_nurses_per_shift` distinct nurses work each working shift over the horizon.
    fn add_shift_staffing(&mut self) {
        let problem = self.problem;
        let Some(max_nurses) = problem.max_nurses_per_shift() else {
            return;
        };

        for shift in problem.working_shifts() {
            let mut works_shift = Vec::with_capacity(problem.num_nurses());

            for nurse in problem.nurses() {
                let days = problem
                    .days()
                    .map(|day| self.works(nurse, day, shift))
                    .collect::<Vec<_>>();
                let works_at_all = self.model.new_boolean(format!(
                    "works_shift[{}, {}]",
                    problem.nurse_name(nurse),
                    problem.shift_name(shift)
                ));
                let origin = ConstraintOrigin {
                    class: ConstraintClass::ShiftStaffing,
                    entity: format!(
                        "nurse {}, shift {}",
                        problem.nurse_name(nurse),
                        problem.shift_name(shift)
                    ),
                };

                self.model.add_maximum(days, works_at_all, origin);
                works_shift.push(works_at_all);
            }

            let origin = ConstraintOrigin {
                class: ConstraintClass::ShiftStaffing,
                entity: format!("shift {}", problem.shift_name(shift)),
            };
            self.model.add_linear(
                works_shift,
                Comparison::LessThanOrEqual,
                to_rhs(max_nurses),
                origin,
            );
        }

        debug!("Limited every working shift to {max_nurses} distinct nurses");
    }
}

/// One row of a roster: `nurse` works `shift` on `day`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShiftEntry {
    pub day: String,
    pub nurse: String,
    pub shift: String,
}

impl Display for ShiftEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Day {} | Nurse {} | Shift {}",
            self.day, self.nurse, self.shift
        )
    }
}

impl Record for ShiftEntry {
    fn fields(&self) -> Vec<&str> {
        vec![self.day.as_str(), self.nurse.as_str(), self.shift.as_str()]
    }
}

impl SolutionDecoder for RosterModel<'_> {
    type Entry = ShiftEntry;

    fn constraint_model(&self) -> &ConstraintModel {
        &self.model
    }

    /// Rows are ordered by day, then nurse.
    fn decode(&self, assignment: &Assignment) -> Vec<ShiftEntry> {
        let problem = self.problem;
        let mut entries = Vec::with_capacity(problem.num_days() * problem.num_shifts());

        for day in problem.days() {
            for nurse in problem.nurses() {
                for shift in problem.shifts() {
                    if assignment.is_true(self.works(nurse, day, shift)) {
                        entries.push(ShiftEntry {
                            day: problem.day_name(day).to_owned(),
                            nurse: problem.nurse_name(nurse).to_owned(),
                            shift: problem.shift_name(shift).to_owned(),
                        });
                    }
                }
            }
        }

        entries
    }
}
