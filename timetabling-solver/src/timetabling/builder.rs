use log::debug;

use super::AssignmentKey;
use super::AssignmentStore;
use crate::containers::HashMap;
use crate::domain::ConfigurationError;
use crate::domain::CourseId;
use crate::domain::SubjectId;
use crate::domain::TeacherId;
use crate::domain::TimetablingProblem;
use crate::model::Comparison;
use crate::model::ConstraintClass;
use crate::model::ConstraintModel;
use crate::model::ConstraintOrigin;
use crate::model::VariableId;
use crate::model::to_rhs;

/// Selects the optional constraint families of a timetabling model.
///
/// Curriculum coverage, teacher exclusivity and the workload ceiling are always part of the model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Require that every (course, subject) pair is taught by exactly one teacher over the whole
    /// schedule.
    pub teacher_consistency: bool,
}

/// The constraint model of a [`TimetablingProblem`] together with the structure needed to read a
/// timetable back out of a solution.
#[derive(Clone, Debug)]
pub struct TimetableModel<'problem> {
    pub(super) problem: &'problem TimetablingProblem,
    pub(super) options: BuildOptions,
    pub(super) model: ConstraintModel,
    pub(super) assignments: AssignmentStore,
    /// The "teaches this (course, subject) pair at all" variables. Only present when teacher
    /// consistency is enabled.
    pub(super) teaches_pair: HashMap<(CourseId, SubjectId, TeacherId), VariableId>,
}

impl<'problem> TimetableModel<'problem> {
    /// Compile `problem` into a constraint model.
    ///
    /// The problem is validated first, so defects such as a subject without eligible teachers
    /// are reported as a [`ConfigurationError`] instead of surfacing as an infeasible model.
    pub fn build(
        problem: &'problem TimetablingProblem,
        options: BuildOptions,
    ) -> Result<TimetableModel<'problem>, ConfigurationError> {
        problem.validate()?;

        let mut builder = TimetableModelBuilder {
            problem,
            model: ConstraintModel::new(),
            assignments: AssignmentStore::new(problem),
            teaches_pair: HashMap::default(),
        };

        builder.create_assignment_variables();
        builder.add_curriculum_coverage()?;
        builder.add_teacher_exclusivity();
        builder.add_workload_ceilings();
        if options.teacher_consistency {
            builder.add_teacher_consistency();
        }

        debug!(
            "Created {} assignment variables for {} courses, {} subjects, {} teachers and {} slots",
            builder.assignments.len(),
            problem.num_courses(),
            problem.num_subjects(),
            problem.num_teachers(),
            problem.num_slots()
        );
        builder.model.log_summary();

        Ok(TimetableModel {
            problem,
            options,
            model: builder.model,
            assignments: builder.assignments,
            teaches_pair: builder.teaches_pair,
        })
    }

    pub fn problem(&self) -> &'problem TimetablingProblem {
        self.problem
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    pub fn model(&self) -> &ConstraintModel {
        &self.model
    }

    pub fn assignments(&self) -> &AssignmentStore {
        &self.assignments
    }

    /// The variable which indicates whether `teacher` teaches `subject` to `course` in any slot.
    pub fn teaches_pair(
        &self,
        course: CourseId,
        subject: SubjectId,
        teacher: TeacherId,
    ) -> Option<VariableId> {
        self.teaches_pair.get(&(course, subject, teacher)).copied()
    }
}

struct TimetableModelBuilder<'problem> {
    problem: &'problem TimetablingProblem,
    model: ConstraintModel,
    assignments: AssignmentStore,
    teaches_pair: HashMap<(CourseId, SubjectId, TeacherId), VariableId>,
}

impl TimetableModelBuilder<'_> {
    /// One 0-1 variable per (course, subject, eligible teacher, slot).
    fn create_assignment_variables(&mut self) {
        let problem = self.problem;

        for course in problem.courses() {
            for subject in problem.subjects() {
                for &teacher in problem.eligible_teachers(subject) {
                    for slot in problem.slots() {
                        let variable = self.model.new_boolean(format!(
                            "assign[{}, {}, {}, {}]",
                            problem.course_label(course),
                            problem.subject_name(subject),
                            problem.teacher_name(teacher),
                            problem.slot_label(slot)
                        ));

                        self.assignments.insert(
                            AssignmentKey {
                                course,
                                subject,
                                teacher,
                                slot,
                            },
                            variable,
                        );
                    }
                }
            }
        }
    }

    /// The variables of a (course, subject) pair over all teachers and slots.
    fn pair_variables(&self, course: CourseId, subject: SubjectId) -> Vec<VariableId> {
        self.problem
            .eligible_teachers(subject)
            .iter()
            .flat_map(|&teacher| self.pair_variables_of(course, subject, teacher))
            .collect()
    }

    fn pair_variables_of(
        &self,
        course: CourseId,
        subject: SubjectId,
        teacher: TeacherId,
    ) -> Vec<VariableId> {
        self.problem
            .slots()
            .filter_map(|slot| {
                self.assignments.get(AssignmentKey {
                    course,
                    subject,
                    teacher,
                    slot,
                })
            })
            .collect()
    }

    fn pair_entity(&self, course: CourseId, subject: SubjectId) -> String {
        format!(
            "course {}, subject {}",
            self.problem.course_label(course),
            self.problem.subject_name(subject)
        )
    }

    /// Every course receives exactly the required number of slots of every subject.
    fn add_curriculum_coverage(&mut self) -> Result<(), ConfigurationError> {
        let problem = self.problem;

        for course in problem.courses() {
            let level = problem.course_level(course);

            for subject in problem.subjects() {
                let required = problem.required_slots(level, subject)?;
                let terms = self.pair_variables(course, subject);
                let origin = ConstraintOrigin {
                    class: ConstraintClass::CurriculumCoverage,
                    entity: self.pair_entity(course, subject),
                };

                self.model
                    .add_linear(terms, Comparison::Equal, to_rhs(required), origin);
            }
        }

        Ok(())
    }

    /// A teacher is in at most one place per slot.
    fn add_teacher_exclusivity(&mut self) {
        let problem = self.problem;
        let assignments = &self.assignments;

        for teacher in problem.teachers() {
            for slot in problem.slots() {
                let terms = problem
                    .courses()
                    .flat_map(|course| {
                        problem.subjects().filter_map(move |subject| {
                            assignments.get(AssignmentKey {
                                course,
                                subject,
                                teacher,
                                slot,
                            })
                        })
                    })
                    .collect::<Vec<_>>();
                let origin = ConstraintOrigin {
                    class: ConstraintClass::TeacherExclusivity,
                    entity: format!(
                        "teacher {}, slot {}",
                        problem.teacher_name(teacher),
                        problem.slot_label(slot)
                    ),
                };

                self.model
                    .add_linear(terms, Comparison::LessThanOrEqual, 1, origin);
            }
        }
    }

    /// A teacher is assigned to at most their maximum workload of slots.
    fn add_workload_ceilings(&mut self) {
        let problem = self.problem;

        for teacher in problem.teachers() {
            let terms = self
                .assignments
                .iter()
                .filter(|(key, _)| key.teacher == teacher)
                .map(|(_, variable)| variable)
                .collect::<Vec<_>>();
            let origin = ConstraintOrigin {
                class: ConstraintClass::WorkloadCeiling,
                entity: format!("teacher {}", problem.teacher_name(teacher)),
            };

            self.model.add_linear(
                terms,
                Comparison::LessThanOrEqual,
                to_rhs(problem.max_workload(teacher)),
                origin,
            );
        }
    }

    /// Exactly one teacher teaches each (course, subject) pair over the whole schedule.
    ///
    /// For every eligible teacher `t` a variable `teaches[c, s, t] = max_slot assign[c, s, t, slot]`
    /// is introduced, and the sum of these variables over the teachers must equal one.
    fn add_teacher_consistency(&mut self) {
        let problem = self.problem;

        for course in problem.courses() {
            for subject in problem.subjects() {
                let mut teaches = Vec::with_capacity(problem.eligible_teachers(subject).len());

                for &teacher in problem.eligible_teachers(subject) {
                    let slots = self.pair_variables_of(course, subject, teacher);
                    let teaches_pair = self.model.new_boolean(format!(
                        "teaches[{}, {}, {}]",
                        problem.course_label(course),
                        problem.subject_name(subject),
                        problem.teacher_name(teacher)
                    ));
                    let origin = ConstraintOrigin {
                        class: ConstraintClass::TeacherConsistency,
                        entity: format!(
                            "{}, teacher {}",
                            self.pair_entity(course, subject),
                            problem.teacher_name(teacher)
                        ),
                    };

                    self.model.add_maximum(slots, teaches_pair, origin);
                    let _ = self
                        .teaches_pair
                        .insert((course, subject, teacher), teaches_pair);
                    teaches.push(teaches_pair);
                }

                let origin = ConstraintOrigin {
                    class: ConstraintClass::TeacherConsistency,
                    entity: self.pair_entity(course, subject),
                };
                self.model
                    .add_linear(teaches, Comparison::Equal, 1, origin);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::StorageKey;
    use crate::domain::SlotId;
    use crate::domain::TimeSlots;
    use crate::model::ConstraintKind;

    /// Two courses, two subjects, three teachers, two slots. Elvis only teaches English, Mario
    /// only Math, Ian both.
    fn problem() -> TimetablingProblem {
        TimetablingProblem::builder()
            .subjects(["English", "Math"])
            .teacher("Elvis", 4)
            .teacher("Mario", 4)
            .teacher("Ian", 4)
            .levels(["1-"])
            .sections(["A", "B"])
            .time_slots(TimeSlots::days(["Monday", "Tuesday"]))
            .curriculum("1-", "English", 1)
            .curriculum("1-", "Math", 1)
            .specialty("English", ["Elvis", "Ian"])
            .specialty("Math", ["Mario", "Ian"])
            .build()
            .expect("valid problem")
    }

    fn key(course: usize, subject: usize, teacher: usize, slot: usize) -> AssignmentKey {
        AssignmentKey {
            course: CourseId::create_from_index(course),
            subject: SubjectId::create_from_index(subject),
            teacher: TeacherId::create_from_index(teacher),
            slot: SlotId::create_from_index(slot),
        }
    }

    #[test]
    fn only_eligible_tuples_get_a_variable() {
        let problem = problem();
        let timetable = TimetableModel::build(&problem, BuildOptions::default()).unwrap();

        // 2 courses * (2 eligible teachers for each of 2 subjects) * 2 slots
        assert_eq!(timetable.assignments().len(), 16);
        assert_eq!(timetable.model().num_variables(), 16);

        // Mario does not teach English, Elvis does not teach Math.
        assert_eq!(timetable.assignments().get(key(0, 0, 1, 0)), None);
        assert_eq!(timetable.assignments().get(key(1, 1, 0, 1)), None);
        assert!(timetable.assignments().get(key(1, 0, 0, 1)).is_some());
        assert!(timetable.assignments().get(key(0, 1, 2, 0)).is_some());
    }

    #[test]
    fn constraint_families_have_the_expected_sizes() {
        let problem = problem();
        let timetable = TimetableModel::build(&problem, BuildOptions::default()).unwrap();

        let counts = timetable.model().count_by_class();
        // one per (course, subject)
        assert_eq!(counts[&ConstraintClass::CurriculumCoverage], 4);
        // one per (teacher, slot)
        assert_eq!(counts[&ConstraintClass::TeacherExclusivity], 6);
        // one per teacher
        assert_eq!(counts[&ConstraintClass::WorkloadCeiling], 3);
        assert_eq!(counts.get(&ConstraintClass::TeacherConsistency), None);
    }

    #[test]
    fn coverage_sums_over_eligible_teachers_and_slots() {
        let problem = problem();
        let timetable = TimetableModel::build(&problem, BuildOptions::default()).unwrap();

        let coverage = timetable
            .model()
            .constraints()
            .iter()
            .find(|constraint| constraint.origin.class == ConstraintClass::CurriculumCoverage)
            .expect("coverage constraint");

        assert_eq!(coverage.origin.entity, "course 1-A, subject English");
        let ConstraintKind::Linear {
            terms,
            comparison,
            rhs,
        } = &coverage.kind
        else {
            panic!("coverage must be linear");
        };
        assert_eq!(terms.len(), 4);
        assert_eq!(*comparison, Comparison::Equal);
        assert_eq!(*rhs, 1);
    }

    #[test]
    fn consistency_adds_one_indicator_per_eligible_teacher() {
        let problem = problem();
        let timetable = TimetableModel::build(
            &problem,
            BuildOptions {
                teacher_consistency: true,
            },
        )
        .unwrap();

        // 4 (course, subject) pairs with 2 eligible teachers each
        assert_eq!(timetable.model().num_variables(), 16 + 8);
        let counts = timetable.model().count_by_class();
        assert_eq!(counts[&ConstraintClass::TeacherConsistency], 8 + 4);

        let course = CourseId::create_from_index(1);
        let math = SubjectId::create_from_index(1);
        assert!(timetable
            .teaches_pair(course, math, TeacherId::create_from_index(1))
            .is_some());
        assert!(timetable
            .teaches_pair(course, math, TeacherId::create_from_index(0))
            .is_none());
    }

    #[test]
    fn every_eligible_teacher_has_its_own_indicator() {
        let problem = problem();
        let timetable = TimetableModel::build(
            &problem,
            BuildOptions {
                teacher_consistency: true,
            },
        )
        .unwrap();

        let maxima = timetable
            .model()
            .constraints()
            .iter()
            .filter_map(|constraint| match &constraint.kind {
                ConstraintKind::Maximum { rhs, .. } => Some(*rhs),
                ConstraintKind::Linear { .. } => None,
            })
            .collect::<Vec<_>>();

        let mut indicators = Vec::new();
        for course in problem.courses() {
            for subject in problem.subjects() {
                for &teacher in problem.eligible_teachers(subject) {
                    let indicator = timetable
                        .teaches_pair(course, subject, teacher)
                        .expect("eligible teachers have an indicator");
                    assert!(maxima.contains(&indicator));
                    indicators.push(indicator);
                }
            }
        }

        indicators.sort_unstable();
        indicators.dedup();
        assert_eq!(indicators.len(), 8);
    }

    #[test]
    fn subject_without_teacher_is_a_configuration_error() {
        let problem = TimetablingProblem::builder()
            .subjects(["English", "Latin"])
            .teacher("Ian", 2)
            .levels(["1-"])
            .sections(["A"])
            .time_slots(TimeSlots::days(["Monday", "Tuesday"]))
            .curriculum("1-", "English", 1)
            .curriculum("1-", "Latin", 1)
            .specialty("English", ["Ian"])
            .build()
            .unwrap();

        let result = TimetableModel::build(&problem, BuildOptions::default());

        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::NoEligibleTeacher {
                subject: "Latin".to_owned()
            }
        );
    }
}
