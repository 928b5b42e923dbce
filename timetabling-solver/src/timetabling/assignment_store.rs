use crate::containers::StorageKey;
use crate::domain::CourseId;
use crate::domain::SlotId;
use crate::domain::SubjectId;
use crate::domain::TeacherId;
use crate::domain::TimetablingProblem;
use crate::model::VariableId;

/// The index of an assignment variable: teacher `teacher` teaches `subject` to `course` in `slot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssignmentKey {
    pub course: CourseId,
    pub subject: SubjectId,
    pub teacher: TeacherId,
    pub slot: SlotId,
}

/// Dense arena of the assignment variables, indexed by (course, subject, teacher, slot).
///
/// Only tuples where the teacher is eligible for the subject hold a variable; every other entry
/// is empty and stands for the constant false.
#[derive(Clone, Debug)]
pub struct AssignmentStore {
    num_subjects: usize,
    num_teachers: usize,
    num_slots: usize,
    variables: Vec<Option<VariableId>>,
    num_present: usize,
}

impl AssignmentStore {
    /// Create an empty store with the dimensions of `problem`.
    pub(crate) fn new(problem: &TimetablingProblem) -> AssignmentStore {
        let size = problem.num_courses()
            * problem.num_subjects()
            * problem.num_teachers()
            * problem.num_slots();

        AssignmentStore {
            num_subjects: problem.num_subjects(),
            num_teachers: problem.num_teachers(),
            num_slots: problem.num_slots(),
            variables: vec![None; size],
            num_present: 0,
        }
    }

    fn position(&self, key: AssignmentKey) -> usize {
        ((key.course.index() * self.num_subjects + key.subject.index()) * self.num_teachers
            + key.teacher.index())
            * self.num_slots
            + key.slot.index()
    }

    fn key_at(&self, position: usize) -> AssignmentKey {
        let slot = position % self.num_slots;
        let rest = position / self.num_slots;
        let teacher = rest % self.num_teachers;
        let rest = rest / self.num_teachers;
        let subject = rest % self.num_subjects;
        let course = rest / self.num_subjects;

        AssignmentKey {
            course: CourseId::create_from_index(course),
            subject: SubjectId::create_from_index(subject),
            teacher: TeacherId::create_from_index(teacher),
            slot: SlotId::create_from_index(slot),
        }
    }

    pub(crate) fn insert(&mut self, key: AssignmentKey, variable: VariableId) {
        let position = self.position(key);
        if self.variables[position].replace(variable).is_none() {
            self.num_present += 1;
        }
    }

    /// The variable of `key`, or `None` if the tuple is ineligible.
    pub fn get(&self, key: AssignmentKey) -> Option<VariableId> {
        self.variables.get(self.position(key)).copied().flatten()
    }

    /// The number of variables in the store.
    pub fn len(&self) -> usize {
        self.num_present
    }

    pub fn is_empty(&self) -> bool {
        self.num_present == 0
    }

    /// Iterate over the present variables, ordered by course, subject, teacher, then slot.
    pub fn iter(&self) -> impl Iterator<Item = (AssignmentKey, VariableId)> + '_ {
        self.variables
            .iter()
            .enumerate()
            .filter_map(|(position, variable)| {
                variable.map(|variable| (self.key_at(position), variable))
            })
    }
}
