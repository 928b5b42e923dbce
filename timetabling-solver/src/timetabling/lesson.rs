use std::fmt::Display;
use std::fmt::Formatter;

use super::AssignmentKey;
use super::TimetableModel;
use crate::enumeration::SolutionDecoder;
use crate::model::Assignment;
use crate::model::ConstraintModel;
use crate::reporting::Record;

/// One lesson of a timetable: `teacher` teaches `subject` to `course` in `slot`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LessonEntry {
    pub course: String,
    pub subject: String,
    pub teacher: String,
    pub slot: String,
}

impl Display for LessonEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Course {} | Subject {} | Teacher {} | TimeSlot {}",
            self.course, self.subject, self.teacher, self.slot
        )
    }
}

impl Record for LessonEntry {
    fn fields(&self) -> Vec<&str> {
        vec![
            self.course.as_str(),
            self.subject.as_str(),
            self.teacher.as_str(),
            self.slot.as_str(),
        ]
    }
}

impl TimetableModel<'_> {
    /// Whether the lesson of `key` is part of the timetable in `assignment`. Ineligible tuples are
    /// never assigned.
    pub fn is_assigned(&self, assignment: &Assignment, key: AssignmentKey) -> bool {
        assignment.is_true_or_absent(self.assignments.get(key))
    }

    /// The keys of all lessons in `assignment`, ordered by course, subject, teacher, then slot.
    pub fn assigned_keys<'a>(
        &'a self,
        assignment: &'a Assignment,
    ) -> impl Iterator<Item = AssignmentKey> + 'a {
        self.assignments
            .iter()
            .filter(|&(_, variable)| assignment.is_true(variable))
            .map(|(key, _)| key)
    }
}

impl SolutionDecoder for TimetableModel<'_> {
    type Entry = LessonEntry;

    fn constraint_model(&self) -> &ConstraintModel {
        &self.model
    }

    fn decode(&self, assignment: &Assignment) -> Vec<LessonEntry> {
        self.assigned_keys(assignment)
            .map(|key| LessonEntry {
                course: self.problem.course_label(key.course),
                subject: self.problem.subject_name(key.subject).to_owned(),
                teacher: self.problem.teacher_name(key.teacher).to_owned(),
                slot: self.problem.slot_label(key.slot).to_owned(),
            })
            .collect()
    }
}
