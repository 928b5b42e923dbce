use crate::containers::StorageKey;

macro_rules! storage_key {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl StorageKey for $name {
            fn index(&self) -> usize {
                self.0 as usize
            }

            fn create_from_index(index: usize) -> Self {
                $name(index as u32)
            }
        }
    };
}

storage_key!(
    /// Identifies a subject of a [`TimetablingProblem`](crate::domain::TimetablingProblem).
    SubjectId
);
storage_key!(
    /// Identifies a teacher of a [`TimetablingProblem`](crate::domain::TimetablingProblem).
    TeacherId
);
storage_key!(
    /// Identifies a level (grade) of a [`TimetablingProblem`](crate::domain::TimetablingProblem).
    LevelId
);
storage_key!(
    /// Identifies a section of a level.
    SectionId
);
storage_key!(
    /// Identifies a course, i.e. a (level, section) combination. The index of a course is
    /// `level_index * num_sections + section_index`.
    CourseId
);
storage_key!(
    /// Identifies an atomic time slot.
    SlotId
);
storage_key!(
    /// Identifies a nurse of a [`ShiftRosteringProblem`](crate::rostering::ShiftRosteringProblem).
    NurseId
);
storage_key!(
    /// Identifies a day of the rostering horizon.
    DayId
);
storage_key!(
    /// Identifies a shift. Shift 0 is the "off" shift.
    ShiftId
);
