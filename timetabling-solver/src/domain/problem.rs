use super::ConfigurationError;
use super::CourseId;
use super::EntityKind;
use super::LevelId;
use super::SectionId;
use super::SlotId;
use super::SubjectId;
use super::TeacherId;
use super::TimeSlots;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// A teacher together with the number of time slots they may be assigned over the whole schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Teacher {
    pub name: String,
    pub max_workload: u32,
}

/// An immutable school-timetabling problem instance.
///
/// Courses are derived from levels and sections, time slots from working days (and optionally
/// periods). Every name is resolved to a typed index when the problem is built, so that the
/// model builder never has to deal with strings.
///
/// # Example
/// ```
/// # use timetabling_solver::domain::TimetablingProblem;
/// # use timetabling_solver::domain::TimeSlots;
/// let problem = TimetablingProblem::builder()
///     .subjects(["English", "Math"])
///     .teacher("Ian", 2)
///     .levels(["1-"])
///     .sections(["A"])
///     .time_slots(TimeSlots::days(["Monday", "Tuesday"]))
///     .curriculum("1-", "English", 1)
///     .curriculum("1-", "Math", 1)
///     .specialty("English", ["Ian"])
///     .specialty("Math", ["Ian"])
///     .build()
///     .expect("well-formed problem");
///
/// assert_eq!(problem.num_courses(), 1);
/// assert_eq!(problem.num_slots(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TimetablingProblem {
    subjects: KeyedVec<SubjectId, String>,
    teachers: KeyedVec<TeacherId, Teacher>,
    levels: KeyedVec<LevelId, String>,
    sections: KeyedVec<SectionId, String>,
    time_slots: TimeSlots,
    curriculum: HashMap<(LevelId, SubjectId), u32>,
    /// For every subject, the sorted teachers which may teach it.
    specialties: KeyedVec<SubjectId, Vec<TeacherId>>,
}

impl TimetablingProblem {
    pub fn builder() -> TimetablingProblemBuilder {
        TimetablingProblemBuilder::default()
    }

    pub fn num_subjects(&self) -> usize {
        self.subjects.len()
    }

    pub fn num_teachers(&self) -> usize {
        self.teachers.len()
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn num_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn num_courses(&self) -> usize {
        self.levels.len() * self.sections.len()
    }

    pub fn num_slots(&self) -> usize {
        self.time_slots.len()
    }

    pub fn subjects(&self) -> impl Iterator<Item = SubjectId> {
        self.subjects.keys()
    }

    pub fn teachers(&self) -> impl Iterator<Item = TeacherId> {
        self.teachers.keys()
    }

    pub fn levels(&self) -> impl Iterator<Item = LevelId> {
        self.levels.keys()
    }

    pub fn courses(&self) -> impl Iterator<Item = CourseId> {
        (0..self.num_courses()).map(CourseId::create_from_index)
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotId> {
        self.time_slots.iter()
    }

    pub fn time_slots(&self) -> &TimeSlots {
        &self.time_slots
    }

    pub fn subject_name(&self, subject: SubjectId) -> &str {
        &self.subjects[subject]
    }

    pub fn teacher(&self, teacher: TeacherId) -> &Teacher {
        &self.teachers[teacher]
    }

    pub fn teacher_name(&self, teacher: TeacherId) -> &str {
        &self.teachers[teacher].name
    }

    pub fn max_workload(&self, teacher: TeacherId) -> u32 {
        self.teachers[teacher].max_workload
    }

    pub fn level_name(&self, level: LevelId) -> &str {
        &self.levels[level]
    }

    pub fn section_name(&self, section: SectionId) -> &str {
        &self.sections[section]
    }

    pub fn slot_label(&self, slot: SlotId) -> &str {
        self.time_slots.label(slot)
    }

    /// The course of `section` in `level`.
    pub fn course(&self, level: LevelId, section: SectionId) -> CourseId {
        CourseId::create_from_index(level.index() * self.num_sections() + section.index())
    }

    pub fn course_level(&self, course: CourseId) -> LevelId {
        LevelId::create_from_index(course.index() / self.num_sections())
    }

    pub fn course_section(&self, course: CourseId) -> SectionId {
        SectionId::create_from_index(course.index() % self.num_sections())
    }

    /// The human readable name of a course, e.g. `1-A`.
    pub fn course_label(&self, course: CourseId) -> String {
        format!(
            "{}{}",
            self.level_name(self.course_level(course)),
            self.section_name(self.course_section(course))
        )
    }

    /// The exact number of slots the courses of `level` must receive for `subject`.
    ///
    /// A missing entry is a configuration error; it is never treated as zero.
    pub fn required_slots(
        &self,
        level: LevelId,
        subject: SubjectId,
    ) -> Result<u32, ConfigurationError> {
        self.curriculum
            .get(&(level, subject))
            .copied()
            .ok_or_else(|| ConfigurationError::MissingCurriculumEntry {
                level: self.level_name(level).to_owned(),
                subject: self.subject_name(subject).to_owned(),
            })
    }

    /// The teachers which may teach `subject`, in increasing index order.
    pub fn eligible_teachers(&self, subject: SubjectId) -> &[TeacherId] {
        &self.specialties[subject]
    }

    pub fn is_eligible(&self, subject: SubjectId, teacher: TeacherId) -> bool {
        self.specialties[subject].binary_search(&teacher).is_ok()
    }

    /// Check the preconditions the model builder relies on.
    ///
    /// Subjects without eligible teachers are reported first, then (level, subject) pairs without a
    /// curriculum entry or with a requirement which exceeds the number of time slots.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for subject in self.subjects() {
            if self.eligible_teachers(subject).is_empty() {
                return Err(ConfigurationError::NoEligibleTeacher {
                    subject: self.subject_name(subject).to_owned(),
                });
            }
        }

        for level in self.levels() {
            for subject in self.subjects() {
                let required = self.required_slots(level, subject)?;

                if required as usize > self.num_slots() {
                    return Err(ConfigurationError::RequirementExceedsSlots {
                        level: self.level_name(level).to_owned(),
                        subject: self.subject_name(subject).to_owned(),
                        required,
                        available: self.num_slots(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Collects the (named) data of a [`TimetablingProblem`].
///
/// Nothing is checked until [`TimetablingProblemBuilder::build`] is called.
#[derive(Clone, Debug, Default)]
pub struct TimetablingProblemBuilder {
    subjects: Vec<String>,
    teachers: Vec<Teacher>,
    levels: Vec<String>,
    sections: Vec<String>,
    time_slots: Option<TimeSlots>,
    curriculum: Vec<(String, String, u32)>,
    specialties: Vec<(String, Vec<String>)>,
}

impl TimetablingProblemBuilder {
    pub fn subjects<Name: Into<String>>(mut self, names: impl IntoIterator<Item = Name>) -> Self {
        self.subjects.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn teacher(mut self, name: impl Into<String>, max_workload: u32) -> Self {
        self.teachers.push(Teacher {
            name: name.into(),
            max_workload,
        });
        self
    }

    pub fn levels<Name: Into<String>>(mut self, names: impl IntoIterator<Item = Name>) -> Self {
        self.levels.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn sections<Name: Into<String>>(mut self, names: impl IntoIterator<Item = Name>) -> Self {
        self.sections.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn time_slots(mut self, time_slots: TimeSlots) -> Self {
        self.time_slots = Some(time_slots);
        self
    }

    /// Every course of `level` must receive exactly `slots` slots of `subject`.
    pub fn curriculum(
        mut self,
        level: impl Into<String>,
        subject: impl Into<String>,
        slots: u32,
    ) -> Self {
        self.curriculum.push((level.into(), subject.into(), slots));
        self
    }

    /// Allow the given teachers to teach `subject`. Repeated calls for the same subject extend the
    /// set of eligible teachers.
    pub fn specialty<Name: Into<String>>(
        mut self,
        subject: impl Into<String>,
        teachers: impl IntoIterator<Item = Name>,
    ) -> Self {
        self.specialties.push((
            subject.into(),
            teachers.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Resolve all names and create the problem.
    ///
    /// Fails on duplicate or unknown names, missing entity lists, and duplicate curriculum
    /// entries. Semantic checks (see [`TimetablingProblem::validate`]) are left to the model
    /// builder.
    pub fn build(self) -> Result<TimetablingProblem, ConfigurationError> {
        let subject_index = index_names(&self.subjects, EntityKind::Subject)?;
        let level_index = index_names(&self.levels, EntityKind::Level)?;
        let _ = index_names(&self.sections, EntityKind::Section)?;
        let teacher_names = self
            .teachers
            .iter()
            .map(|teacher| teacher.name.clone())
            .collect::<Vec<_>>();
        let teacher_index = index_names(&teacher_names, EntityKind::Teacher)?;

        let time_slots = self
            .time_slots
            .filter(|slots| !slots.is_empty())
            .ok_or(ConfigurationError::Empty {
                kind: EntityKind::TimeSlot,
            })?;

        let mut curriculum = HashMap::default();
        for (level, subject, slots) in self.curriculum {
            let level_id = resolve::<LevelId>(&level_index, &level, EntityKind::Level)?;
            let subject_id = resolve::<SubjectId>(&subject_index, &subject, EntityKind::Subject)?;

            if curriculum.insert((level_id, subject_id), slots).is_some() {
                return Err(ConfigurationError::DuplicateCurriculumEntry { level, subject });
            }
        }

        let mut specialties: KeyedVec<SubjectId, Vec<TeacherId>> =
            KeyedVec::from(vec![Vec::new(); self.subjects.len()]);
        for (subject, teachers) in self.specialties {
            let subject_id = resolve::<SubjectId>(&subject_index, &subject, EntityKind::Subject)?;

            for teacher in teachers {
                let teacher_id =
                    resolve::<TeacherId>(&teacher_index, &teacher, EntityKind::Teacher)?;
                specialties[subject_id].push(teacher_id);
            }
        }
        for eligible in specialties.iter_mut() {
            eligible.sort_unstable();
            eligible.dedup();
        }

        Ok(TimetablingProblem {
            subjects: KeyedVec::from(self.subjects),
            teachers: KeyedVec::from(self.teachers),
            levels: KeyedVec::from(self.levels),
            sections: KeyedVec::from(self.sections),
            time_slots,
            curriculum,
            specialties,
        })
    }
}

/// Map every name to its position, rejecting empty lists and duplicates.
pub(crate) fn index_names(
    names: &[String],
    kind: EntityKind,
) -> Result<HashMap<String, usize>, ConfigurationError> {
    if names.is_empty() {
        return Err(ConfigurationError::Empty { kind });
    }

    let mut index = HashMap::default();
    for (position, name) in names.iter().enumerate() {
        if index.insert(name.clone(), position).is_some() {
            return Err(ConfigurationError::DuplicateName {
                kind,
                name: name.clone(),
            });
        }
    }

    Ok(index)
}

fn resolve<Key: StorageKey>(
    index: &HashMap<String, usize>,
    name: &str,
    kind: EntityKind,
) -> Result<Key, ConfigurationError> {
    index
        .get(name)
        .map(|&position| Key::create_from_index(position))
        .ok_or_else(|| ConfigurationError::UnknownName {
            kind,
            name: name.to_owned(),
        })
}
