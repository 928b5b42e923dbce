//! Conversion of the on-disk instances of `timetabling-format` into problems.
use std::time::Duration;

use timetabling_format::RosteringInstance;
use timetabling_format::RunOptions;
use timetabling_format::TimetablingInstance;

use crate::domain::ConfigurationError;
use crate::domain::TimeSlots;
use crate::domain::TimetablingProblem;
use crate::enumeration::EnumerationLimits;
use crate::enumeration::ReportedOrdinals;
use crate::rostering::ShiftRosteringProblem;
use crate::timetabling::BuildOptions;

impl TryFrom<&TimetablingInstance> for TimetablingProblem {
    type Error = ConfigurationError;

    fn try_from(instance: &TimetablingInstance) -> Result<Self, Self::Error> {
        let time_slots = match &instance.periods {
            Some(periods) => TimeSlots::grid(&instance.working_days, periods),
            None => TimeSlots::days(&instance.working_days),
        };

        let builder = instance.teachers.iter().fold(
            TimetablingProblem::builder()
                .subjects(&instance.subjects)
                .levels(&instance.levels)
                .sections(&instance.sections)
                .time_slots(time_slots),
            |builder, teacher| builder.teacher(&teacher.name, teacher.max_workload),
        );
        let builder = instance.curriculum.iter().fold(builder, |builder, entry| {
            builder.curriculum(&entry.level, &entry.subject, entry.slots)
        });
        let builder = instance.specialties.iter().fold(builder, |builder, entry| {
            builder.specialty(&entry.subject, &entry.teachers)
        });

        builder.build()
    }
}

impl TryFrom<&RosteringInstance> for ShiftRosteringProblem {
    type Error = ConfigurationError;

    fn try_from(instance: &RosteringInstance) -> Result<Self, Self::Error> {
        let builder = ShiftRosteringProblem::builder()
            .nurses(&instance.nurses)
            .days(&instance.days)
            .shifts(&instance.shifts)
            .off_days(instance.min_off_days, instance.max_off_days);

        match instance.max_nurses_per_shift {
            Some(max) => builder.max_nurses_per_shift(max).build(),
            None => builder.build(),
        }
    }
}

impl From<&TimetablingInstance> for BuildOptions {
    fn from(instance: &TimetablingInstance) -> Self {
        BuildOptions {
            teacher_consistency: instance.teacher_consistency,
        }
    }
}

/// The reported ordinals of an instance, falling back to the default set.
pub fn reported_ordinals(options: &RunOptions) -> ReportedOrdinals {
    options
        .report_solutions
        .as_ref()
        .map_or_else(ReportedOrdinals::default, |ordinals| {
            ReportedOrdinals::only(ordinals.iter().copied())
        })
}

pub fn enumeration_limits(options: &RunOptions) -> EnumerationLimits {
    EnumerationLimits {
        max_solutions: options.max_solutions,
        time_limit: options.time_limit_ms.map(Duration::from_millis),
    }
}

#[cfg(test)]
mod tests {
    use timetabling_format::CurriculumEntry;
    use timetabling_format::SpecialtyEntry;
    use timetabling_format::TeacherEntry;

    use super::*;
    use crate::domain::EntityKind;

    fn school() -> TimetablingInstance {
        TimetablingInstance {
            subjects: vec!["English".to_owned(), "Math".to_owned()],
            levels: vec!["1-".to_owned()],
            sections: vec!["A".to_owned()],
            working_days: vec!["Monday".to_owned(), "Tuesday".to_owned()],
            periods: Some(vec!["08:00".to_owned(), "10:00".to_owned()]),
            teacher_consistency: true,
            teachers: vec![TeacherEntry {
                name: "Ian".to_owned(),
                max_workload: 2,
            }],
            curriculum: vec![
                CurriculumEntry {
                    level: "1-".to_owned(),
                    subject: "English".to_owned(),
                    slots: 1,
                },
                CurriculumEntry {
                    level: "1-".to_owned(),
                    subject: "Math".to_owned(),
                    slots: 1,
                },
            ],
            specialties: vec![SpecialtyEntry {
                subject: "English".to_owned(),
                teachers: vec!["Ian".to_owned()],
            }],
            run: RunOptions {
                report_solutions: Some(vec![1, 5]),
                max_solutions: None,
                time_limit_ms: Some(250),
            },
        }
    }

    #[test]
    fn timetabling_instance_becomes_a_problem() {
        let instance = school();

        let problem = TimetablingProblem::try_from(&instance).expect("valid instance");

        assert_eq!(problem.num_slots(), 4);
        assert_eq!(problem.num_courses(), 1);
        assert_eq!(
            BuildOptions::from(&instance),
            BuildOptions {
                teacher_consistency: true
            }
        );
        // Math has no eligible teacher, which is only detected by validation.
        assert!(matches!(
            problem.validate(),
            Err(ConfigurationError::NoEligibleTeacher { .. })
        ));
    }

    #[test]
    fn unknown_teacher_in_specialties_is_a_configuration_error() {
        let mut instance = school();
        instance.specialties[0].teachers.push("Nobody".to_owned());

        let result = TimetablingProblem::try_from(&instance);

        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::UnknownName {
                kind: EntityKind::Teacher,
                name: "Nobody".to_owned()
            }
        );
    }

    #[test]
    fn run_options_are_translated() {
        let instance = school();

        let ordinals = reported_ordinals(&instance.run);
        assert!(ordinals.contains(5));
        assert!(!ordinals.contains(2));

        let limits = enumeration_limits(&instance.run);
        assert_eq!(limits.max_solutions, None);
        assert_eq!(limits.time_limit, Some(Duration::from_millis(250)));

        assert_eq!(
            reported_ordinals(&RunOptions::default()),
            ReportedOrdinals::default()
        );
    }
}
