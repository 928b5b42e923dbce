use std::fmt::Display;
use std::fmt::Formatter;

use thiserror::Error;

/// Defects in a problem description which make it impossible (or pointless) to build a model.
///
/// These are detected before the solver is ever invoked, so that a misconfigured dataset is
/// reported with the entity at fault rather than as an infeasible model.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("the {kind} '{name}' is defined more than once")]
    DuplicateName { kind: EntityKind, name: String },

    #[error("unknown {kind} '{name}'")]
    UnknownName { kind: EntityKind, name: String },

    #[error("the {kind} list is empty")]
    Empty { kind: EntityKind },

    #[error("the curriculum lists level '{level}' and subject '{subject}' more than once")]
    DuplicateCurriculumEntry { level: String, subject: String },

    #[error("the curriculum has no entry for level '{level}' and subject '{subject}'")]
    MissingCurriculumEntry { level: String, subject: String },

    #[error("no teacher is eligible to teach subject '{subject}'")]
    NoEligibleTeacher { subject: String },

    #[error(
        "level '{level}' requires {required} slots of subject '{subject}', but only {available} \
         slots exist"
    )]
    RequirementExceedsSlots {
        level: String,
        subject: String,
        required: u32,
        available: usize,
    },

    #[error("the off-day bounds are inverted: minimum {min} exceeds maximum {max}")]
    InvertedOffDayBounds { min: u32, max: u32 },

    #[error("a nurse must be off for at least {min} days, but the horizon only has {days} days")]
    OffDaysExceedHorizon { min: u32, days: usize },
}

/// The kind of entity a [`ConfigurationError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Subject,
    Teacher,
    Level,
    Section,
    TimeSlot,
    Nurse,
    Day,
    Shift,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Subject => "subject",
            EntityKind::Teacher => "teacher",
            EntityKind::Level => "level",
            EntityKind::Section => "section",
            EntityKind::TimeSlot => "time slot",
            EntityKind::Nurse => "nurse",
            EntityKind::Day => "day",
            EntityKind::Shift => "shift",
        };

        write!(f, "{name}")
    }
}
