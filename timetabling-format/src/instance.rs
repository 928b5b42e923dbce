use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::FormatError;

/// A problem instance as it is stored on disk.
///
/// The `kind` key of the document selects the variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instance {
    Timetabling(TimetablingInstance),
    Rostering(RosteringInstance),
}

impl Instance {
    /// Parse an instance from the contents of a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Instance, FormatError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse the instance stored at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Instance, FormatError> {
        let source = fs::read_to_string(path)?;
        Instance::from_toml_str(&source)
    }

    /// Serialise the instance as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, FormatError> {
        Ok(toml::to_string(self)?)
    }

    /// Write the instance to `path`, replacing any existing file.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), FormatError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// The run options of the instance, regardless of its kind.
    pub fn run_options(&self) -> &RunOptions {
        match self {
            Instance::Timetabling(instance) => &instance.run,
            Instance::Rostering(instance) => &instance.run,
        }
    }
}

/// Options which steer the enumeration of an instance. Every option can be overridden from the
/// command line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// The ordinals of the solutions that should be reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_solutions: Option<Vec<u64>>,

    /// Stop after this many solutions have been found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_solutions: Option<u64>,

    /// Stop after this many milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_ms: Option<u64>,
}

/// A school-timetabling instance.
///
/// Time slots are `working_days` when `periods` is absent, and the cross product of
/// `working_days` and `periods` otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetablingInstance {
    pub subjects: Vec<String>,
    pub levels: Vec<String>,
    pub sections: Vec<String>,
    pub working_days: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<Vec<String>>,
    /// Whether every (course, subject) pair must be taught by a single teacher.
    #[serde(default)]
    pub teacher_consistency: bool,
    pub teachers: Vec<TeacherEntry>,
    pub curriculum: Vec<CurriculumEntry>,
    pub specialties: Vec<SpecialtyEntry>,
    #[serde(default)]
    pub run: RunOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherEntry {
    pub name: String,
    /// The number of time slots the teacher may be assigned over the whole schedule.
    pub max_workload: u32,
}

/// The number of time slots each course of `level` must receive for `subject`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumEntry {
    pub level: String,
    pub subject: String,
    pub slots: u32,
}

/// The teachers which are allowed to teach `subject`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyEntry {
    pub subject: String,
    pub teachers: Vec<String>,
}

/// A shift-rostering instance.
///
/// The first entry of `shifts` is the "off" shift; a nurse assigned to it does not work that day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosteringInstance {
    pub nurses: Vec<String>,
    pub days: Vec<String>,
    pub shifts: Vec<String>,
    #[serde(default)]
    pub min_off_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_off_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nurses_per_shift: Option<u32>,
    #[serde(default)]
    pub run: RunOptions,
}
