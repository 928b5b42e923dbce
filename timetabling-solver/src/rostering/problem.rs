use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::domain::index_names;
use crate::domain::ConfigurationError;
use crate::domain::DayId;
use crate::domain::EntityKind;
use crate::domain::NurseId;
use crate::domain::ShiftId;

/// A shift-rostering problem: every day, every shift (including the "off" shift 0) is staffed by
/// exactly one nurse.
#[derive(Clone, Debug)]
pub struct ShiftRosteringProblem {
    nurses: KeyedVec<NurseId, String>,
    days: KeyedVec<DayId, String>,
    shifts: KeyedVec<ShiftId, String>,
    min_off_days: u32,
    max_off_days: Option<u32>,
    max_nurses_per_shift: Option<u32>,
}

impl ShiftRosteringProblem {
    pub fn builder() -> ShiftRosteringProblemBuilder {
        ShiftRosteringProblemBuilder::default()
    }

    pub fn num_nurses(&self) -> usize {
        self.nurses.len()
    }

    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    pub fn num_shifts(&self) -> usize {
        self.shifts.len()
    }

    pub fn nurses(&self) -> impl Iterator<Item = NurseId> {
        self.nurses.keys()
    }

    pub fn days(&self) -> impl Iterator<Item = DayId> {
        self.days.keys()
    }

    /// All shifts, starting with the off shift.
    pub fn shifts(&self) -> impl Iterator<Item = ShiftId> {
        self.shifts.keys()
    }

    /// All shifts except the off shift.
    pub fn working_shifts(&self) -> impl Iterator<Item = ShiftId> {
        self.shifts.keys().skip(1)
    }

    pub fn off_shift(&self) -> ShiftId {
        ShiftId::create_from_index(0)
    }

    pub fn nurse_name(&self, nurse: NurseId) -> &str {
        &self.nurses[nurse]
    }

    pub fn day_name(&self, day: DayId) -> &str {
        &self.days[day]
    }

    pub fn shift_name(&self, shift: ShiftId) -> &str {
        &self.shifts[shift]
    }

    pub fn min_off_days(&self) -> u32 {
        self.min_off_days
    }

    pub fn max_off_days(&self) -> Option<u32> {
        self.max_off_days
    }

    /// The number of distinct nurses which may work a given working shift over the horizon.
    pub fn max_nurses_per_shift(&self) -> Option<u32> {
        self.max_nurses_per_shift
    }
}

#[derive(Clone, Debug, Default)]
pub struct ShiftRosteringProblemBuilder {
    nurses: Vec<String>,
    days: Vec<String>,
    shifts: Vec<String>,
    min_off_days: u32,
    max_off_days: Option<u32>,
    max_nurses_per_shift: Option<u32>,
}

impl ShiftRosteringProblemBuilder {
    pub fn nurses<Name: Into<String>>(mut self, names: impl IntoIterator<Item = Name>) -> Self {
        self.nurses.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn days<Name: Into<String>>(mut self, names: impl IntoIterator<Item = Name>) -> Self {
        self.days.extend(names.into_iter().map(Into::into));
        self
    }

    /// The shifts of a day; the first one is the off shift.
    pub fn shifts<Name: Into<String>>(mut self, names: impl IntoIterator<Item = Name>) -> Self {
        self.shifts.extend(names.into_iter().map(Into::into));
        self
    }

    /// Every nurse is off for at least `min` and, if given, at most `max` days.
    pub fn off_days(mut self, min: u32, max: Option<u32>) -> Self {
        self.min_off_days = min;
        self.max_off_days = max;
        self
    }

    pub fn max_nurses_per_shift(mut self, max: u32) -> Self {
        self.max_nurses_per_shift = Some(max);
        self
    }

    pub fn build(self) -> Result<ShiftRosteringProblem, ConfigurationError> {
        let _ = index_names(&self.nurses, EntityKind::Nurse)?;
        let _ = index_names(&self.days, EntityKind::Day)?;
        let _ = index_names(&self.shifts, EntityKind::Shift)?;

        if let Some(max) = self.max_off_days {
            if max < self.min_off_days {
                return Err(ConfigurationError::InvertedOffDayBounds {
                    min: self.min_off_days,
                    max,
                });
            }
        }

        if self.min_off_days as usize > self.days.len() {
            return Err(ConfigurationError::OffDaysExceedHorizon {
                min: self.min_off_days,
                days: self.days.len(),
            });
        }

        Ok(ShiftRosteringProblem {
            nurses: KeyedVec::from(self.nurses),
            days: KeyedVec::from(self.days),
            shifts: KeyedVec::from(self.shifts),
            min_off_days: self.min_off_days,
            max_off_days: self.max_off_days,
            max_nurses_per_shift: self.max_nurses_per_shift,
        })
    }
}
