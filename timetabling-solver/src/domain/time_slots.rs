use super::SlotId;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// The schedulable time units of a problem.
///
/// In the simple variant every working day is one slot. In the richer variant a slot is the
/// combination of a working day and a period of that day; slots are then numbered day-major,
/// i.e. slot `day * num_periods + period`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSlots {
    days: Vec<String>,
    periods: Option<Vec<String>>,
    labels: KeyedVec<SlotId, String>,
}

impl TimeSlots {
    /// Every working day is a single slot.
    pub fn days<Day: Into<String>>(days: impl IntoIterator<Item = Day>) -> TimeSlots {
        let days = days.into_iter().map(Into::into).collect::<Vec<String>>();
        let labels = KeyedVec::from(days.clone());

        TimeSlots {
            days,
            periods: None,
            labels,
        }
    }

    /// Every (working day, period) combination is a slot.
    pub fn grid<Day: Into<String>, Period: Into<String>>(
        days: impl IntoIterator<Item = Day>,
        periods: impl IntoIterator<Item = Period>,
    ) -> TimeSlots {
        let days = days.into_iter().map(Into::into).collect::<Vec<String>>();
        let periods = periods
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        let labels = days
            .iter()
            .flat_map(|day| periods.iter().map(move |period| format!("{day} {period}")))
            .collect::<Vec<_>>();

        TimeSlots {
            days,
            periods: Some(periods),
            labels: KeyedVec::from(labels),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SlotId> {
        self.labels.keys()
    }

    pub fn label(&self, slot: SlotId) -> &str {
        &self.labels[slot]
    }

    pub fn working_days(&self) -> &[String] {
        &self.days
    }

    pub fn periods(&self) -> Option<&[String]> {
        self.periods.as_deref()
    }

    /// The working day a slot falls on.
    pub fn day_of(&self, slot: SlotId) -> &str {
        let periods_per_day = self.periods.as_ref().map_or(1, Vec::len);
        &self.days[slot.index() / periods_per_day]
    }
}
