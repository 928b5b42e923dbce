use std::collections::BTreeSet;

/// The ordinals of the solutions which are rendered and reported.
///
/// Solutions are numbered from 1 in the order the solver finds them. Reporting only a sample of
/// them keeps the output bounded when there are many, while still showing early and very late
/// solutions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportedOrdinals {
    /// `None` means every solution is reported.
    ordinals: Option<BTreeSet<u64>>,
}

impl ReportedOrdinals {
    pub const DEFAULT: [u64; 8] = [1, 2, 100, 1000, 5000, 50000, 100000, 2000000];

    /// Report every solution.
    pub fn every() -> ReportedOrdinals {
        ReportedOrdinals { ordinals: None }
    }

    /// Report only the given ordinals.
    pub fn only(ordinals: impl IntoIterator<Item = u64>) -> ReportedOrdinals {
        ReportedOrdinals {
            ordinals: Some(ordinals.into_iter().collect()),
        }
    }

    pub fn contains(&self, ordinal: u64) -> bool {
        match &self.ordinals {
            Some(ordinals) => ordinals.contains(&ordinal),
            None => true,
        }
    }
}

impl Default for ReportedOrdinals {
    fn default() -> Self {
        ReportedOrdinals::only(ReportedOrdinals::DEFAULT)
    }
}

impl FromIterator<u64> for ReportedOrdinals {
    fn from_iter<T: IntoIterator<Item = u64>>(iter: T) -> Self {
        ReportedOrdinals::only(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_samples_across_the_enumeration() {
        let ordinals = ReportedOrdinals::default();

        assert!(ordinals.contains(1));
        assert!(ordinals.contains(2));
        assert!(!ordinals.contains(3));
        assert!(ordinals.contains(100_000));
        assert!(ordinals.contains(2_000_000));
        assert!(!ordinals.contains(0));
    }

    #[test]
    fn every_contains_all_ordinals() {
        let ordinals = ReportedOrdinals::every();

        assert!((1..50).all(|ordinal| ordinals.contains(ordinal)));
    }
}
