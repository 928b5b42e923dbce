use super::VariableId;
use crate::containers::KeyedVec;

/// The values of all model variables in one feasible solution.
///
/// This is a snapshot which is copied out of the solver, so decoders can inspect it without
/// holding on to any solver state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: KeyedVec<VariableId, i32>,
}

impl Assignment {
    pub fn new(values: Vec<i32>) -> Assignment {
        Assignment {
            values: KeyedVec::from(values),
        }
    }

    pub fn value(&self, variable: VariableId) -> i32 {
        self.values[variable]
    }

    /// Whether the 0-1 variable is set to one.
    pub fn is_true(&self, variable: VariableId) -> bool {
        self.values[variable] != 0
    }

    /// Like [`Assignment::is_true`], where an absent variable is constantly false.
    pub fn is_true_or_absent(&self, variable: Option<VariableId>) -> bool {
        variable.is_some_and(|variable| self.is_true(variable))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
