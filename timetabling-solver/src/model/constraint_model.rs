use std::fmt::Display;
use std::fmt::Formatter;

use log::debug;

use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// Identifies a decision variable of a [`ConstraintModel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(u32);

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId(index as u32)
    }
}

/// The integer interval a variable ranges over, together with a name used in diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDomain {
    pub lower_bound: i32,
    pub upper_bound: i32,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equal,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Comparison::Equal => write!(f, "=="),
            Comparison::LessThanOrEqual => write!(f, "<="),
            Comparison::GreaterThanOrEqual => write!(f, ">="),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstraintKind {
    /// `sum(terms) <comparison> rhs`, every term with coefficient one.
    Linear {
        terms: Vec<VariableId>,
        comparison: Comparison,
        rhs: i32,
    },
    /// `max(array) == rhs`.
    Maximum {
        array: Vec<VariableId>,
        rhs: VariableId,
    },
}

/// The family a constraint belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintClass {
    CurriculumCoverage,
    TeacherExclusivity,
    WorkloadCeiling,
    TeacherConsistency,
    ShiftCoverage,
    OneShiftPerDay,
    OffDayBounds,
    ShiftStaffing,
}

impl Display for ConstraintClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConstraintClass::CurriculumCoverage => "curriculum coverage",
            ConstraintClass::TeacherExclusivity => "teacher exclusivity",
            ConstraintClass::WorkloadCeiling => "workload ceiling",
            ConstraintClass::TeacherConsistency => "teacher consistency",
            ConstraintClass::ShiftCoverage => "shift coverage",
            ConstraintClass::OneShiftPerDay => "one shift per day",
            ConstraintClass::OffDayBounds => "off-day bounds",
            ConstraintClass::ShiftStaffing => "shift staffing",
        };

        write!(f, "{name}")
    }
}

/// Where a constraint comes from: its class and a description of the entity it constrains (e.g.
/// `course 1-A, subject Math`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintOrigin {
    pub class: ConstraintClass,
    pub entity: String,
}

impl Display for ConstraintOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} constraint for {}", self.class, self.entity)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelConstraint {
    pub kind: ConstraintKind,
    pub origin: ConstraintOrigin,
}

/// A solver-independent model: integer variables with interval domains and a list of linear and
/// maximum constraints over them.
///
/// The model is plain data. It is produced by the problem-specific builders and handed to
/// [`crate::engine::CompiledModel::compile`], which is the only place that talks to the solver.
#[derive(Clone, Debug, Default)]
pub struct ConstraintModel {
    variables: KeyedVec<VariableId, VariableDomain>,
    constraints: Vec<ModelConstraint>,
}

impl ConstraintModel {
    pub fn new() -> ConstraintModel {
        ConstraintModel::default()
    }

    /// Create a 0-1 variable.
    pub fn new_boolean(&mut self, name: impl Into<String>) -> VariableId {
        self.variables.push(VariableDomain {
            lower_bound: 0,
            upper_bound: 1,
            name: name.into(),
        })
    }

    /// Add the constraint `sum(terms) <comparison> rhs`.
    ///
    /// A constraint over no terms is a constant. If that constant holds nothing is added; if it
    /// does not hold the constraint is kept so that the model is infeasible by construction.
    pub fn add_linear(
        &mut self,
        terms: Vec<VariableId>,
        comparison: Comparison,
        rhs: i32,
        origin: ConstraintOrigin,
    ) {
        if terms.is_empty() {
            let holds = match comparison {
                Comparison::Equal => rhs == 0,
                Comparison::LessThanOrEqual => rhs >= 0,
                Comparison::GreaterThanOrEqual => rhs <= 0,
            };

            if holds {
                return;
            }
            debug!("Adding a constant constraint which cannot hold: {origin}");
        }

        self.constraints.push(ModelConstraint {
            kind: ConstraintKind::Linear {
                terms,
                comparison,
                rhs,
            },
            origin,
        });
    }

    /// Add the constraint `max(array) == rhs`.
    pub fn add_maximum(&mut self, array: Vec<VariableId>, rhs: VariableId, origin: ConstraintOrigin) {
        self.constraints.push(ModelConstraint {
            kind: ConstraintKind::Maximum { array, rhs },
            origin,
        });
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = (VariableId, &VariableDomain)> {
        self.variables.iter_with_keys()
    }

    pub fn domain(&self, variable: VariableId) -> &VariableDomain {
        &self.variables[variable]
    }

    pub fn constraints(&self) -> &[ModelConstraint] {
        &self.constraints
    }

    /// The number of constraints of every class present in the model.
    pub fn count_by_class(&self) -> HashMap<ConstraintClass, usize> {
        let mut counts = HashMap::default();
        for constraint in &self.constraints {
            *counts.entry(constraint.origin.class).or_insert(0) += 1;
        }
        counts
    }

    /// Log the size of the model per constraint class.
    pub fn log_summary(&self) {
        debug!(
            "Model has {} variables and {} constraints",
            self.num_variables(),
            self.num_constraints()
        );

        let mut counts = self.count_by_class().into_iter().collect::<Vec<_>>();
        counts.sort_unstable();
        for (class, count) in counts {
            debug!("  {class}: {count}");
        }
    }
}

/// Convert a count to a right-hand side. Counts above `i32::MAX` can never bind, so they are
/// clamped.
pub(crate) fn to_rhs(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(class: ConstraintClass) -> ConstraintOrigin {
        ConstraintOrigin {
            class,
            entity: "test".to_owned(),
        }
    }

    #[test]
    fn booleans_have_zero_one_domains() {
        let mut model = ConstraintModel::new();

        let x = model.new_boolean("x");

        assert_eq!(model.num_variables(), 1);
        assert_eq!(model.domain(x).lower_bound, 0);
        assert_eq!(model.domain(x).upper_bound, 1);
        assert_eq!(model.domain(x).name, "x");
    }

    #[test]
    fn satisfied_constant_constraints_are_dropped() {
        let mut model = ConstraintModel::new();

        model.add_linear(
            vec![],
            Comparison::LessThanOrEqual,
            1,
            origin(ConstraintClass::TeacherExclusivity),
        );
        model.add_linear(
            vec![],
            Comparison::Equal,
            0,
            origin(ConstraintClass::CurriculumCoverage),
        );

        assert_eq!(model.num_constraints(), 0);
    }

    #[test]
    fn violated_constant_constraints_are_kept() {
        let mut model = ConstraintModel::new();

        model.add_linear(
            vec![],
            Comparison::Equal,
            2,
            origin(ConstraintClass::CurriculumCoverage),
        );

        assert_eq!(model.num_constraints(), 1);
    }

    #[test]
    fn constraints_are_counted_per_class() {
        let mut model = ConstraintModel::new();
        let x = model.new_boolean("x");
        let y = model.new_boolean("y");
        let any = model.new_boolean("any");

        model.add_linear(
            vec![x, y],
            Comparison::LessThanOrEqual,
            1,
            origin(ConstraintClass::TeacherExclusivity),
        );
        model.add_linear(
            vec![x],
            Comparison::LessThanOrEqual,
            1,
            origin(ConstraintClass::TeacherExclusivity),
        );
        model.add_maximum(vec![x, y], any, origin(ConstraintClass::TeacherConsistency));

        let counts = model.count_by_class();
        assert_eq!(counts[&ConstraintClass::TeacherExclusivity], 2);
        assert_eq!(counts[&ConstraintClass::TeacherConsistency], 1);
        assert_eq!(counts.get(&ConstraintClass::WorkloadCeiling), None);
    }

    #[test]
    fn huge_counts_are_clamped() {
        assert_eq!(to_rhs(u32::MAX), i32::MAX);
        assert_eq!(to_rhs(18), 18);
    }
}
