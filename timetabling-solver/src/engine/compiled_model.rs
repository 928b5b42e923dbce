use std::fmt::Debug;
use std::fmt::Formatter;
use std::ops::ControlFlow;

use log::debug;
use pumpkin_core::ConstraintOperationError;
use pumpkin_core::DefaultBrancher;
use pumpkin_core::Solver;
use pumpkin_core::constraints;
use pumpkin_core::results::ProblemSolution;
use pumpkin_core::results::solution_iterator::IteratedSolution;
use pumpkin_core::variables::DomainId;

use super::RunLimit;
use crate::containers::KeyedVec;
use crate::model::Assignment;
use crate::model::Comparison;
use crate::model::ConstraintKind;
use crate::model::ConstraintModel;
use crate::model::ConstraintOrigin;
use crate::model::ModelConstraint;
use crate::model::VariableId;

/// How an enumeration run over a [`CompiledModel`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome<Break> {
    /// Every solution has been found (possibly none).
    Exhausted,
    /// The [`RunLimit`] stopped the search.
    Terminated,
    /// The solution callback asked to stop.
    Broken(Break),
}

/// A [`ConstraintModel`] loaded into the solver.
pub struct CompiledModel {
    solver: Solver,
    brancher: DefaultBrancher,
    variables: KeyedVec<VariableId, DomainId>,
    /// The first constraint which was found to be violated while it was posted.
    root_conflict: Option<ConstraintOrigin>,
    solver_calls: u64,
}

impl Debug for CompiledModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledModel")
            .field("num_variables", &self.variables.len())
            .field("root_conflict", &self.root_conflict)
            .field("solver_calls", &self.solver_calls)
            .finish()
    }
}

impl CompiledModel {
    /// Create the solver variables and post every constraint of `model`.
    ///
    /// Posting stops at the first constraint which is violated at the root; the model is then
    /// infeasible and [`CompiledModel::root_conflict`] names that constraint.
    pub fn compile(model: &ConstraintModel) -> CompiledModel {
        let mut solver = Solver::default();

        let variables = model
            .variables()
            .map(|(_, domain)| {
                solver.new_named_bounded_integer(
                    domain.lower_bound,
                    domain.upper_bound,
                    domain.name.clone(),
                )
            })
            .collect::<Vec<_>>();
        let variables = KeyedVec::from(variables);

        let mut root_conflict = None;
        for constraint in model.constraints() {
            if post(&mut solver, &variables, constraint).is_err() {
                debug!("Posting the {} failed at the root", constraint.origin);
                root_conflict = Some(constraint.origin.clone());
                break;
            }
        }

        debug!(
            "Posted {} variables and {} constraints to the solver",
            variables.len(),
            model.num_constraints()
        );

        let brancher = solver.default_brancher();

        CompiledModel {
            solver,
            brancher,
            variables,
            root_conflict,
            solver_calls: 0,
        }
    }

    /// The constraint that made the model infeasible before any search, if there is one.
    pub fn root_conflict(&self) -> Option<&ConstraintOrigin> {
        self.root_conflict.as_ref()
    }

    /// The number of times the solver has been asked for a next solution.
    pub fn solver_calls(&self) -> u64 {
        self.solver_calls
    }

    /// Write the search statistics of the solver (nodes, failures, propagations, ...) through the
    /// statistic logger of `pumpkin-core` and close the block of statistics.
    pub fn log_statistics(&self) {
        self.solver.log_statistics(Some(&self.brancher), false);
    }

    /// Enumerate the solutions of the model in the order the solver finds them.
    ///
    /// `on_solution` is invoked once per solution, synchronously and in order; returning
    /// [`ControlFlow::Break`] ends the enumeration.
    pub fn enumerate<Break>(
        &mut self,
        limit: &mut RunLimit,
        mut on_solution: impl FnMut(&Assignment) -> ControlFlow<Break>,
    ) -> SearchOutcome<Break> {
        if self.root_conflict.is_some() {
            return SearchOutcome::Exhausted;
        }

        let mut solution_iterator = self
            .solver
            .get_solution_iterator(&mut self.brancher, limit);

        loop {
            self.solver_calls += 1;

            match solution_iterator.next_solution() {
                IteratedSolution::Solution(solution, ..) => {
                    let assignment = Assignment::new(
                        self.variables
                            .iter()
                            .map(|&domain| solution.get_integer_value(domain))
                            .collect(),
                    );

                    if let ControlFlow::Break(value) = on_solution(&assignment) {
                        return SearchOutcome::Broken(value);
                    }
                }
                IteratedSolution::Finished | IteratedSolution::Unsatisfiable => {
                    return SearchOutcome::Exhausted;
                }
                IteratedSolution::Unknown => return SearchOutcome::Terminated,
            }
        }
    }
}

fn post(
    solver: &mut Solver,
    variables: &KeyedVec<VariableId, DomainId>,
    constraint: &ModelConstraint,
) -> Result<(), ConstraintOperationError> {
    let constraint_tag = solver.new_constraint_tag();

    match &constraint.kind {
        ConstraintKind::Linear {
            terms,
            comparison,
            rhs,
        } => {
            if terms.is_empty() {
                // Only constraints over nothing which cannot hold are kept in the model.
                return Err(ConstraintOperationError::InfeasibleState);
            }

            let terms = terms
                .iter()
                .map(|&variable| variables[variable])
                .collect::<Vec<_>>();

            match comparison {
                Comparison::Equal => solver
                    .add_constraint(constraints::equals(terms, *rhs, constraint_tag))
                    .post(),
                Comparison::LessThanOrEqual => solver
                    .add_constraint(constraints::less_than_or_equals(
                        terms,
                        *rhs,
                        constraint_tag,
                    ))
                    .post(),
                Comparison::GreaterThanOrEqual => solver
                    .add_constraint(constraints::greater_than_or_equals(
                        terms,
                        *rhs,
                        constraint_tag,
                    ))
                    .post(),
            }
        }
        ConstraintKind::Maximum { array, rhs } => {
            let array = array
                .iter()
                .map(|&variable| variables[variable])
                .collect::<Vec<_>>();

            solver
                .add_constraint(constraints::maximum(array, variables[*rhs], constraint_tag))
                .post()
        }
    }
}
