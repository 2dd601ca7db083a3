// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the linear-programming seam of the library: a plain
//! model of a linear program (columns with bounds, sparse rows, one
//! objective direction) and the `LpSolver` trait through which every width
//! computation consumes a solver as a black box.

use crate::{Error, Result};

/// The sense of the objective function of a linear program.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LpDirection {
    /// Minimize the objective
    Minimize,
    /// Maximize the objective
    Maximize,
}

/// The comparison operator of one linear constraint.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LpOp {
    /// The row value must be less than or equal to the right-hand side
    Le,
    /// The row value must be greater than or equal to the right-hand side
    Ge,
    /// The row value must equal the right-hand side
    Eq,
}

/// One decision variable of a linear program: its objective coefficient and
/// its lower and upper bounds (either of which may be infinite).
#[derive(Debug, Clone, Copy)]
pub struct LpColumn {
    /// The coefficient of this variable in the objective function
    pub objective: f64,
    /// The lower bound on the variable value
    pub lower: f64,
    /// The upper bound on the variable value
    pub upper: f64,
}

/// One linear constraint, stored sparsely as (column index, coefficient)
/// pairs along with a comparison operator and a right-hand side.
#[derive(Debug, Clone)]
pub struct LpRow {
    /// The nonzero coefficients of the row
    pub coefs: Vec<(usize, f64)>,
    /// The comparison operator relating the row value to the rhs
    pub op: LpOp,
    /// The right-hand side of the constraint
    pub rhs: f64,
}

/// A complete linear program, built column by column and row by row by the
/// width computations and handed over to an `LpSolver` in one piece. The
/// model is deliberately dumb: it performs no simplification, no scaling,
/// and no validation beyond what the type system enforces.
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// The sense of the objective
    pub direction: LpDirection,
    /// The decision variables, in column order
    pub columns: Vec<LpColumn>,
    /// The constraints
    pub rows: Vec<LpRow>,
}

impl LpProblem {
    /// Creates an empty program optimizing in the given direction.
    pub fn new(direction: LpDirection) -> Self {
        LpProblem { direction, columns: vec![], rows: vec![] }
    }
    /// Appends a decision variable and returns its column index.
    pub fn add_column(&mut self, objective: f64, lower: f64, upper: f64) -> usize {
        self.columns.push(LpColumn { objective, lower, upper });
        self.columns.len() - 1
    }
    /// Appends a constraint row.
    pub fn add_row(&mut self, coefs: Vec<(usize, f64)>, op: LpOp, rhs: f64) {
        self.rows.push(LpRow { coefs, op, rhs });
    }
    /// Returns the number of decision variables of the program.
    pub fn nb_columns(&self) -> usize {
        self.columns.len()
    }
}

/// The status a solver reports after working on a linear program. The width
/// computations only ever accept `Optimal`; every other status is turned
/// into an error by `objective()`.
#[derive(Debug, Clone, PartialEq)]
pub enum LpOutcome {
    /// The solver proved optimality and reports the objective value
    Optimal {
        /// The optimal objective value
        objective: f64,
    },
    /// The program admits no feasible point
    Infeasible,
    /// The objective is unbounded in the optimization direction
    Unbounded,
    /// Any other termination a backend may report
    Other(String),
}

impl LpOutcome {
    /// Returns the optimal objective value, or a solver error when the
    /// termination status was anything else.
    pub fn objective(self) -> Result<f64> {
        match self {
            LpOutcome::Optimal { objective } => Ok(objective),
            LpOutcome::Infeasible => Err(Error::Solver("infeasible".to_string())),
            LpOutcome::Unbounded => Err(Error::Solver("unbounded".to_string())),
            LpOutcome::Other(status) => Err(Error::Solver(status)),
        }
    }
}

/// This trait abstracts the linear solver consumed by the width
/// computations. Implementations receive one fully-built `LpProblem`,
/// solve it, and report how the solve terminated. A fresh backend instance
/// is conceptually acquired per call: no solver state may survive across
/// invocations, and implementations must be deterministic in their input.
pub trait LpSolver {
    /// Solves the given program and reports the termination status.
    fn solve(&self, problem: &LpProblem) -> LpOutcome;
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_lp_model {
    use super::*;

    #[test]
    fn add_column_returns_consecutive_indexes() {
        let mut lp = LpProblem::new(LpDirection::Minimize);
        assert_eq!(lp.add_column(1.0, 0.0, f64::INFINITY), 0);
        assert_eq!(lp.add_column(2.0, 0.0, 1.0), 1);
        assert_eq!(lp.nb_columns(), 2);
    }

    #[test]
    fn the_objective_of_an_optimal_outcome_is_its_value() {
        let outcome = LpOutcome::Optimal { objective: 1.5 };
        assert_eq!(outcome.objective().unwrap(), 1.5);
    }

    #[test]
    fn a_non_optimal_outcome_objective_is_a_solver_error() {
        assert!(matches!(
            LpOutcome::Infeasible.objective(),
            Err(crate::Error::Solver(_))
        ));
        assert!(matches!(
            LpOutcome::Unbounded.objective(),
            Err(crate::Error::Solver(_))
        ));
        assert!(matches!(
            LpOutcome::Other("interrupted".to_string()).objective(),
            Err(crate::Error::Solver(_))
        ));
    }
}
