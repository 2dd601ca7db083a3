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

//! This module provides the bundled linear-solver backend: a thin adapter
//! over the pure-Rust `minilp` simplex implementation. One `minilp` problem
//! is built, solved and dropped per call; no state survives in between.

use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

use crate::{LpDirection, LpOp, LpOutcome, LpProblem, LpSolver};

/// _This is the default solver backend._ It hands the program over to the
/// `minilp` simplex implementation and maps the termination statuses onto
/// `LpOutcome`. The programs built by this crate stay small and well
/// scaled, which is squarely the territory where a dense-ish textbook
/// simplex shines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexSolver;

impl LpSolver for SimplexSolver {
    fn solve(&self, problem: &LpProblem) -> LpOutcome {
        let direction = match problem.direction {
            LpDirection::Minimize => OptimizationDirection::Minimize,
            LpDirection::Maximize => OptimizationDirection::Maximize,
        };
        let mut model = Problem::new(direction);
        let vars = problem
            .columns
            .iter()
            .map(|c| model.add_var(c.objective, (c.lower, c.upper)))
            .collect::<Vec<_>>();
        for row in &problem.rows {
            let mut expr = LinearExpr::empty();
            for &(col, coef) in &row.coefs {
                expr.add(vars[col], coef);
            }
            let op = match row.op {
                LpOp::Le => ComparisonOp::Le,
                LpOp::Ge => ComparisonOp::Ge,
                LpOp::Eq => ComparisonOp::Eq,
            };
            model.add_constraint(expr, op, row.rhs);
        }
        match model.solve() {
            Ok(solution) => LpOutcome::Optimal { objective: solution.objective() },
            Err(minilp::Error::Infeasible) => LpOutcome::Infeasible,
            Err(minilp::Error::Unbounded) => LpOutcome::Unbounded,
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
