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

//! This module provides the minimum weighted fractional edge cover and,
//! built on top of it, the fractional hypertree width: the smallest, over
//! the tree decompositions, of the largest edge-cover value of a bag.

use ordered_float::OrderedFloat;

use crate::{
    Hypergraph, LpDirection, LpOp, LpProblem, LpSolver, Result, SimplexSolver, VarSet, Vertex,
    TOLERANCE,
};

impl<V: Vertex> Hypergraph<V> {
    /// Returns the minimum weighted fractional edge cover of the whole
    /// vertex set, solved with the bundled backend.
    pub fn fractional_edge_cover(&self) -> Result<f64> {
        self.fractional_edge_cover_with(&SimplexSolver)
    }

    /// Returns the minimum weighted fractional edge cover of the whole
    /// vertex set, solved with the given backend.
    pub fn fractional_edge_cover_with(&self, solver: &impl LpSolver) -> Result<f64> {
        self.cover_value(self.all_vars(), solver)
    }

    /// Returns the minimum weighted fractional edge cover of the given
    /// target vertices, solved with the bundled backend.
    pub fn fractional_edge_cover_of(&self, target: impl IntoIterator<Item = V>) -> Result<f64> {
        self.fractional_edge_cover_of_with(target, &SimplexSolver)
    }

    /// Returns the minimum weighted fractional edge cover of the given
    /// target vertices, solved with the given backend.
    pub fn fractional_edge_cover_of_with(
        &self,
        target: impl IntoIterator<Item = V>,
        solver: &impl LpSolver,
    ) -> Result<f64> {
        let target = self.encode(target)?;
        self.cover_value(target, solver)
    }

    /// Builds and solves the edge-cover program of one target set: one
    /// nonnegative variable per edge, minimize the weighted sum, and for
    /// each target vertex require the variables of its incident edges to
    /// add up to at least one. The program is always feasible because the
    /// edges cover every vertex of the hypergraph.
    pub(crate) fn cover_value(&self, target: VarSet, solver: &impl LpSolver) -> Result<f64> {
        if target.is_empty() {
            return Ok(0.0);
        }
        let mut lp = LpProblem::new(LpDirection::Minimize);
        for &w in self.weights() {
            lp.add_column(w, 0.0, f64::INFINITY);
        }
        for v in target.iter() {
            let coefs = self.var_edges(v).iter().map(|&j| (j, 1.0)).collect();
            lp.add_row(coefs, LpOp::Ge, 1.0);
        }
        solver.solve(&lp).objective()
    }

    /// Returns the fractional hypertree width of the hypergraph, solved
    /// with the bundled backend.
    pub fn fractional_hypertree_width(&self) -> Result<f64> {
        self.fractional_hypertree_width_with(&SimplexSolver)
    }

    /// Returns the fractional hypertree width of the hypergraph: the
    /// smallest, over its tree decompositions, of the largest edge-cover
    /// value of a bag. Among decompositions whose widths agree up to
    /// [`TOLERANCE`], the one with fewer bags is preferred; the outcome is
    /// fully deterministic.
    pub fn fractional_hypertree_width_with(&self, solver: &impl LpSolver) -> Result<f64> {
        let mut best = f64::INFINITY;
        let mut best_bags = usize::MAX;
        for (i, td) in self.tds().iter().enumerate() {
            let mut covers = Vec::with_capacity(td.nb_bags());
            for &bag in td.bags() {
                covers.push(self.cover_value(bag, solver)?);
            }
            let width = covers
                .into_iter()
                .map(OrderedFloat)
                .max()
                .map(|w| w.0)
                .unwrap_or(0.0);
            tracing::debug!(td = i, width, "evaluated one tree decomposition");

            if width < best - TOLERANCE
                || ((width - best).abs() <= TOLERANCE && td.nb_bags() < best_bags)
            {
                best = width;
                best_bags = td.nb_bags();
            }
        }
        tracing::info!(width = best, "fractional hypertree width computed");
        Ok(best)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
