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

//! This module provides the submodular width. For every bag selector, an
//! entropic linear program is built over the whole Boolean lattice of
//! vertex subsets: one variable h[U] per subset U (the column index *is*
//! the integer encoding of U) plus one auxiliary variable standing for the
//! minimum over the selected bags, which the program maximizes. The
//! monotonicity and submodularity families are stated in their elemental
//! form, the standard minimal basis implying every monotonicity and
//! submodularity inequality on the lattice; that keeps the row count at
//! O(n² 2^n) instead of 4^n. The submodular width is the largest optimum
//! across the selectors.

use crate::{
    Error, Fd, Hypergraph, LpDirection, LpOp, LpProblem, LpSolver, Result, SimplexSolver, VarSet,
    Vertex, MAX_VARS,
};

use super::selector::enumerate_selectors;

impl<V: Vertex> Hypergraph<V> {
    /// Returns the submodular width of the hypergraph under the given
    /// functional dependencies, solved with the bundled backend.
    pub fn submodular_width(&self, fds: &[Fd<V>]) -> Result<f64> {
        self.submodular_width_with(&SimplexSolver, fds)
    }

    /// Returns the submodular width of the hypergraph under the given
    /// functional dependencies, solved with the given backend. Every
    /// dependency must fit the hypergraph: its vertices must exist and its
    /// normalized right-hand side must be contained in some hyperedge;
    /// a violation aborts the computation before any program is built.
    pub fn submodular_width_with(&self, solver: &impl LpSolver, fds: &[Fd<V>]) -> Result<f64> {
        if self.nb_vars() >= MAX_VARS {
            return Err(Error::Config(format!(
                "the entropic program needs 2^n variables, n = {} is out of reach",
                self.nb_vars()
            )));
        }
        let fd_rows = self.fd_rows(fds)?;

        let selectors = enumerate_selectors(self.tds());
        tracing::info!(selectors = selectors.len(), "enumerated bag selectors");

        let mut best = 0.0_f64;
        for (i, selector) in selectors.iter().enumerate() {
            let bound = self.entropic_bound(selector, &fd_rows, solver)?;
            tracing::debug!(selector = i, bound, "solved one entropic program");
            best = best.max(bound);
        }
        tracing::info!(width = best, "submodular width computed");
        Ok(best)
    }

    /// Checks every dependency against the hypergraph and translates it to
    /// the pair of subsets its equality row relates. Dependencies whose
    /// normalized right-hand side equals the left-hand one would produce a
    /// vacuous row and are skipped.
    fn fd_rows(&self, fds: &[Fd<V>]) -> Result<Vec<(VarSet, VarSet)>> {
        let mut rows = vec![];
        for fd in fds {
            let x = self.encode(fd.lhs().iter().cloned())?;
            let y = self.encode(fd.rhs().iter().cloned())?;
            if !self.edges().iter().any(|&e| y.is_subset_of(e)) {
                return Err(Error::Config(format!(
                    "functional dependency {:?} -> {:?} does not fit inside any hyperedge",
                    fd.lhs(),
                    fd.rhs()
                )));
            }
            if x != y {
                rows.push((x, y));
            }
        }
        Ok(rows)
    }

    /// Builds and solves the entropic program of one selector.
    fn entropic_bound(
        &self,
        bags: &[VarSet],
        fds: &[(VarSet, VarSet)],
        solver: &impl LpSolver,
    ) -> Result<f64> {
        let n = self.nb_vars();
        let full = VarSet::full(n);
        let col = |u: VarSet| u.bits() as usize;

        // one column per subset, indexed by the subset encoding; h of the
        // empty set is pinned to zero through its bounds
        let mut lp = LpProblem::new(LpDirection::Maximize);
        for z in 0..(1_u64 << n) {
            let upper = if z == 0 { 0.0 } else { f64::INFINITY };
            lp.add_column(0.0, 0.0, upper);
        }
        let w = lp.add_column(1.0, 0.0, f64::INFINITY);

        // elemental monotonicity: the full set dominates each of its facets
        for v in full.iter() {
            lp.add_row(
                vec![(col(full), 1.0), (col(full.without(v)), -1.0)],
                LpOp::Ge,
                0.0,
            );
        }
        // elemental submodularity: for every pair {y, z} and every set X
        // avoiding both, h[X∪{y}] + h[X∪{z}] >= h[X] + h[X∪{y,z}]
        for y in 0..n {
            for z in (y + 1)..n {
                let rest = full.without(y).without(z);
                for x in rest.subsets() {
                    lp.add_row(
                        vec![
                            (col(x.with(y)), 1.0),
                            (col(x.with(z)), 1.0),
                            (col(x), -1.0),
                            (col(x.with(y).with(z)), -1.0),
                        ],
                        LpOp::Ge,
                        0.0,
                    );
                }
            }
        }
        // edge domination: an edge never holds more entropy than its weight
        for (j, &e) in self.edges().iter().enumerate() {
            lp.add_row(vec![(col(e), 1.0)], LpOp::Le, self.weights()[j]);
        }
        // functional dependencies: the determined set adds nothing
        for &(x, y) in fds {
            lp.add_row(vec![(col(y), 1.0), (col(x), -1.0)], LpOp::Eq, 0.0);
        }
        // the objective value is a lower bound on every selected bag
        for &b in bags.iter() {
            lp.add_row(vec![(col(b), 1.0), (w, -1.0)], LpOp::Ge, 0.0);
        }

        solver.solve(&lp).objective()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_subw {
    use crate::*;

    fn triangle() -> Hypergraph<u32> {
        Hypergraph::new(vec![1, 2, 3], vec![vec![1, 2], vec![2, 3], vec![3, 1]]).unwrap()
    }

    #[test]
    fn the_submodular_width_of_one_edge_is_its_weight() {
        let h = HypergraphBuilder::new(vec![1, 2], vec![vec![1, 2]])
            .weights(vec![2.0])
            .build()
            .unwrap();
        let width = h.submodular_width(&[]).unwrap();
        assert!((width - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn the_submodular_width_of_the_triangle_is_three_halves() {
        let width = triangle().submodular_width(&[]).unwrap();
        assert!((width - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn the_submodular_width_of_a_path_is_one() {
        let h = Hypergraph::new(vec![1, 2, 3], vec![vec![1, 2], vec![2, 3]]).unwrap();
        let width = h.submodular_width(&[]).unwrap();
        assert!((width - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn a_dependency_inside_an_edge_can_only_help() {
        let with = triangle()
            .submodular_width(&[Fd::new(vec![1], vec![2]).unwrap()])
            .unwrap();
        let without = triangle().submodular_width(&[]).unwrap();
        assert!(with <= without + TOLERANCE);
    }

    #[test]
    fn a_dependency_outside_every_edge_is_a_config_error() {
        let h = Hypergraph::new(vec![1, 2, 3], vec![vec![1, 2], vec![2, 3]]).unwrap();
        let fd = Fd::new(vec![1], vec![3]).unwrap();
        assert!(matches!(h.submodular_width(&[fd]), Err(Error::Config(_))));
    }

    #[test]
    fn a_dependency_on_unknown_vertices_is_a_config_error() {
        let fd = Fd::new(vec![7], vec![8]).unwrap();
        assert!(matches!(triangle().submodular_width(&[fd]), Err(Error::Config(_))));
    }

    #[test]
    fn a_degenerate_dependency_is_accepted_and_changes_nothing() {
        // an empty right-hand side normalizes onto the left one: no row
        let fd = Fd::new(vec![1], Vec::<u32>::new()).unwrap();
        let with = triangle().submodular_width(&[fd]).unwrap();
        let without = triangle().submodular_width(&[]).unwrap();
        assert!((with - without).abs() < TOLERANCE);
    }

    #[test]
    fn the_empty_hypergraph_has_width_zero() {
        let h = Hypergraph::new(Vec::<u32>::new(), Vec::<Vec<u32>>::new()).unwrap();
        assert_eq!(h.submodular_width(&[]).unwrap(), 0.0);
        assert_eq!(h.fractional_hypertree_width().unwrap(), 0.0);
    }
}
