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

//! This module provides the tree-decomposition enumerator. Every vertex
//! order induces one decomposition through the classical
//! variable-elimination procedure; running the procedure over all the
//! permutations of the vertex set and pruning the dominated outcomes yields
//! the non-redundant decompositions on which the width measures minimize.
//! The cost is factorial in the vertex count, and it is the dominating cost
//! of the whole library from eight or so vertices up.

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::VarSet;

// ----------------------------------------------------------------------------
// --- TREE DECOMPOSITION -----------------------------------------------------
// ----------------------------------------------------------------------------
/// A tree decomposition, reduced to what the width measures need: the
/// unordered collection of its bags. Decompositions produced by the
/// enumerator satisfy the running-intersection and edge-covering conditions
/// by construction (they come out of an elimination schedule); the type
/// itself does not enforce them.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Td {
    /// The bags, kept sorted so that equal bag collections compare equal
    bags: Vec<VarSet>,
}

impl Td {
    /// Creates a decomposition from a collection of bags. The bags are
    /// brought to canonical form: sorted, duplicates collapsed.
    pub fn from_bags(bags: Vec<VarSet>) -> Td {
        let mut bags = bags;
        bags.sort_unstable();
        bags.dedup();
        Td { bags }
    }
    /// Returns the bags of this decomposition, in canonical order.
    pub fn bags(&self) -> &[VarSet] {
        &self.bags
    }
    /// Returns the number of bags of this decomposition.
    pub fn nb_bags(&self) -> usize {
        self.bags.len()
    }
    /// Returns true iff the given edge fits entirely inside some bag.
    pub fn covers(&self, edge: VarSet) -> bool {
        self.bags.iter().any(|&b| edge.is_subset_of(b))
    }
    /// Returns true iff this decomposition is subsumed by `other`: every
    /// bag of `other` fits inside some bag of this one. A subsumed
    /// decomposition is at least as wide as the one subsuming it, so it
    /// can be discarded without affecting any minimization over bags.
    pub(crate) fn subsumed_by(&self, other: &Td) -> bool {
        other.bags.iter().all(|&b2| self.bags.iter().any(|&b1| b2.is_subset_of(b1)))
    }
}

// ----------------------------------------------------------------------------
// --- ENUMERATION ------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Runs the variable-elimination procedure on the given edge set with the
/// given vertex order and returns the resulting bag collection in
/// canonical (sorted) form.
fn eliminate(edges: &[VarSet], order: &[usize]) -> Vec<VarSet> {
    let mut work: Vec<VarSet> = vec![];
    for &e in edges {
        if !work.contains(&e) {
            work.push(e);
        }
    }

    let mut bags: Vec<VarSet> = vec![];
    for &v in order {
        let bag = work
            .iter()
            .filter(|e| e.contains(v))
            .fold(VarSet::empty(), |acc, &e| acc.union(e));
        if bag.is_empty() {
            continue;
        }
        if !bags.contains(&bag) {
            bags.push(bag);
        }
        // every edge absorbed by the bag is gone; what remains of the bag
        // once its private vertices (v included) are dropped goes back in
        work.retain(|e| !e.is_subset_of(bag));
        let rest = work.iter().fold(VarSet::empty(), |acc, &e| acc.union(e));
        let reduced = bag.inter(rest);
        if !work.contains(&reduced) {
            work.push(reduced);
        }
    }

    bags.sort_unstable();
    bags
}

/// Enumerates the non-redundant tree decompositions of the given edge set:
/// one candidate per permutation of the vertices occurring in the edges,
/// distinct candidates collected in first-appearance order, dominated
/// candidates pruned. The outcome is deterministic in the input ordering.
pub fn enumerate_tds(edges: &[VarSet]) -> Vec<Td> {
    let universe = edges.iter().fold(VarSet::empty(), |acc, &e| acc.union(e));
    let verts = universe.iter().collect::<Vec<_>>();

    let mut seen: FxHashSet<Vec<VarSet>> = FxHashSet::default();
    let mut tds: Vec<Td> = vec![];
    for order in verts.iter().copied().permutations(verts.len()) {
        let bags = eliminate(edges, &order);
        if seen.insert(bags.clone()) {
            tds.push(Td { bags });
        }
    }
    tracing::debug!(candidates = tds.len(), "collected distinct elimination outcomes");

    let tds = prune_subsumed(tds);
    tracing::debug!(kept = tds.len(), "pruned subsumed tree decompositions");
    tds
}

/// Removes every decomposition subsumed by another one. A decomposition is
/// dropped when some other one subsumes it strictly, or subsumes it
/// mutually while sitting at a lower index (so of two equivalent
/// decompositions the first one wins).
fn prune_subsumed(tds: Vec<Td>) -> Vec<Td> {
    let dropped = |i: usize| {
        tds.iter().enumerate().any(|(j, other)| {
            j != i && tds[i].subsumed_by(other) && (!other.subsumed_by(&tds[i]) || j < i)
        })
    };
    let keep = (0..tds.len()).map(|i| !dropped(i)).collect::<Vec<_>>();
    tds.into_iter()
        .zip(keep)
        .filter_map(|(td, keep)| keep.then_some(td))
        .collect()
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_elimination {
    use super::*;

    fn set(bits: u64) -> VarSet {
        VarSet::from_bits(bits)
    }

    #[test]
    fn a_single_edge_yields_the_single_bag_decomposition() {
        let tds = enumerate_tds(&[set(0b111)]);
        assert_eq!(tds.len(), 1);
        assert_eq!(tds[0].bags(), &[set(0b111)]);
    }

    #[test]
    fn the_triangle_collapses_to_one_full_bag() {
        let tds = enumerate_tds(&[set(0b011), set(0b110), set(0b101)]);
        assert_eq!(tds.len(), 1);
        assert_eq!(tds[0].bags(), &[set(0b111)]);
    }

    #[test]
    fn the_two_edge_path_keeps_its_edges_as_bags() {
        // eliminating the middle vertex first merges everything into one
        // full bag, which the path decomposition then subsumes away
        let tds = enumerate_tds(&[set(0b011), set(0b110)]);
        assert_eq!(tds.len(), 1);
        assert_eq!(tds[0].bags(), &[set(0b011), set(0b110)]);
    }

    #[test]
    fn the_four_cycle_has_its_two_triangulations() {
        let edges = [set(0b0011), set(0b0110), set(0b1100), set(0b1001)];
        let tds = enumerate_tds(&edges);
        assert_eq!(tds.len(), 2);
        for td in &tds {
            assert_eq!(td.nb_bags(), 2);
            for &e in &edges {
                assert!(td.covers(e));
            }
        }
        let mut bags = tds.iter().flat_map(|td| td.bags().iter().copied()).collect::<Vec<_>>();
        bags.sort_unstable();
        assert_eq!(bags, vec![set(0b0111), set(0b1011), set(0b1101), set(0b1110)]);
    }

    #[test]
    fn enumeration_is_invariant_in_the_edge_input_order() {
        let edges = [set(0b0011), set(0b0110), set(0b1100), set(0b1001)];
        let mut reversed = edges;
        reversed.reverse();

        let a = enumerate_tds(&edges).into_iter().collect::<FxHashSet<_>>();
        let b = enumerate_tds(&reversed).into_iter().collect::<FxHashSet<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn no_edges_yield_the_empty_decomposition() {
        let tds = enumerate_tds(&[]);
        assert_eq!(tds.len(), 1);
        assert_eq!(tds[0].nb_bags(), 0);
    }

    #[test]
    fn subsumption_keeps_the_decomposition_with_the_smaller_bags() {
        let fine = Td::from_bags(vec![set(0b011), set(0b110)]);
        let coarse = Td::from_bags(vec![set(0b111)]);
        // the coarse one is subsumed: each of the fine bags fits in it
        assert!(coarse.subsumed_by(&fine));
        assert!(!fine.subsumed_by(&coarse));
    }

    #[test]
    fn duplicate_edges_do_not_duplicate_bags() {
        let tds = enumerate_tds(&[set(0b11), set(0b11)]);
        assert_eq!(tds.len(), 1);
        assert_eq!(tds[0].bags(), &[set(0b11)]);
    }
}
