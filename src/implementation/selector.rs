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

//! This module provides the bag-selector enumerator. A selector picks one
//! bag from every tree decomposition; the submodular width maximizes, over
//! the selectors, an objective that is a minimum over the selected bags.
//! Two distinct prunes keep the cross product tractable, and both are
//! load-bearing: the bag-level filter keeps only the minimal bags inside
//! one selector (a strict superset can only weaken the minimum), and the
//! selector-level subsumption discards selectors whose objective cannot
//! exceed that of a surviving one. Note that the bag containment in the
//! selector-level relation is the *reverse* of the one used between tree
//! decompositions: there the width is a maximum over bags, here the
//! objective is a minimum.

use fxhash::FxHashSet;

use crate::{Td, VarSet};

/// A selector, reduced to the set of bags it picked (the assignment from
/// decompositions to bags is irrelevant once the picking is done). Bags
/// are kept sorted so that equal selections compare equal.
pub(crate) type Selector = Vec<VarSet>;

/// Enumerates the selectors of the given decomposition list: one bag per
/// decomposition, bag-filtered, modulo selector-level subsumption. The
/// construction is incremental (extend with the bags of one decomposition,
/// then prune, and only then move to the next decomposition) because the
/// unpruned cross product grows combinatorially.
pub(crate) fn enumerate_selectors(tds: &[Td]) -> Vec<Selector> {
    let mut selectors: Vec<Selector> = match tds.first() {
        None => return vec![],
        Some(td) => td.bags().iter().map(|&b| vec![b]).collect(),
    };
    for td in &tds[1..] {
        let mut seen: FxHashSet<Selector> = FxHashSet::default();
        let mut next: Vec<Selector> = vec![];
        for selector in &selectors {
            for &bag in td.bags() {
                let mut candidate = selector.clone();
                candidate.push(bag);
                let candidate = bag_filter(candidate);
                if seen.insert(candidate.clone()) {
                    next.push(candidate);
                }
            }
        }
        selectors = prune_subsumed(next);
        tracing::debug!(selectors = selectors.len(), "extended selectors with one more td");
    }
    selectors
}

/// Keeps only the minimal bags of one selector: a bag is dropped when a
/// distinct bag at another position is contained in it, exact duplicates
/// keeping their first occurrence. The result is sorted to canonical form.
fn bag_filter(bags: Vec<VarSet>) -> Selector {
    let mut kept = Vec::with_capacity(bags.len());
    for (i, &b) in bags.iter().enumerate() {
        let dominated = bags
            .iter()
            .enumerate()
            .any(|(j, &o)| j != i && o.is_subset_of(b) && (o != b || j < i));
        if !dominated {
            kept.push(b);
        }
    }
    kept.sort_unstable();
    kept
}

/// Returns true iff `this` is subsumed by `other`: every bag of `other`
/// contains some bag of `this`. The minimum over the bags of `this` is
/// then no larger than the one over `other`, so `this` cannot win the
/// outer maximization.
fn subsumed_by(this: &[VarSet], other: &[VarSet]) -> bool {
    other.iter().all(|&b2| this.iter().any(|&b1| b1.is_subset_of(b2)))
}

/// Removes every selector subsumed by another one: dropped when some other
/// selector subsumes it strictly, or subsumes it mutually while sitting at
/// a lower index.
fn prune_subsumed(selectors: Vec<Selector>) -> Vec<Selector> {
    let dropped = |i: usize| {
        selectors.iter().enumerate().any(|(j, other)| {
            j != i && subsumed_by(&selectors[i], other) && (!subsumed_by(other, &selectors[i]) || j < i)
        })
    };
    let keep = (0..selectors.len()).map(|i| !dropped(i)).collect::<Vec<_>>();
    selectors
        .into_iter()
        .zip(keep)
        .filter_map(|(s, keep)| keep.then_some(s))
        .collect()
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_selector {
    use super::*;

    fn set(bits: u64) -> VarSet {
        VarSet::from_bits(bits)
    }

    #[test]
    fn the_bag_filter_drops_strict_supersets() {
        let filtered = bag_filter(vec![set(0b111), set(0b010)]);
        assert_eq!(filtered, vec![set(0b010)]);
    }

    #[test]
    fn the_bag_filter_collapses_duplicates() {
        let filtered = bag_filter(vec![set(0b011), set(0b011)]);
        assert_eq!(filtered, vec![set(0b011)]);
    }

    #[test]
    fn the_bag_filter_keeps_incomparable_bags() {
        let filtered = bag_filter(vec![set(0b011), set(0b110)]);
        assert_eq!(filtered, vec![set(0b011), set(0b110)]);
    }

    #[test]
    fn selector_subsumption_prefers_the_smaller_bags() {
        // {01} beats {012}: its minimum can only be smaller
        let small = vec![set(0b011)];
        let large = vec![set(0b111)];
        assert!(subsumed_by(&small, &large));
        assert!(!subsumed_by(&large, &small));
    }

    #[test]
    fn pruning_keeps_the_first_of_two_equivalent_selectors() {
        let a = vec![set(0b011)];
        let b = vec![set(0b011)];
        let pruned = prune_subsumed(vec![a.clone(), b]);
        assert_eq!(pruned, vec![a]);
    }

    #[test]
    fn one_decomposition_yields_one_singleton_selector_per_bag() {
        let td = Td::from_bags(vec![set(0b011), set(0b110)]);
        let selectors = enumerate_selectors(&[td]);
        assert_eq!(selectors, vec![vec![set(0b011)], vec![set(0b110)]]);
    }

    #[test]
    fn no_decompositions_yield_no_selectors() {
        assert!(enumerate_selectors(&[]).is_empty());
    }

    #[test]
    fn extension_takes_one_bag_from_each_decomposition() {
        let td1 = Td::from_bags(vec![set(0b0011), set(0b1100)]);
        let td2 = Td::from_bags(vec![set(0b0101), set(0b1010)]);
        let selectors = enumerate_selectors(&[td1, td2]);
        // all four pairings are incomparable, none is pruned
        assert_eq!(selectors.len(), 4);
        for s in &selectors {
            assert_eq!(s.len(), 2);
        }
    }

    #[test]
    fn extension_filters_the_bags_inside_each_selector() {
        let td1 = Td::from_bags(vec![set(0b011)]);
        let td2 = Td::from_bags(vec![set(0b111), set(0b100)]);
        let selectors = enumerate_selectors(&[td1, td2]);
        // picking {012} from the second td collapses onto {01} alone, and
        // that selector subsumes the {01},{2} one
        assert_eq!(selectors, vec![vec![set(0b011)]]);
    }
}
