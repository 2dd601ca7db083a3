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

//! This module defines the most basic data types that are used throughout all
//! the code of our library: the dense vertex-subset representation and the
//! numeric tolerance used when comparing width values.

use std::fmt::Debug;
use std::hash::Hash;

/// The absolute tolerance used whenever two width values are compared.
/// Width equalities everywhere in this crate hold up to this constant.
pub const TOLERANCE: f64 = 1e-6;

/// The maximum number of vertices a hypergraph may have. This is the
/// capacity of one machine word; the algorithms in this crate are factorial
/// or exponential in the vertex count, so the practical ceiling sits far
/// below this hard one.
pub const MAX_VARS: usize = 64;

/// This trait groups the bounds a caller-supplied vertex identifier must
/// satisfy. The library never interprets a vertex beyond equality, hashing,
/// ordering and debug printing. It is automatically implemented for any
/// conforming type (small integers, chars, strings, ...).
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}
impl<T: Clone + Eq + Hash + Ord + Debug> Vertex for T {}

// ----------------------------------------------------------------------------
// --- VARSET -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A set of vertices, identified by their dense indexes in a hypergraph.
///
/// The representation is a single machine word whose bit `i` is set iff the
/// vertex with index `i` belongs to the set. That word *is* the canonical
/// integer encoding of the subset: `bits()` and `from_bits()` realize the
/// bijection between the subsets of `{0, .., n-1}` and `{0, .., 2^n - 1}`,
/// and the entropic linear programs index their decision variables with it
/// directly.
///
/// # Example
/// ```
/// # use subwidth::VarSet;
/// let mut set = VarSet::empty();
/// set.add(0);
/// set.add(2);
/// assert!(set.contains(0));
/// assert!(!set.contains(1));
/// assert_eq!(set.bits(), 0b101);
/// assert_eq!(set, VarSet::from_bits(0b101));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct VarSet(u64);

impl VarSet {
    /// Creates an empty vertex set.
    pub fn empty() -> VarSet {
        VarSet(0)
    }
    /// Creates the set holding the `n` first vertex indexes.
    pub fn full(n: usize) -> VarSet {
        debug_assert!(n <= MAX_VARS);
        if n == MAX_VARS {
            VarSet(u64::MAX)
        } else {
            VarSet((1_u64 << n) - 1)
        }
    }
    /// Creates a set holding the single vertex index `i`.
    pub fn singleton(i: usize) -> VarSet {
        VarSet(1_u64 << i)
    }
    /// Recreates a set from its integer encoding.
    pub fn from_bits(bits: u64) -> VarSet {
        VarSet(bits)
    }
    /// Returns the integer encoding of this set: bit `i` of the result is
    /// set iff vertex index `i` belongs to the set.
    pub fn bits(self) -> u64 {
        self.0
    }
    /// Adds the vertex index `i` to the set if it is not already present.
    pub fn add(&mut self, i: usize) {
        self.0 |= 1_u64 << i;
    }
    /// Removes the vertex index `i` from the set if it was present.
    pub fn remove(&mut self, i: usize) {
        self.0 &= !(1_u64 << i);
    }
    /// Returns a copy of this set with the vertex index `i` present.
    pub fn with(self, i: usize) -> VarSet {
        VarSet(self.0 | (1_u64 << i))
    }
    /// Returns a copy of this set with the vertex index `i` absent.
    pub fn without(self, i: usize) -> VarSet {
        VarSet(self.0 & !(1_u64 << i))
    }
    /// Returns true iff the set contains the vertex index `i`.
    pub fn contains(self, i: usize) -> bool {
        self.0 & (1_u64 << i) != 0
    }
    /// Returns the union of the two sets.
    pub fn union(self, other: VarSet) -> VarSet {
        VarSet(self.0 | other.0)
    }
    /// Returns the intersection of the two sets.
    pub fn inter(self, other: VarSet) -> VarSet {
        VarSet(self.0 & other.0)
    }
    /// Returns the members of this set that do not belong to `other`.
    pub fn diff(self, other: VarSet) -> VarSet {
        VarSet(self.0 & !other.0)
    }
    /// Returns true iff every member of this set belongs to `other`.
    pub fn is_subset_of(self, other: VarSet) -> bool {
        self.0 & !other.0 == 0
    }
    /// Returns the number of vertices present in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
    /// Returns true iff no vertex is present in the set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    /// Returns an iterator over the vertex indexes of this set, in
    /// increasing order.
    ///
    /// # Example
    /// ```
    /// # use subwidth::VarSet;
    /// let set = VarSet::from_bits(0b10110);
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 4]);
    /// ```
    pub fn iter(self) -> VarSetIter {
        VarSetIter(self.0)
    }
    /// Returns an iterator over every subset of this set (the empty set and
    /// the set itself included), in increasing order of their encodings.
    ///
    /// # Example
    /// ```
    /// # use subwidth::VarSet;
    /// let subsets = VarSet::from_bits(0b101).subsets()
    ///     .map(VarSet::bits)
    ///     .collect::<Vec<_>>();
    /// assert_eq!(subsets, vec![0b000, 0b001, 0b100, 0b101]);
    /// ```
    pub fn subsets(self) -> SubsetIter {
        SubsetIter { mask: self.0, next: Some(0) }
    }
}

impl FromIterator<usize> for VarSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> VarSet {
        let mut set = VarSet::empty();
        for i in iter {
            set.add(i);
        }
        set
    }
}

/// This type denotes the iterator used to iterate over the vertex indexes
/// of a given `VarSet`. It should never be manually instantiated, but always
/// created via the `iter()` method of the set.
pub struct VarSetIter(u64);

impl Iterator for VarSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            let i = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            Some(i)
        }
    }
}

/// An iterator over all the subsets of a given `VarSet`. It enumerates the
/// submasks of the set's word in increasing numeric order, which visits the
/// empty set first and the full set last.
pub struct SubsetIter {
    /// The word of the set whose subsets are being enumerated
    mask: u64,
    /// The encoding of the next subset to yield (none once exhausted)
    next: Option<u64>,
}

impl Iterator for SubsetIter {
    type Item = VarSet;

    fn next(&mut self) -> Option<VarSet> {
        let current = self.next?;
        self.next = if current == self.mask {
            None
        } else {
            // the standard submask-enumeration step: subtracting the mask
            // carries through its zero positions
            Some(current.wrapping_sub(self.mask) & self.mask)
        };
        Some(VarSet(current))
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_varset {
    use super::*;

    #[test]
    fn an_empty_set_contains_nothing() {
        let set = VarSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(0));
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn the_full_set_contains_all_first_indexes() {
        let set = VarSet::full(5);
        assert_eq!(set.len(), 5);
        assert!(set.contains(0));
        assert!(set.contains(4));
        assert!(!set.contains(5));
    }

    #[test]
    fn the_full_set_of_the_maximum_capacity_is_all_ones() {
        let set = VarSet::full(MAX_VARS);
        assert_eq!(set.bits(), u64::MAX);
    }

    #[test]
    fn add_and_remove_are_idempotent() {
        let mut set = VarSet::empty();
        set.add(3);
        set.add(3);
        assert_eq!(set.len(), 1);
        set.remove(3);
        set.remove(3);
        assert!(set.is_empty());
    }

    #[test]
    fn the_encoding_is_a_bijection_on_small_universes() {
        for bits in 0..(1_u64 << 6) {
            let set = VarSet::from_bits(bits);
            assert_eq!(set.bits(), bits);
            let rebuilt: VarSet = set.iter().collect();
            assert_eq!(rebuilt, set);
        }
    }

    #[test]
    fn set_algebra_behaves_as_expected() {
        let a = VarSet::from_bits(0b0111);
        let b = VarSet::from_bits(0b1101);
        assert_eq!(a.union(b).bits(), 0b1111);
        assert_eq!(a.inter(b).bits(), 0b0101);
        assert_eq!(a.diff(b).bits(), 0b0010);
        assert!(a.inter(b).is_subset_of(a));
        assert!(!a.is_subset_of(b));
    }

    #[test]
    fn subsets_enumerates_every_subset_exactly_once() {
        let set = VarSet::from_bits(0b1011);
        let all = set.subsets().collect::<Vec<_>>();
        assert_eq!(all.len(), 1 << set.len());
        for (i, s) in all.iter().enumerate() {
            assert!(s.is_subset_of(set));
            // strictly increasing encodings rule out duplicates
            if i > 0 {
                assert!(all[i - 1].bits() < s.bits());
            }
        }
    }

    #[test]
    fn subsets_of_the_empty_set_is_the_empty_set_alone() {
        let all = VarSet::empty().subsets().collect::<Vec<_>>();
        assert_eq!(all, vec![VarSet::empty()]);
    }
}
