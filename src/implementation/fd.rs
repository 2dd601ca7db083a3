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

//! This module provides the functional-dependency record.

use fxhash::FxHashSet;

use crate::{Error, Result, Vertex};

// ----------------------------------------------------------------------------
// --- FUNCTIONAL DEPENDENCY --------------------------------------------------
// ----------------------------------------------------------------------------
/// A functional dependency `X -> Y`: every combination of values of the
/// vertices in `X` determines the values of the vertices in `Y`. In the
/// entropic programs it materializes as the equality `h[X ∪ Y] = h[X]`.
///
/// The record stores the *normalized* right-hand side `X ∪ Y`; on input,
/// `X` and the raw `Y` must be disjoint and each free of repetitions.
/// Whether the dependency is legal for a given hypergraph (its normalized
/// right-hand side must fit inside some hyperedge) is only checked when a
/// submodular-width computation is set up.
///
/// # Example
/// ```
/// # use subwidth::Fd;
/// let fd = Fd::new(vec![1], vec![2]).unwrap();
/// assert_eq!(fd.lhs(), &[1]);
/// assert_eq!(fd.rhs(), &[1, 2]); // normalized to X ∪ Y
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Fd<V> {
    /// The determining vertex set X
    lhs: Vec<V>,
    /// The determined vertex set, normalized to X ∪ Y
    rhs: Vec<V>,
}

impl<V: Vertex> Fd<V> {
    /// Validates and normalizes a functional dependency. The members of
    /// `lhs` must be distinct, the members of `rhs` must be distinct, and
    /// the two sides must be disjoint; any violation is a configuration
    /// error.
    pub fn new(
        lhs: impl IntoIterator<Item = V>,
        rhs: impl IntoIterator<Item = V>,
    ) -> Result<Self> {
        let lhs = lhs.into_iter().collect::<Vec<_>>();
        let raw = rhs.into_iter().collect::<Vec<_>>();

        let mut lhs_seen = FxHashSet::default();
        for v in &lhs {
            if !lhs_seen.insert(v.clone()) {
                return Err(Error::Config(format!(
                    "functional dependency repeats {v:?} on its left-hand side"
                )));
            }
        }
        let mut rhs_seen = FxHashSet::default();
        for v in &raw {
            if lhs_seen.contains(v) {
                return Err(Error::Config(format!(
                    "functional dependency mentions {v:?} on both sides"
                )));
            }
            if !rhs_seen.insert(v.clone()) {
                return Err(Error::Config(format!(
                    "functional dependency repeats {v:?} on its right-hand side"
                )));
            }
        }

        let mut rhs = lhs.clone();
        rhs.extend(raw);
        Ok(Fd { lhs, rhs })
    }

    /// Returns the determining vertex set X.
    pub fn lhs(&self) -> &[V] {
        &self.lhs
    }
    /// Returns the normalized determined vertex set X ∪ Y.
    pub fn rhs(&self) -> &[V] {
        &self.rhs
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_fd {
    use crate::*;

    #[test]
    fn the_right_hand_side_is_normalized_to_the_union() {
        let fd = Fd::new(vec!['a', 'b'], vec!['c']).unwrap();
        assert_eq!(fd.lhs(), &['a', 'b']);
        assert_eq!(fd.rhs(), &['a', 'b', 'c']);
    }

    #[test]
    fn an_empty_right_hand_side_normalizes_to_the_left_one() {
        let fd = Fd::new(vec![1, 2], Vec::<i32>::new()).unwrap();
        assert_eq!(fd.rhs(), fd.lhs());
    }

    #[test]
    fn a_repeated_determining_vertex_is_rejected() {
        assert!(matches!(Fd::new(vec![1, 1], vec![2]), Err(Error::Config(_))));
    }

    #[test]
    fn a_repeated_determined_vertex_is_rejected() {
        assert!(matches!(Fd::new(vec![1], vec![2, 2]), Err(Error::Config(_))));
    }

    #[test]
    fn overlapping_sides_are_rejected() {
        assert!(matches!(Fd::new(vec![1, 2], vec![2, 3]), Err(Error::Config(_))));
    }
}
