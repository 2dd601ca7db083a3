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

//! This module provides the hypergraph model: the immutable description of
//! a conjunctive query's join structure on which every width measure of
//! this crate is computed.

use std::cell::OnceCell;

use fxhash::FxHashMap;

use crate::{enumerate_tds, Error, Result, Td, VarSet, Vertex, MAX_VARS};

// ----------------------------------------------------------------------------
// --- HYPERGRAPH -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A query hypergraph: an ordered list of distinct vertices and a list of
/// hyperedges covering all of them, each edge carrying a nonnegative
/// weight (1 unless stated otherwise).
///
/// The structure is validated at construction and immutable afterwards.
/// Vertices get a dense index in `[0, n)` assigned in insertion order; all
/// the combinatorial machinery works on [`VarSet`]s of those indexes, and
/// `encode`/`decode` translate between caller vertices and index sets.
/// The tree decompositions of the edge set are computed lazily, on first
/// use, unless they were supplied up front.
///
/// # Example
/// ```
/// # use subwidth::Hypergraph;
/// // the triangle query
/// let h = Hypergraph::new(
///     vec![1, 2, 3],
///     vec![vec![1, 2], vec![2, 3], vec![3, 1]],
/// ).unwrap();
/// assert_eq!(h.nb_vars(), 3);
/// assert_eq!(h.nb_edges(), 3);
/// ```
#[derive(Debug)]
pub struct Hypergraph<V> {
    /// The vertices, in insertion order (index i holds the vertex with
    /// dense index i)
    vars: Vec<V>,
    /// The hyperedges, as sets of vertex indexes
    edges: Vec<VarSet>,
    /// One nonnegative weight per edge
    weights: Vec<f64>,
    /// Maps a vertex back to its dense index
    var_index: FxHashMap<V, usize>,
    /// For each vertex index, the indexes of the edges containing it
    var_edges: Vec<Vec<usize>>,
    /// The tree decompositions of the edge set, filled on first use
    tds: OnceCell<Vec<Td>>,
}

impl<V: Vertex> Hypergraph<V> {
    /// Constructs and validates a hypergraph with unit edge weights and
    /// lazily-enumerated tree decompositions. This is shorthand for running
    /// a [`HypergraphBuilder`] with no options.
    pub fn new<I, E>(vars: I, edges: impl IntoIterator<Item = E>) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = V>,
    {
        HypergraphBuilder::new(vars, edges).build()
    }

    /// Returns the number of vertices of the hypergraph.
    pub fn nb_vars(&self) -> usize {
        self.vars.len()
    }
    /// Returns the number of hyperedges of the hypergraph.
    pub fn nb_edges(&self) -> usize {
        self.edges.len()
    }
    /// Returns the vertices, in index order.
    pub fn vars(&self) -> &[V] {
        &self.vars
    }
    /// Returns the hyperedges as index sets, in input order.
    pub fn edges(&self) -> &[VarSet] {
        &self.edges
    }
    /// Returns the edge weights, in edge order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
    /// Returns the dense index of the given vertex, if it belongs to the
    /// hypergraph.
    pub fn var_index(&self, var: &V) -> Option<usize> {
        self.var_index.get(var).copied()
    }
    /// Returns the indexes of the edges containing the vertex with the
    /// given index.
    pub fn var_edges(&self, index: usize) -> &[usize] {
        &self.var_edges[index]
    }
    /// Returns the set of all vertex indexes.
    pub fn all_vars(&self) -> VarSet {
        VarSet::full(self.nb_vars())
    }

    /// Encodes a collection of vertices into their index set. Mentioning a
    /// vertex that does not belong to the hypergraph is a configuration
    /// error.
    pub fn encode(&self, vertices: impl IntoIterator<Item = V>) -> Result<VarSet> {
        let mut set = VarSet::empty();
        for v in vertices {
            match self.var_index.get(&v) {
                Some(&i) => set.add(i),
                None => {
                    return Err(Error::Config(format!(
                        "vertex {v:?} does not belong to the hypergraph"
                    )))
                }
            }
        }
        Ok(set)
    }

    /// Decodes an index set back into the vertices it stands for, in index
    /// order. The set must only mention indexes below `nb_vars()`.
    pub fn decode(&self, set: VarSet) -> Result<Vec<V>> {
        if !set.is_subset_of(self.all_vars()) {
            return Err(Error::Config(format!(
                "set {:#b} mentions vertex indexes beyond the hypergraph's {} vertices",
                set.bits(),
                self.nb_vars()
            )));
        }
        Ok(set.iter().map(|i| self.vars[i].clone()).collect())
    }

    /// Returns the non-redundant tree decompositions of the edge set,
    /// enumerating them on first use.
    pub fn tds(&self) -> &[Td] {
        self.tds.get_or_init(|| enumerate_tds(&self.edges))
    }
}

// ----------------------------------------------------------------------------
// --- BUILDER ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A staged constructor for [`Hypergraph`]: mandatory vertices and edges,
/// optional weights and pre-computed tree decompositions, and one `build()`
/// call performing the whole validation.
///
/// # Example
/// ```
/// # use subwidth::HypergraphBuilder;
/// let h = HypergraphBuilder::new(vec!['a', 'b'], vec![vec!['a', 'b']])
///     .weights(vec![2.5])
///     .build()
///     .unwrap();
/// assert_eq!(h.weights(), &[2.5]);
/// ```
pub struct HypergraphBuilder<V> {
    vars: Vec<V>,
    edges: Vec<Vec<V>>,
    weights: Option<Vec<f64>>,
    tds: Option<Vec<Td>>,
}

impl<V: Vertex> HypergraphBuilder<V> {
    /// Starts a builder from the vertex list and the edge list.
    pub fn new<I, E>(vars: I, edges: impl IntoIterator<Item = E>) -> Self
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = V>,
    {
        HypergraphBuilder {
            vars: vars.into_iter().collect(),
            edges: edges.into_iter().map(|e| e.into_iter().collect()).collect(),
            weights: None,
            tds: None,
        }
    }
    /// Supplies one nonnegative weight per edge (the default is 1 each).
    pub fn weights(mut self, weights: impl IntoIterator<Item = f64>) -> Self {
        self.weights = Some(weights.into_iter().collect());
        self
    }
    /// Supplies pre-computed tree decompositions instead of enumerating
    /// them from the edge set.
    pub fn tds(mut self, tds: Vec<Td>) -> Self {
        self.tds = Some(tds);
        self
    }

    /// Validates every invariant and assembles the hypergraph. Any
    /// violation aborts the construction with a configuration error.
    pub fn build(self) -> Result<Hypergraph<V>> {
        let n = self.vars.len();
        if n > MAX_VARS {
            return Err(Error::Config(format!(
                "a hypergraph may have at most {MAX_VARS} vertices, got {n}"
            )));
        }
        let mut var_index = FxHashMap::default();
        var_index.reserve(n);
        for (i, v) in self.vars.iter().enumerate() {
            if var_index.insert(v.clone(), i).is_some() {
                return Err(Error::Config(format!("duplicate vertex {v:?}")));
            }
        }

        let mut edges = Vec::with_capacity(self.edges.len());
        let mut var_edges = vec![vec![]; n];
        for (j, members) in self.edges.iter().enumerate() {
            if members.is_empty() {
                return Err(Error::Config(format!("edge {j} is empty")));
            }
            let mut edge = VarSet::empty();
            for v in members {
                let &i = var_index.get(v).ok_or_else(|| {
                    Error::Config(format!("edge {j} mentions unknown vertex {v:?}"))
                })?;
                edge.add(i);
            }
            if edge.len() != members.len() {
                return Err(Error::Config(format!("edge {j} repeats a vertex")));
            }
            for i in edge.iter() {
                var_edges[i].push(j);
            }
            edges.push(edge);
        }

        let covered = edges.iter().fold(VarSet::empty(), |acc, &e| acc.union(e));
        if covered != VarSet::full(n) {
            return Err(Error::Config(
                "the union of the edges must equal the vertex set".to_string(),
            ));
        }

        let weights = self.weights.unwrap_or_else(|| vec![1.0; edges.len()]);
        if weights.len() != edges.len() {
            return Err(Error::Config(format!(
                "expected {} edge weights, got {}",
                edges.len(),
                weights.len()
            )));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(Error::Config(format!("edge weights must be finite and nonnegative, got {w}")));
        }

        let tds = OnceCell::new();
        if let Some(supplied) = self.tds {
            let full = VarSet::full(n);
            if let Some(td) = supplied
                .iter()
                .find(|td| td.bags().iter().any(|b| !b.is_subset_of(full)))
            {
                return Err(Error::Config(format!(
                    "supplied tree decomposition {td:?} mentions vertex indexes beyond {n}"
                )));
            }
            // a fresh cell cannot already be set
            let _ = tds.set(supplied);
        }

        Ok(Hypergraph { vars: self.vars, edges, weights, var_index, var_edges, tds })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
