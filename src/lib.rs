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

//! # SUBWIDTH
//! SUBWIDTH is a small library to compute two width measures on a query
//! hypergraph: the *fractional hypertree width* (FHTW) and the *submodular
//! width* (SUBW), with optional awareness of functional dependencies. These
//! measures bound the worst-case complexity of answering a conjunctive
//! query whose join structure the hypergraph describes.
//!
//! The machinery underneath is made of three tightly coupled pieces:
//! * an enumerator of the tree decompositions induced by all the vertex
//!   elimination orders, pruned with a subsumption relation;
//! * an enumerator of *bag selectors* (one bag per decomposition) built
//!   incrementally under two further subsumption prunes;
//! * linear programs: one edge-cover program per bag for FHTW, and per
//!   selector one entropic program over the whole Boolean lattice of
//!   vertex subsets for SUBW.
//!
//! Everything is exact and deterministic, and it all runs to completion on
//! the caller's thread. The elimination enumerator is factorial and the
//! entropic programs are exponential in the number of vertices, so the
//! practical ceiling sits around eight to ten vertices; that is plenty for
//! the join queries these measures are asked about.
//!
//! ## Quick Example
//! The 4-cycle query joins four binary relations in a ring. Its fractional
//! hypertree width is 2, and its submodular width is 3/2, dropping to 1
//! once functional dependencies make the second attribute determined from
//! both of its neighbours.
//!
//! ```
//! use subwidth::{Fd, Hypergraph};
//!
//! let h = Hypergraph::new(
//!     vec![1, 2, 3, 4],
//!     vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 1]],
//! ).unwrap();
//!
//! let fhtw = h.fractional_hypertree_width().unwrap();
//! let subw = h.submodular_width(&[]).unwrap();
//! assert!((fhtw - 2.0).abs() < 1e-6);
//! assert!((subw - 1.5).abs() < 1e-6);
//!
//! let fds = vec![
//!     Fd::new(vec![1], vec![2]).unwrap(),
//!     Fd::new(vec![3], vec![2]).unwrap(),
//! ];
//! let subw_fd = h.submodular_width(&fds).unwrap();
//! assert!((subw_fd - 1.0).abs() < 1e-6);
//! ```
//!
//! ## Plugging your own solver
//! The width computations consume their linear solver as a black box
//! through the [`LpSolver`] trait; any solver able to report an optimal,
//! infeasible or unbounded termination can be swapped in through the
//! `_with` variants of the operations. The bundled [`SimplexSolver`] backs
//! the plain spellings.

mod common;
mod errors;
mod abstraction;
mod implementation;

pub use common::*;
pub use errors::*;
pub use abstraction::*;
pub use implementation::*;
