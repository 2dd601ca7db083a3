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

//! This module defines the error type shared by the whole library.

/// This enumeration groups the kinds of failures a width computation can
/// run into. Configuration problems (an ill-formed hypergraph or functional
/// dependency) are detected eagerly, at construction time or when a
/// computation is set up; they are never caught internally. Solver failures
/// mean the linear solver terminated with a non-optimal status; because the
/// programs we build are deterministic in their inputs, such a failure is
/// surfaced as-is and never retried. Logic failures guard internal
/// invariants and indicate a bug in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The hypergraph, a functional dependency, or their combination does
    /// not satisfy the documented invariants.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The linear solver terminated with a status other than optimal.
    #[error("lp solver terminated with non-optimal status: {0}")]
    Solver(String),
    /// An internal invariant of this crate was violated.
    #[error("internal invariant violated: {0}")]
    Logic(&'static str),
}

/// A handy shortening of the result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
