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

//! End-to-end checks of both width measures on the classical cycle queries
//! and on the two-triangle query, with and without functional dependencies.

use subwidth::{Fd, Hypergraph, TOLERANCE};

/// The cycle query on n binary relations: vertices 1..=n, one edge per
/// consecutive pair, wrapping around.
fn cycle(n: u32) -> Hypergraph<u32> {
    let vars = (1..=n).collect::<Vec<_>>();
    let edges = (1..=n).map(|i| vec![i, i % n + 1]).collect::<Vec<_>>();
    Hypergraph::new(vars, edges).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn the_4_cycle_widths() {
    let h = cycle(4);
    assert_close(h.fractional_hypertree_width().unwrap(), 2.0);
    assert_close(h.submodular_width(&[]).unwrap(), 1.5);
}

#[test]
fn the_4_cycle_widths_under_dependencies() {
    let h = cycle(4);
    let fds = vec![
        Fd::new(vec![1], vec![2]).unwrap(),
        Fd::new(vec![3], vec![2]).unwrap(),
    ];
    assert_close(h.fractional_hypertree_width().unwrap(), 2.0);
    assert_close(h.submodular_width(&fds).unwrap(), 1.0);
}

#[test]
fn the_5_cycle_widths() {
    let h = cycle(5);
    assert_close(h.fractional_hypertree_width().unwrap(), 2.0);
    assert_close(h.submodular_width(&[]).unwrap(), 5.0 / 3.0);
}

#[test]
fn the_5_cycle_widths_under_dependencies() {
    let h = cycle(5);
    let fds = vec![
        Fd::new(vec![1], vec![5]).unwrap(),
        Fd::new(vec![5], vec![1]).unwrap(),
    ];
    assert_close(h.fractional_hypertree_width().unwrap(), 2.0);
    assert_close(h.submodular_width(&fds).unwrap(), 1.5);
}

#[test]
fn the_6_cycle_widths() {
    let h = cycle(6);
    assert_close(h.fractional_hypertree_width().unwrap(), 2.0);
    assert_close(h.submodular_width(&[]).unwrap(), 5.0 / 3.0);
}

#[test]
fn the_6_cycle_widths_under_dependencies() {
    let h = cycle(6);
    let fds = vec![
        Fd::new(vec![2], vec![3]).unwrap(),
        Fd::new(vec![4], vec![5]).unwrap(),
        Fd::new(vec![6], vec![1]).unwrap(),
    ];
    assert_close(h.fractional_hypertree_width().unwrap(), 2.0);
    assert_close(h.submodular_width(&fds).unwrap(), 1.5);
}

/// The two-triangle query: an outer triangle x, y, z whose sides each join
/// an inner vertex (w, u, v), plus the inner triangle as a fourth relation.
fn two_triangles() -> Hypergraph<char> {
    Hypergraph::new(
        vec!['x', 'y', 'z', 'u', 'v', 'w'],
        vec![
            vec!['x', 'w', 'z'],
            vec!['x', 'u', 'y'],
            vec!['y', 'v', 'z'],
            vec!['u', 'v', 'w'],
        ],
    )
    .unwrap()
}

/// Inside each outer relation, every pair of attributes determines the
/// third one: nine dependencies in total.
fn two_triangles_fds() -> Vec<Fd<char>> {
    let mut fds = vec![];
    for [a, b, c] in [['x', 'w', 'z'], ['x', 'u', 'y'], ['y', 'v', 'z']] {
        fds.push(Fd::new(vec![a, b], vec![c]).unwrap());
        fds.push(Fd::new(vec![a, c], vec![b]).unwrap());
        fds.push(Fd::new(vec![b, c], vec![a]).unwrap());
    }
    fds
}

#[test]
fn the_two_triangle_widths() {
    let h = two_triangles();
    assert_close(h.fractional_hypertree_width().unwrap(), 2.0);
    assert_close(h.submodular_width(&[]).unwrap(), 1.75);
}

#[test]
fn the_two_triangle_widths_under_dependencies() {
    let h = two_triangles();
    assert_close(h.submodular_width(&two_triangles_fds()).unwrap(), 1.5);
}
