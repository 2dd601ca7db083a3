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

//! This demonstration computes both width measures of the cycle query on n
//! binary relations, optionally under the functional dependencies making
//! each attribute determine its successor around the cycle.

use std::time::Instant;

use clap::Parser;
use subwidth::{Fd, Hypergraph};

/// This structure uses `clap-derive` annotations and defines the arguments
/// that can be passed on to the executable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The length of the cycle query (stay below 8 or so: the enumeration
    /// of the elimination orders is factorial)
    #[clap(short, long, default_value = "4")]
    n: u32,
    /// Also apply the dependencies i -> i+1 around the cycle
    #[clap(short, long)]
    deps: bool,
}

fn main() {
    let args = Args::parse();
    let n = args.n;

    let vars = (1..=n).collect::<Vec<_>>();
    let edges = (1..=n).map(|i| vec![i, i % n + 1]).collect::<Vec<_>>();
    let h = Hypergraph::new(vars, edges).unwrap();

    let fds = if args.deps {
        (1..=n)
            .map(|i| Fd::new(vec![i], vec![i % n + 1]).unwrap())
            .collect::<Vec<_>>()
    } else {
        vec![]
    };

    let start = Instant::now();
    let fhtw = h.fractional_hypertree_width().unwrap();
    let subw = h.submodular_width(&fds).unwrap();
    let duration = start.elapsed();

    println!("Duration:   {:.3} seconds", duration.as_secs_f32());
    println!("Cycle:      {}", n);
    println!("Tds:        {}", h.tds().len());
    println!("Deps:       {}", fds.len());
    println!("Fhtw:       {:.6}", fhtw);
    println!("Subw:       {:.6}", subw);
}
