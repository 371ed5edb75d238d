// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition-tree shapes and the split-depth lever.
//!
//! Print how many partition trees exist for small image counts, and how a
//! split-depth cap tames the growth.
//!
//! Run:
//! - `cargo run -p trellis_demos --example partition_shapes`

use trellis_partition::enumerate;

fn main() {
    println!("unbounded partition trees (super-Catalan growth):");
    for n in 1..=7 {
        println!("  n = {n}: {}", enumerate(n, None).len());
    }

    println!("\ncapped at split depth 1 and 2:");
    for n in [6usize, 8, 10] {
        let flat = enumerate(n, Some(1)).len();
        let two = enumerate(n, Some(2)).len();
        println!("  n = {n}: {flat} at depth 1, {two} at depth 2");
    }
}
