// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive enumeration of partition trees under a split-depth cap.
//!
//! ## Overview
//!
//! A run of `k > 2` positions splits along every cut mask
//! `m ∈ [1, 2^(k−1) − 2]`: bit `i` of `m` starts a new part before position
//! `i + 1`. Mask `0` (the unsplit run) and the all-ones mask (the
//! all-singleton split, which lays out identically to the run itself) are
//! excluded. Each mask yields a flat group, which is then evolved further:
//! every child may split in turn, one depth level down, and every combination
//! of evolved children forms another tree.
//!
//! Termination: run splits strictly increase depth, the budget decreases by
//! one per group level, and runs of length ≤ 2 are leaves.

use alloc::vec;
use alloc::vec::Vec;

use crate::tree::{PartitionNode, PartitionTree};

/// Every distinct partition tree of `n` positions with split depth at most
/// `limit` (`None` is unbounded). The unsplit run comes first.
///
/// The result count grows like the super-Catalan numbers when uncapped;
/// callers are expected to pass a limit for `n` beyond about six. Output
/// order is deterministic for fixed inputs.
pub fn enumerate(n: usize, limit: Option<u32>) -> Vec<PartitionTree> {
    assert!(n >= 1, "cannot partition an empty sequence");
    assert!(n <= 64, "cut masks are 64-bit; larger runs are not enumerable");
    evolve(&PartitionNode::run(n), limit)
}

/// The tree itself plus every deeper splitting reachable within `budget`.
fn evolve(tree: &PartitionTree, budget: Option<u32>) -> Vec<PartitionTree> {
    let mut out = vec![tree.clone()];
    if budget == Some(0) {
        return out;
    }
    match tree.as_ref() {
        PartitionNode::Run { len } if *len > 2 => {
            let top = (1u64 << (len - 1)) - 1;
            // Masks 1..top: every ordered split into >= 2 parts except the
            // all-singleton one at `top`.
            for mask in 1..top {
                let children = part_lengths(*len, mask)
                    .into_iter()
                    .map(PartitionNode::run)
                    .collect();
                out.extend(evolve(&PartitionNode::group(children), budget));
            }
        }
        PartitionNode::Run { .. } => {}
        PartitionNode::Group { children } => {
            let next = budget.map(|b| b - 1);
            let evolved: Vec<Vec<PartitionTree>> =
                children.iter().map(|c| evolve(c, next)).collect();
            // Each evolved set leads with the unchanged child, so the first
            // combination is the group itself; it is already in `out`.
            for combo in CartesianProduct::new(&evolved).skip(1) {
                out.push(PartitionNode::group(combo));
            }
        }
    }
    out
}

/// Part lengths of a `k`-position run under a cut mask. Bit `i` (LSB) starts
/// a new part before position `i + 1`.
fn part_lengths(k: usize, mask: u64) -> Vec<usize> {
    let mut parts = Vec::new();
    let mut len = 1;
    for i in 0..k - 1 {
        if mask & (1 << i) != 0 {
            parts.push(len);
            len = 1;
        } else {
            len += 1;
        }
    }
    parts.push(len);
    parts
}

/// Odometer over the Cartesian product of per-slot choice sets, least
/// significant slot last.
struct CartesianProduct<'a> {
    sets: &'a [Vec<PartitionTree>],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> CartesianProduct<'a> {
    fn new(sets: &'a [Vec<PartitionTree>]) -> Self {
        Self {
            sets,
            indices: vec![0; sets.len()],
            done: sets.iter().any(|s| s.is_empty()),
        }
    }
}

impl Iterator for CartesianProduct<'_> {
    type Item = Vec<PartitionTree>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let combo = self
            .indices
            .iter()
            .zip(self.sets)
            .map(|(&i, set)| set[i].clone())
            .collect();

        self.done = true;
        for (slot, idx) in self.indices.iter_mut().enumerate().rev() {
            *idx += 1;
            if *idx < self.sets[slot].len() {
                self.done = false;
                break;
            }
            *idx = 0;
        }
        Some(combo)
    }
}
