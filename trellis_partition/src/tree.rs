// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition-tree values: runs, groups, and structural accessors.

use alloc::sync::Arc;
use alloc::vec::Vec;

/// A node in an abstract partition tree over a contiguous sequence.
///
/// The sequence of leaf lengths, read left to right, partitions the positions
/// the tree covers. Groups are pure structure: no orientation is attached at
/// this level. This is a closed two-case sum type; consumers match on it
/// exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PartitionNode {
    /// A leaf covering `len ≥ 1` adjacent positions.
    Run {
        /// Number of positions covered.
        len: usize,
    },
    /// An interior node composing `≥ 2` subtrees end to end.
    Group {
        /// Subtrees in sequence order.
        children: Vec<PartitionTree>,
    },
}

/// Shared handle to an immutable partition tree.
///
/// Trees never contain cycles or back-references, so plain reference counting
/// is enough to share subtrees across enumeration products, orientations, and
/// the process-wide memo.
pub type PartitionTree = Arc<PartitionNode>;

impl PartitionNode {
    /// A leaf covering `len` positions.
    pub fn run(len: usize) -> PartitionTree {
        debug_assert!(len >= 1, "a run covers at least one position");
        Arc::new(Self::Run { len })
    }

    /// An interior node over `children`.
    pub fn group(children: Vec<PartitionTree>) -> PartitionTree {
        debug_assert!(children.len() >= 2, "a group has at least two children");
        Arc::new(Self::Group { children })
    }

    /// Total number of leaf positions covered by this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Run { len } => *len,
            Self::Group { children } => children.iter().map(|c| c.leaf_count()).sum(),
        }
    }

    /// Maximum number of group nodes on any leaf-to-root path.
    pub fn split_depth(&self) -> usize {
        match self {
            Self::Run { .. } => 0,
            Self::Group { children } => {
                1 + children
                    .iter()
                    .map(|c| c.split_depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn leaf_count_sums_nested_runs() {
        let tree = PartitionNode::group(vec![
            PartitionNode::run(2),
            PartitionNode::group(vec![PartitionNode::run(1), PartitionNode::run(3)]),
        ]);
        assert_eq!(tree.leaf_count(), 6);
    }

    #[test]
    fn split_depth_counts_groups_on_deepest_path() {
        let run = PartitionNode::run(5);
        assert_eq!(run.split_depth(), 0);

        let flat = PartitionNode::group(vec![PartitionNode::run(2), PartitionNode::run(3)]);
        assert_eq!(flat.split_depth(), 1);

        let nested = PartitionNode::group(vec![
            PartitionNode::run(1),
            PartitionNode::group(vec![PartitionNode::run(1), PartitionNode::run(2)]),
        ]);
        assert_eq!(nested.split_depth(), 2);
    }

    #[test]
    fn structural_equality_ignores_sharing() {
        let shared = PartitionNode::run(2);
        let a = PartitionNode::group(vec![shared.clone(), shared]);
        let b = PartitionNode::group(vec![PartitionNode::run(2), PartitionNode::run(2)]);
        assert_eq!(a, b);
    }
}
