// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Partition: enumeration of abstract partition trees.
//!
//! A *partition tree* describes one way of recursively splitting a contiguous
//! sequence of N positions: leaves are [`Run`](PartitionNode::Run)s covering
//! one or more adjacent positions, interior nodes are
//! [`Group`](PartitionNode::Group)s composing two or more subtrees end to end.
//! The layout crate turns each tree into a pair of oriented arrangements; this
//! crate knows nothing about orientation, images, or geometry.
//!
//! ## Enumeration
//!
//! [`enumerate`] produces every distinct partition tree of `n` positions whose
//! *split depth* — the maximum number of group nodes on any leaf-to-root
//! path — stays within an optional cap. The unbounded counts follow the
//! super-Catalan numbers (1, 1, 3, 11, 45, …), so callers pass a cap once `n`
//! grows beyond about six.
//!
//! ## Sharing
//!
//! Trees are immutable values behind [`PartitionTree`] handles, so subtrees
//! are shared freely across enumeration products and across calls. With the
//! default `std` feature, [`cache`] adds a process-wide memo table keyed by
//! `(n, cap)`; repeated queries return the same shared slice.
//!
//! ### Minimal usage
//!
//! ```
//! use trellis_partition::{PartitionNode, enumerate};
//!
//! let trees = enumerate(4, None);
//! assert_eq!(trees.len(), 11);
//!
//! // The unsplit run always comes first.
//! assert_eq!(*trees[0], PartitionNode::Run { len: 4 });
//!
//! // Capping the split depth at one keeps only flat groups.
//! assert!(enumerate(4, Some(1)).iter().all(|t| t.split_depth() <= 1));
//! ```
//!
//! This crate is `no_std` (with `alloc`) when the `std` feature is disabled;
//! only the [`cache`] module requires `std`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
pub mod cache;
pub mod enumerate;
pub mod tree;

pub use enumerate::enumerate;
pub use tree::{PartitionNode, PartitionTree};
