// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oriented layout trees and their width/height linear relations.
//!
//! ## Overview
//!
//! Each partition tree is laid out twice, once with a horizontal root and
//! once with a vertical one. Orientation alternates at every group boundary;
//! a run's images follow the run's own orientation. Solving walks the tree
//! bottom up, threading a running image index so every run sees its slice of
//! the aspect sequence, and assigns every node a [`LayoutParams`] pair
//! relating the node's width and height.

use trellis_partition::{PartitionNode, PartitionTree};

use crate::generate::Spacing;

/// Layout direction of a node's content.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Content flows left to right.
    Horizontal,
    /// Content flows top to bottom.
    Vertical,
}

impl Orientation {
    /// The opposite direction; children of a group take this.
    pub fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Linear relations between a node's rectangle width and height:
/// `w = a·h + b` and `h = c·w + d`.
///
/// One pair is computed directly from the node's content and the other is
/// derived by inversion, so `a·c = 1` and `a·d + b = 0` always hold. `a` and
/// `c` are positive. The directly computed offset accumulates spacing and is
/// non-negative, which makes the derived offset non-positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Width per unit height.
    pub a: f64,
    /// Width offset at zero height.
    pub b: f64,
    /// Height per unit width.
    pub c: f64,
    /// Height offset at zero width.
    pub d: f64,
}

impl LayoutParams {
    /// From the width relation `w = a·h + b`.
    pub fn from_width_relation(a: f64, b: f64) -> Self {
        debug_assert!(a > 0.0, "width slope must be positive");
        Self {
            a,
            b,
            c: 1.0 / a,
            d: -b / a,
        }
    }

    /// From the height relation `h = c·w + d`.
    pub fn from_height_relation(c: f64, d: f64) -> Self {
        debug_assert!(c > 0.0, "height slope must be positive");
        Self {
            a: 1.0 / c,
            b: -d / c,
            c,
            d,
        }
    }
}

/// A partition tree annotated with orientation and solved parameters.
#[derive(Clone, Debug)]
pub enum LayoutNode {
    /// `len` images starting at image index `start`, laid out in a row or
    /// column along `orientation`.
    Run {
        /// Index of the run's first image.
        start: usize,
        /// Number of images in the run.
        len: usize,
        /// Direction the images flow.
        orientation: Orientation,
        /// Solved width/height relations.
        params: LayoutParams,
    },
    /// Composed subtrees, each flowing in the flipped orientation.
    Group {
        /// Solved children in sequence order.
        children: Vec<LayoutNode>,
        /// Direction the children are composed along.
        orientation: Orientation,
        /// Solved width/height relations.
        params: LayoutParams,
    },
}

impl LayoutNode {
    /// Solve `tree` for the given root orientation.
    ///
    /// `aspects[i]` is the width/height ratio of image `i`; the tree's leaf
    /// count must equal `aspects.len()`.
    pub fn solve(
        tree: &PartitionTree,
        root: Orientation,
        aspects: &[f64],
        spacing: Spacing,
    ) -> Self {
        let mut next = 0;
        let node = Self::build(tree, root, aspects, spacing, &mut next);
        debug_assert_eq!(next, aspects.len(), "tree must cover every image");
        node
    }

    fn build(
        tree: &PartitionTree,
        orientation: Orientation,
        aspects: &[f64],
        spacing: Spacing,
        next: &mut usize,
    ) -> Self {
        match tree.as_ref() {
            PartitionNode::Run { len } => {
                let start = *next;
                *next += len;
                let slice = &aspects[start..start + len];
                let gaps = (len - 1) as f64;
                let params = match orientation {
                    Orientation::Horizontal => LayoutParams::from_width_relation(
                        slice.iter().sum(),
                        spacing.horizontal * gaps,
                    ),
                    Orientation::Vertical => LayoutParams::from_height_relation(
                        slice.iter().map(|a| a.recip()).sum(),
                        spacing.vertical * gaps,
                    ),
                };
                Self::Run {
                    start,
                    len: *len,
                    orientation,
                    params,
                }
            }
            PartitionNode::Group { children } => {
                let flipped = orientation.flipped();
                let children: Vec<Self> = children
                    .iter()
                    .map(|c| Self::build(c, flipped, aspects, spacing, next))
                    .collect();
                let gaps = (children.len() - 1) as f64;
                let params = match orientation {
                    Orientation::Horizontal => LayoutParams::from_width_relation(
                        children.iter().map(|c| c.params().a).sum(),
                        spacing.horizontal * gaps
                            + children.iter().map(|c| c.params().b).sum::<f64>(),
                    ),
                    Orientation::Vertical => LayoutParams::from_height_relation(
                        children.iter().map(|c| c.params().c).sum(),
                        spacing.vertical * gaps
                            + children.iter().map(|c| c.params().d).sum::<f64>(),
                    ),
                };
                Self::Group {
                    children,
                    orientation,
                    params,
                }
            }
        }
    }

    /// The node's solved parameters.
    pub fn params(&self) -> LayoutParams {
        match self {
            Self::Run { params, .. } | Self::Group { params, .. } => *params,
        }
    }

    /// The node's orientation.
    pub fn orientation(&self) -> Orientation {
        match self {
            Self::Run { orientation, .. } | Self::Group { orientation, .. } => *orientation,
        }
    }
}
