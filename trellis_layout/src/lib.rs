// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Layout: an enumerative aligned-image layout engine.
//!
//! Trellis arranges a fixed, ordered sequence of images inside a rectangular
//! container so that every slot keeps its image's exact aspect ratio, every
//! slot edge aligns with a container edge or another slot edge, the container
//! is fully covered along at least one axis, and adjacent slots are separated
//! by fixed gaps. Every valid arrangement is realized and scored; callers
//! take all of them or the top K, best first.
//!
//! ## Pipeline
//!
//! - [`trellis_partition`] enumerates the abstract partition trees for the
//!   image count, memoized process-wide by `(count, split cap)`.
//! - [`solve`] lays each tree out in both root orientations, alternating
//!   direction at every group boundary, and assigns each node a pair of
//!   linear width/height relations ([`LayoutParams`]).
//! - [`realize`](realize::realize) picks the unique scale at which the root
//!   fills the container in one axis, centers it, and slices it into one
//!   rectangle per image — or rejects the tree when spacing leaves no room.
//! - [`AlignedImageLayout`] scores the result: coverage, scale accordance,
//!   and area accordance, multiplied into an overall score in `[0, 1]`.
//!
//! The engine does not crop, pad, or reorder images, and it never inspects
//! pixels; aspect ratio is the only image property a layout depends on.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Size;
//! use trellis_layout::{LayoutGenerator, Spacing};
//!
//! let generator = LayoutGenerator::new(Spacing::uniform(4.0), None);
//! let layouts = generator
//!     .generate(
//!         &[Size::new(400.0, 300.0), Size::new(300.0, 300.0)],
//!         Size::new(800.0, 600.0),
//!         Some(5),
//!     )
//!     .unwrap();
//!
//! assert!(!layouts.is_empty());
//! // Best first; every slot keeps its image's aspect ratio.
//! assert!(layouts.windows(2).all(|w| w[0].score >= w[1].score));
//! let first = &layouts[0].regions[0];
//! assert!((first.width() / first.height() - 400.0 / 300.0).abs() < 1e-9);
//! ```
//!
//! ## Cost control
//!
//! The number of partition trees grows like the super-Catalan numbers, so
//! [`LayoutGenerator::split_level_limit`] is the lever for larger inputs:
//! it caps how deeply runs keep subdividing. With the `rayon` feature,
//! realization and scoring fan out across oriented trees without changing
//! the produced result list.

mod collect;

pub mod error;
pub mod generate;
pub mod realize;
pub mod score;
pub mod solve;

pub use error::{LayoutError, LayoutResult};
pub use generate::{ImageSource, LayoutGenerator, Spacing};
pub use score::AlignedImageLayout;
pub use solve::{LayoutNode, LayoutParams, Orientation};
