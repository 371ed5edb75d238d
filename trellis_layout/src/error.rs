// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precondition errors reported by the generator entry point.
//!
//! Geometric rejection is not an error: an oriented tree that does not fit
//! the container is skipped silently. Only caller mistakes surface here.

/// Result alias for layout generation.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Invalid input to [`LayoutGenerator::generate`](crate::LayoutGenerator::generate).
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// The image slice was empty.
    #[error("no images to lay out")]
    NoImages,

    /// An image reported a zero or negative dimension.
    #[error("image {index} has a non-positive size ({width}x{height})")]
    NonPositiveImageSize {
        /// Position of the offending image in the input order.
        index: usize,
        /// Reported width.
        width: f64,
        /// Reported height.
        height: f64,
    },

    /// The container has a zero or negative dimension.
    #[error("container has a non-positive size ({width}x{height})")]
    NonPositiveContainer {
        /// Container width.
        width: f64,
        /// Container height.
        height: f64,
    },

    /// A spacing component was negative.
    #[error("spacing must be non-negative ({horizontal} horizontal, {vertical} vertical)")]
    NegativeSpacing {
        /// Horizontal gap.
        horizontal: f64,
        /// Vertical gap.
        vertical: f64,
    },
}
