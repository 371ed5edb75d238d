// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generator: enumeration → orientation → realization → scoring.
//!
//! ## Overview
//!
//! [`LayoutGenerator::generate`] is the engine's entry point. It validates
//! the inputs, pulls the partition trees for the image count through the
//! process-wide memo, lays every tree out in both root orientations, realizes
//! each oriented tree inside the container, scores what fits, and returns the
//! survivors best first — all of them, or the top K when a result limit is
//! given.
//!
//! Generation is a pure CPU transformation: no I/O, no files, no global
//! state beyond the partition memo. Output is deterministic for fixed
//! inputs. With the `rayon` feature, realization and scoring fan out across
//! oriented trees; results are merged in encounter order, so the produced
//! list is identical to the sequential one.

use kurbo::Size;
use trellis_partition::{PartitionTree, cache};

use crate::collect::Collector;
use crate::error::{LayoutError, LayoutResult};
use crate::realize::realize;
use crate::score::AlignedImageLayout;
use crate::solve::{LayoutNode, Orientation};

/// Fixed gaps between adjacent slots.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacing {
    /// Gap between horizontally adjacent slots.
    pub horizontal: f64,
    /// Gap between vertically adjacent slots.
    pub vertical: f64,
}

impl Spacing {
    /// The same gap on both axes.
    pub fn uniform(gap: f64) -> Self {
        Self {
            horizontal: gap,
            vertical: gap,
        }
    }
}

/// Anything that exposes a positive pixel size. The engine never inspects
/// pixels; aspect ratio is the only property a layout depends on.
pub trait ImageSource {
    /// Width and height of the image, both positive.
    fn size(&self) -> Size;
}

impl ImageSource for Size {
    fn size(&self) -> Size {
        *self
    }
}

impl ImageSource for (f64, f64) {
    fn size(&self) -> Size {
        Size::new(self.0, self.1)
    }
}

/// Configuration for a family of generations.
///
/// The default has no spacing and no split-depth cap. The partition space
/// grows super-exponentially with the image count, so set
/// [`split_level_limit`](Self::split_level_limit) when laying out more than
/// about six images.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LayoutGenerator {
    /// Gaps inserted between adjacent slots.
    pub spacing: Spacing,
    /// Cap on the split depth of enumerated partition trees; `None` is
    /// unbounded.
    pub split_level_limit: Option<u32>,
}

impl LayoutGenerator {
    /// A generator with the given spacing and split-depth cap.
    pub fn new(spacing: Spacing, split_level_limit: Option<u32>) -> Self {
        Self {
            spacing,
            split_level_limit,
        }
    }

    /// Generate aligned layouts for `images` inside `container`, best score
    /// first. `limit` caps the result count; `None` returns every realizable
    /// layout, `Some(0)` returns an empty list without enumerating.
    ///
    /// Both root orientations are emitted for every partition tree, even
    /// when they realize identically (as happens for a single image); no
    /// deduplication is applied.
    #[tracing::instrument(skip(self, images), fields(image_count = images.len()))]
    pub fn generate<I: ImageSource>(
        &self,
        images: &[I],
        container: Size,
        limit: Option<usize>,
    ) -> LayoutResult<Vec<AlignedImageLayout>> {
        let sizes = validated_sizes(images)?;
        if container.width <= 0.0 || container.height <= 0.0 {
            return Err(LayoutError::NonPositiveContainer {
                width: container.width,
                height: container.height,
            });
        }
        if self.spacing.horizontal < 0.0 || self.spacing.vertical < 0.0 {
            return Err(LayoutError::NegativeSpacing {
                horizontal: self.spacing.horizontal,
                vertical: self.spacing.vertical,
            });
        }
        if limit == Some(0) {
            return Ok(Vec::new());
        }

        let aspects: Vec<f64> = sizes.iter().map(|s| s.width / s.height).collect();
        let partitions = cache::partitions(sizes.len(), self.split_level_limit);

        let produce = |tree: &PartitionTree, orientation: Orientation| -> Option<AlignedImageLayout> {
            let solved = LayoutNode::solve(tree, orientation, &aspects, self.spacing);
            realize(&solved, container, &aspects, self.spacing)
                .map(|regions| AlignedImageLayout::new(regions, &sizes, container))
        };

        let mut collector = Collector::new(limit);
        let mut realized = 0usize;
        let mut rejected = 0usize;

        #[cfg(not(feature = "rayon"))]
        for tree in partitions.iter() {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                match produce(tree, orientation) {
                    Some(layout) => {
                        realized += 1;
                        collector.push(layout);
                    }
                    None => rejected += 1,
                }
            }
        }

        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            // Collect in encounter order so bounded-mode tie-breaking matches
            // the sequential path.
            let produced: Vec<Option<AlignedImageLayout>> = partitions
                .par_iter()
                .flat_map_iter(|tree| {
                    [Orientation::Horizontal, Orientation::Vertical]
                        .into_iter()
                        .map(move |orientation| produce(tree, orientation))
                })
                .collect();
            for item in produced {
                match item {
                    Some(layout) => {
                        realized += 1;
                        collector.push(layout);
                    }
                    None => rejected += 1,
                }
            }
        }

        tracing::debug!(
            trees = partitions.len(),
            realized,
            rejected,
            "generated layouts"
        );
        Ok(collector.finish())
    }
}

fn validated_sizes<I: ImageSource>(images: &[I]) -> LayoutResult<Vec<Size>> {
    if images.is_empty() {
        return Err(LayoutError::NoImages);
    }
    let sizes: Vec<Size> = images.iter().map(ImageSource::size).collect();
    for (index, size) in sizes.iter().enumerate() {
        if size.width <= 0.0 || size.height <= 0.0 {
            return Err(LayoutError::NonPositiveImageSize {
                index,
                width: size.width,
                height: size.height,
            });
        }
    }
    Ok(sizes)
}
