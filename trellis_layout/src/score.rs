// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scored layout output: coverage and accordance metrics over realized
//! regions.

use kurbo::{Rect, Size};

/// A realized arrangement of every image inside the container, with quality
/// scores. All scores lie in `[0, 1]` and `score` is the product of the
/// three sub-scores.
#[derive(Clone, Debug)]
pub struct AlignedImageLayout {
    /// One rectangle per image, in image order, in container coordinates
    /// (origin top-left, y down).
    pub regions: Vec<Rect>,
    /// Square root of the fraction of container area covered by the
    /// regions' bounding rectangle.
    pub score_of_coverage: f64,
    /// Agreement of per-image scale factors (image width over slot width):
    /// `2^(−std)` over their logs.
    pub score_of_scale_accordance: f64,
    /// Agreement of slot areas: `2^(−std)` over their logs.
    pub score_of_area_accordance: f64,
    /// Overall quality, the product of the three sub-scores.
    pub score: f64,
}

impl AlignedImageLayout {
    /// Score realized `regions` against the original image sizes.
    pub(crate) fn new(regions: Vec<Rect>, sizes: &[Size], container: Size) -> Self {
        debug_assert_eq!(regions.len(), sizes.len());
        let bounds = bounding_rect(&regions);
        let covered = bounds.area() / container.area();
        debug_assert!(covered <= 1.0 + 1e-9, "regions exceed the container");
        // An exact fit can land a hair above 1.0 in floats; clamp before the
        // root so the score stays in range.
        let score_of_coverage = covered.min(1.0).sqrt();
        let score_of_scale_accordance = accordance(
            regions
                .iter()
                .zip(sizes)
                .map(|(region, size)| size.width / region.width()),
        );
        let score_of_area_accordance = accordance(regions.iter().map(Rect::area));
        debug_assert!((0.0..=1.0).contains(&score_of_coverage));
        debug_assert!((0.0..=1.0).contains(&score_of_scale_accordance));
        debug_assert!((0.0..=1.0).contains(&score_of_area_accordance));
        let score = score_of_coverage * score_of_scale_accordance * score_of_area_accordance;
        Self {
            regions,
            score_of_coverage,
            score_of_scale_accordance,
            score_of_area_accordance,
            score,
        }
    }
}

/// Smallest rectangle covering all `regions`. Callers guarantee at least one
/// region.
fn bounding_rect(regions: &[Rect]) -> Rect {
    let mut it = regions.iter().copied();
    let first = it.next().expect("a layout has at least one region");
    it.fold(first, |acc, r| acc.union(r))
}

/// `2^(−std)` over the natural logs of `values`, where `std` is the square
/// root of the summed squared deviations divided by the sample count. The
/// divisor is `n` rather than `√n`: deviation in wide layouts is dampened on
/// purpose, which shapes the score distribution the host expects.
fn accordance(values: impl Iterator<Item = f64>) -> f64 {
    let logs: Vec<f64> = values.map(f64::ln).collect();
    let n = logs.len() as f64;
    let mean = logs.iter().sum::<f64>() / n;
    let sum_sq = logs.iter().map(|l| (l - mean).powi(2)).sum::<f64>();
    (-(sum_sq.sqrt() / n)).exp2()
}
