// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Result collection: everything sorted, or a bounded best-K buffer.

use crate::score::AlignedImageLayout;

/// Accumulates scored layouts, optionally bounded to the best K.
///
/// Bounded mode keeps its buffer sorted by score descending with a linear
/// insert; for realistic caps this beats a heap and makes the tie rule
/// explicit. Equal-score layouts are admitted in encounter order until the
/// cap is reached and an equal-score newcomer never displaces an incumbent.
#[derive(Debug)]
pub(crate) enum Collector {
    /// Keep everything; sort once at the end.
    All(Vec<AlignedImageLayout>),
    /// Keep a descending-sorted buffer of at most `cap` layouts.
    Bounded {
        cap: usize,
        items: Vec<AlignedImageLayout>,
    },
}

impl Collector {
    pub fn new(limit: Option<usize>) -> Self {
        match limit {
            None => Self::All(Vec::new()),
            Some(cap) => Self::Bounded {
                cap,
                items: Vec::new(),
            },
        }
    }

    /// Admit one layout.
    pub fn push(&mut self, layout: AlignedImageLayout) {
        match self {
            Self::All(items) => items.push(layout),
            Self::Bounded { cap, items } => {
                match items.iter().position(|l| l.score < layout.score) {
                    Some(at) => {
                        items.insert(at, layout);
                        items.truncate(*cap);
                    }
                    None if items.len() < *cap => items.push(layout),
                    None => {}
                }
            }
        }
    }

    /// The collected layouts, best score first.
    pub fn finish(self) -> Vec<AlignedImageLayout> {
        match self {
            Self::All(mut items) => {
                items.sort_by(|x, y| y.score.total_cmp(&x.score));
                items
            }
            Self::Bounded { items, .. } => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Size};

    /// A layout whose score is exactly `score` (single region scaled so the
    /// coverage term hits the target, accordance terms both 1).
    fn scored(score: f64) -> AlignedImageLayout {
        let side = 100.0 * score;
        AlignedImageLayout::new(
            vec![Rect::new(0.0, 0.0, side, side)],
            &[Size::new(side, side)],
            Size::new(100.0, 100.0),
        )
    }

    fn scores(layouts: &[AlignedImageLayout]) -> Vec<f64> {
        layouts.iter().map(|l| l.score).collect()
    }

    #[test]
    fn unbounded_sorts_descending() {
        let mut c = Collector::new(None);
        for s in [0.3, 0.9, 0.1, 0.5] {
            c.push(scored(s));
        }
        let out = scores(&c.finish());
        assert_eq!(out.len(), 4);
        assert!(out.windows(2).all(|w| w[0] >= w[1]));
        assert!((out[0] - 0.9).abs() < 1e-9);
    }

    #[test]
    fn bounded_keeps_the_best_k() {
        let mut c = Collector::new(Some(2));
        for s in [0.3, 0.9, 0.1, 0.5] {
            c.push(scored(s));
        }
        let out = scores(&c.finish());
        assert_eq!(out.len(), 2);
        assert!((out[0] - 0.9).abs() < 1e-9);
        assert!((out[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn bounded_admits_under_capacity_without_displacement() {
        let mut c = Collector::new(Some(3));
        c.push(scored(0.5));
        c.push(scored(0.5));
        let out = c.finish();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn equal_score_newcomer_does_not_displace_incumbent() {
        let mut c = Collector::new(Some(2));
        c.push(scored(0.5));
        c.push(scored(0.5));
        // Buffer is full of 0.5s; an equal newcomer finds no strictly
        // smaller slot and is dropped.
        c.push(scored(0.5));
        let out = c.finish();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn better_layout_displaces_the_tail() {
        let mut c = Collector::new(Some(2));
        c.push(scored(0.4));
        c.push(scored(0.2));
        c.push(scored(0.6));
        let out = scores(&c.finish());
        assert!((out[0] - 0.6).abs() < 1e-9);
        assert!((out[1] - 0.4).abs() < 1e-9);
    }

    #[test]
    fn zero_capacity_collects_nothing() {
        let mut c = Collector::new(Some(0));
        c.push(scored(0.9));
        assert!(c.finish().is_empty());
    }
}
