// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric realization of a solved layout tree inside a container.
//!
//! ## Overview
//!
//! The root rectangle fills the container in one axis without exceeding the
//! other and is centered. Slicing then walks the tree: each child's extent
//! along the node's orientation comes from the child's linear relations and
//! the node's cross dimension, with origins advancing by extent plus spacing.
//! A node whose rectangle cannot even hold its gaps — or any non-positive
//! intermediate dimension — rejects the whole tree; offsets accumulate
//! spacing, so small containers can drive a child extent negative.

use kurbo::{Point, Rect, Size};

use crate::generate::Spacing;
use crate::solve::{LayoutNode, Orientation};

/// Realize `root` inside `container`, producing one rectangle per image in
/// image order, or `None` when the tree does not fit.
pub fn realize(
    root: &LayoutNode,
    container: Size,
    aspects: &[f64],
    spacing: Spacing,
) -> Option<Vec<Rect>> {
    let p = root.params();
    // Fill the height first. If that overflows the width, the width-bound
    // size cannot overflow the height: a·c = 1 and a·d + b = 0 give
    // c·W + d < H exactly when a·H + b > W.
    let (w, h) = {
        let w = p.a * container.height + p.b;
        if w <= container.width {
            (w, container.height)
        } else {
            let h = p.c * container.width + p.d;
            debug_assert!(h <= container.height, "contradictory layout parameters");
            (container.width, h)
        }
    };
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let origin = Point::new(
        (container.width - w) / 2.0,
        (container.height - h) / 2.0,
    );
    let mut regions = Vec::with_capacity(aspects.len());
    slice(
        root,
        Rect::from_origin_size(origin, Size::new(w, h)),
        aspects,
        spacing,
        &mut regions,
    )?;
    Some(regions)
}

fn slice(
    node: &LayoutNode,
    rect: Rect,
    aspects: &[f64],
    spacing: Spacing,
    out: &mut Vec<Rect>,
) -> Option<()> {
    match node {
        LayoutNode::Run {
            start,
            len,
            orientation,
            ..
        } => {
            let gaps = (*len - 1) as f64;
            match orientation {
                Orientation::Horizontal => {
                    if rect.width() <= spacing.horizontal * gaps {
                        return None;
                    }
                    let mut x = rect.x0;
                    for j in *start..*start + *len {
                        let w = rect.height() * aspects[j];
                        if w <= 0.0 {
                            return None;
                        }
                        out.push(Rect::new(x, rect.y0, x + w, rect.y1));
                        x += w + spacing.horizontal;
                    }
                }
                Orientation::Vertical => {
                    if rect.height() <= spacing.vertical * gaps {
                        return None;
                    }
                    let mut y = rect.y0;
                    for j in *start..*start + *len {
                        let h = rect.width() * aspects[j].recip();
                        if h <= 0.0 {
                            return None;
                        }
                        out.push(Rect::new(rect.x0, y, rect.x1, y + h));
                        y += h + spacing.vertical;
                    }
                }
            }
        }
        LayoutNode::Group {
            children,
            orientation,
            ..
        } => {
            let gaps = (children.len() - 1) as f64;
            match orientation {
                Orientation::Horizontal => {
                    if rect.width() <= spacing.horizontal * gaps {
                        return None;
                    }
                    let mut x = rect.x0;
                    for child in children {
                        let p = child.params();
                        let w = rect.height() * p.a + p.b;
                        if w <= 0.0 {
                            return None;
                        }
                        slice(
                            child,
                            Rect::new(x, rect.y0, x + w, rect.y1),
                            aspects,
                            spacing,
                            out,
                        )?;
                        x += w + spacing.horizontal;
                    }
                }
                Orientation::Vertical => {
                    if rect.height() <= spacing.vertical * gaps {
                        return None;
                    }
                    let mut y = rect.y0;
                    for child in children {
                        let p = child.params();
                        let h = rect.width() * p.c + p.d;
                        if h <= 0.0 {
                            return None;
                        }
                        slice(
                            child,
                            Rect::new(rect.x0, y, rect.x1, y + h),
                            aspects,
                            spacing,
                            out,
                        )?;
                        y += h + spacing.vertical;
                    }
                }
            }
        }
    }
    Some(())
}
