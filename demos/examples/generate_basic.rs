// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout generation basics.
//!
//! Lay out three photos in a landscape container and print the geometry and
//! scores of the best arrangements.
//!
//! Run:
//! - `cargo run -p trellis_demos --example generate_basic`

use kurbo::Size;
use trellis_layout::{LayoutGenerator, Spacing};

fn main() {
    let images = [
        Size::new(1600.0, 1200.0), // landscape
        Size::new(900.0, 1600.0),  // portrait
        Size::new(1200.0, 1200.0), // square
    ];
    let container = Size::new(1280.0, 720.0);

    let generator = LayoutGenerator::new(Spacing::uniform(8.0), None);
    let layouts = generator
        .generate(&images, container, Some(3))
        .expect("inputs are valid");

    for (rank, layout) in layouts.iter().enumerate() {
        println!(
            "#{rank}  score {:.4}  (coverage {:.4}, scale {:.4}, area {:.4})",
            layout.score,
            layout.score_of_coverage,
            layout.score_of_scale_accordance,
            layout.score_of_area_accordance,
        );
        for (i, region) in layout.regions.iter().enumerate() {
            println!(
                "    image {i}: {:7.1},{:7.1}  {:6.1} x {:6.1}",
                region.x0,
                region.y0,
                region.width(),
                region.height(),
            );
        }
    }
}
