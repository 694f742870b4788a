// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip placement basics.
//!
//! Place a tooltip next to targets in different spots of a phone-sized screen and
//! print the chosen edge, center, and arrow geometry.
//!
//! Run:
//! - `cargo run -p understory_examples --example tooltip_placement`

use kurbo::{Rect, Size};
use understory_placement::{Edge, PlacementConfig, available_edges};

fn main() {
    let screen = Size::new(400.0, 800.0);
    let config = PlacementConfig::default();
    let content = Size::new(100.0, 50.0);
    let square = |x: f64, y: f64, side: f64| Rect::from_origin_size((x, y), (side, side));

    let targets = [
        ("top-left", square(10.0, 10.0, 20.0)),
        ("center", square(190.0, 390.0, 20.0)),
        ("bottom-right", square(360.0, 760.0, 40.0)),
    ];

    for (name, target) in targets {
        let p = config.place(target, screen, content, None);
        let arrow = p.arrow(content, config.arrow_width());
        println!(
            "{name:>12}: edges with room {:?} -> {:?}, center {:?}, arrow offset {}, tip {:?}",
            available_edges(target, screen, content, config.spacing),
            p.edge,
            p.center,
            p.arrow_offset,
            arrow.tip,
        );
    }

    // Forcing an edge wins even when the tooltip has to be clamped.
    let flush_right = square(380.0, 0.0, 20.0);
    let wide = Size::new(150.0, 40.0);
    let p = config.place(flush_right, screen, wide, Some(Edge::Trailing));
    println!(
        "forced trailing: center {:?}, arrow offset {}",
        p.center, p.arrow_offset
    );
    assert_eq!(p.edge, Edge::Trailing);
    assert_eq!(p.center.x, 315.0, "content is clamped to the right margin");
}
