// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dimmed tooltip overlay.
//!
//! Combines a placement with a backdrop that cuts out the target and the tooltip,
//! then classifies a few taps.
//!
//! Run:
//! - `cargo run -p understory_examples --example tooltip_overlay`

use kurbo::{Point, Rect, Size};
use understory_placement::PlacementConfig;
use understory_presenter::{Backdrop, Presenter, PresenterEvent, PresenterOptions};

fn main() {
    let screen = Size::new(400.0, 800.0);
    let config = PlacementConfig::default();
    let options = PresenterOptions::default();
    let mut presenter = Presenter::new(options);
    let _ = presenter.set_presented(true);

    let target = Rect::from_origin_size((40.0, 600.0), (44.0, 44.0));
    // First layout pass: content not measured yet.
    let provisional = config.place(target, screen, Size::ZERO, None);
    println!("provisional: {provisional:?}");

    // Second pass with the measured size.
    let content = Size::new(220.0, 90.0);
    let placement = config.place(target, screen, content, None);
    println!("measured: {placement:?}");

    let backdrop = Backdrop::for_tooltip(
        screen,
        target,
        &placement,
        content,
        config.arrow_width(),
        options.dimmed,
    );
    for r in &backdrop.cutouts {
        println!("cut-out: {r:?}");
    }

    let taps = [
        ("on target", target.center()),
        ("on tooltip", placement.center),
        ("elsewhere", Point::new(350.0, 100.0)),
    ];
    for (name, pt) in taps {
        let background = backdrop.is_background_hit(pt);
        println!("{name:>10}: background = {background}");
        if background {
            let _ = presenter.handle(PresenterEvent::BackgroundTapped);
        }
    }
    println!("state after taps: {:?}", presenter.state());
}
