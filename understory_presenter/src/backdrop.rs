// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backdrop geometry: the full-screen layer behind presented content.
//!
//! The backdrop dims the screen (optionally) and catches taps that miss the
//! presented content. Cut-outs are regions that stay undimmed and let taps
//! through: for a tooltip, the target and the tooltip itself.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use understory_placement::{Placement, ScreenBounds};

/// A full-screen backdrop with optional cut-outs.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    /// Area covered by the backdrop, normally the whole screen.
    pub bounds: Rect,
    /// Whether the covered area is dimmed.
    pub dimmed: bool,
    /// Regions excluded from dimming and from background taps.
    pub cutouts: Vec<Rect>,
}

impl Backdrop {
    /// A backdrop covering the whole screen with no cut-outs, as used behind cards
    /// and windows.
    pub fn full_screen(screen: ScreenBounds, dimmed: bool) -> Self {
        Self {
            bounds: screen.to_rect(),
            dimmed,
            cutouts: Vec::new(),
        }
    }

    /// A backdrop for a tooltip placed with `placement`.
    ///
    /// The target, the tooltip content frame, and the arrow are cut out, so the
    /// anchor stays highlighted when dimmed and taps on it do not count as
    /// background taps. Empty regions (for example a target that has not been laid
    /// out yet) are skipped.
    pub fn for_tooltip(
        screen: ScreenBounds,
        target: Rect,
        placement: &Placement,
        content: Size,
        arrow_width: f64,
        dimmed: bool,
    ) -> Self {
        let mut backdrop = Self::full_screen(screen, dimmed);
        let regions = [
            target.abs(),
            placement.content_frame(content),
            placement.arrow(content, arrow_width).bounding_box(),
        ];
        backdrop
            .cutouts
            .extend(regions.into_iter().filter(|r| r.area() > 0.0));
        backdrop
    }

    /// True when `pt` lies inside any cut-out.
    pub fn in_cutout(&self, pt: Point) -> bool {
        self.cutouts.iter().any(|r| r.contains(pt))
    }

    /// True when a tap at `pt` lands on the backdrop itself.
    ///
    /// The backdrop catches taps whether or not it is dimmed; what happens next is
    /// up to [`PresenterOptions::tap_background_to_dismiss`](crate::PresenterOptions::tap_background_to_dismiss).
    pub fn is_background_hit(&self, pt: Point) -> bool {
        self.bounds.contains(pt) && !self.in_cutout(pt)
    }

    /// True when `pt` is drawn dimmed.
    pub fn is_dimmed_at(&self, pt: Point) -> bool {
        self.dimmed && self.is_background_hit(pt)
    }
}
