// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position calculation: where the tooltip content is centered for a resolved edge.

use kurbo::{Point, Rect, Size};

use crate::types::{Edge, ScreenBounds};

/// Center of the tooltip content before on-screen clamping.
///
/// The content sits `spacing` away from `target` on `edge`, centered on the
/// target along the other axis.
pub fn ideal_center(edge: Edge, target: Rect, content: Size, spacing: f64) -> Point {
    let mid = target.center();
    match edge {
        Edge::Top => Point::new(mid.x, target.min_y() - spacing - content.height / 2.0),
        Edge::Bottom => Point::new(mid.x, target.max_y() + spacing + content.height / 2.0),
        Edge::Leading => Point::new(target.min_x() - spacing - content.width / 2.0, mid.y),
        Edge::Trailing => Point::new(target.max_x() + spacing + content.width / 2.0, mid.y),
    }
}

/// Clamp a center coordinate so content of `extent` stays `spacing` away from
/// both ends of `0..screen_extent`.
///
/// When the screen is too small (`screen_extent < extent + 2×spacing`) the range
/// is empty and the coordinate collapses to the screen midpoint; the content then
/// overflows evenly on both sides.
///
/// Never panics, unlike [`f64::clamp`]; NaN bounds leave `value` untouched.
pub fn clamp_axis(value: f64, extent: f64, screen_extent: f64, spacing: f64) -> f64 {
    let half = extent / 2.0;
    let lo = spacing + half;
    let hi = screen_extent - spacing - half;
    if lo > hi {
        return screen_extent / 2.0;
    }
    value.max(lo).min(hi)
}

/// Computes the on-screen center of the tooltip content for `edge`.
///
/// Starts from [`ideal_center`] and clamps both axes independently with
/// [`clamp_axis`], so the content lies within `[spacing, screen - spacing]`
/// whenever the screen is large enough to hold it.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use understory_placement::{Edge, compute_center};
///
/// let target = Rect::from_origin_size((10.0, 10.0), (20.0, 20.0));
/// let screen = Size::new(400.0, 800.0);
/// let content = Size::new(100.0, 50.0);
///
/// // The ideal x (20) would push the content off the left edge; it is clamped to 10 + 50.
/// let center = compute_center(Edge::Bottom, target, screen, content, 10.0);
/// assert_eq!(center, Point::new(60.0, 65.0));
/// ```
pub fn compute_center(
    edge: Edge,
    target: Rect,
    screen: ScreenBounds,
    content: Size,
    spacing: f64,
) -> Point {
    let ideal = ideal_center(edge, target, content, spacing);
    Point::new(
        clamp_axis(ideal.x, content.width, screen.width, spacing),
        clamp_axis(ideal.y, content.height, screen.height, spacing),
    )
}
