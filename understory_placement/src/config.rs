// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full placement pipeline and its configuration.

use kurbo::{Rect, Size};

use crate::arrow::compute_arrow_offset;
use crate::edge::resolve_with_priority;
use crate::position::compute_center;
use crate::types::{Edge, Placement, ScreenBounds};

/// Spacing used by [`PlacementConfig::default`], in screen points.
pub const DEFAULT_SPACING: f64 = 10.0;

/// Placement parameters shared by every tooltip of a UI.
///
/// The default matches the free functions of this crate: spacing
/// [`DEFAULT_SPACING`], priority `Top`, `Bottom`, `Leading`, `Trailing`, and
/// fallback `Top`.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{Edge, PlacementConfig};
///
/// let config = PlacementConfig::default()
///     .with_spacing(8.0)
///     .with_priority([Edge::Bottom, Edge::Top, Edge::Trailing, Edge::Leading]);
///
/// let target = Rect::from_origin_size((190.0, 390.0), (20.0, 20.0));
/// let placement = config.place(target, Size::new(400.0, 800.0), Size::new(100.0, 50.0), None);
/// assert_eq!(placement.edge, Edge::Bottom);
/// assert_eq!(config.arrow_width(), 16.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementConfig {
    /// Minimum clearance between tooltip and target, and between tooltip and screen edges.
    pub spacing: f64,
    /// Order in which edges are tried when no edge is forced.
    ///
    /// Repeated entries are harmless; an edge missing from the list is never
    /// chosen unless it is forced or is the fallback.
    pub priority: [Edge; 4],
    /// Edge used when no edge in `priority` has room.
    pub fallback: Edge,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            priority: Edge::ALL,
            fallback: Edge::Top,
        }
    }
}

impl PlacementConfig {
    /// Set the spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the edge priority order.
    #[must_use]
    pub fn with_priority(mut self, priority: [Edge; 4]) -> Self {
        self.priority = priority;
        self
    }

    /// Set the fallback edge.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Edge) -> Self {
        self.fallback = fallback;
        self
    }

    /// Width of the arrow base: twice the spacing, so the tip reaches the target.
    pub fn arrow_width(&self) -> f64 {
        self.spacing * 2.0
    }

    /// Resolve the presentation edge with this configuration's priority and fallback.
    ///
    /// A `forced` edge is returned unconditionally.
    pub fn resolve_edge(
        &self,
        target: Rect,
        screen: ScreenBounds,
        content: Size,
        forced: Option<Edge>,
    ) -> Edge {
        resolve_with_priority(
            target,
            screen,
            content,
            self.spacing,
            forced,
            &self.priority,
            self.fallback,
        )
    }

    /// Run the full pipeline: resolve the edge, compute the clamped center, and
    /// compute the arrow offset.
    pub fn place(
        &self,
        target: Rect,
        screen: ScreenBounds,
        content: Size,
        forced: Option<Edge>,
    ) -> Placement {
        let edge = self.resolve_edge(target, screen, content, forced);
        let center = compute_center(edge, target, screen, content, self.spacing);
        let arrow_offset = compute_arrow_offset(edge, target, center, content, self.spacing);
        Placement {
            edge,
            center,
            arrow_offset,
        }
    }
}

/// Place a tooltip for `target` with the default priority and fallback.
///
/// Equivalent to `PlacementConfig::default().with_spacing(spacing).place(..)`.
/// The result is a pure function of the inputs; call it again whenever the
/// target frame, content size, or screen bounds change. A content size of zero
/// (not yet measured) is valid and yields a provisional placement.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use understory_placement::{Edge, place};
///
/// let target = Rect::from_origin_size((190.0, 390.0), (20.0, 20.0));
/// let p = place(target, Size::new(400.0, 800.0), Size::new(100.0, 50.0), 10.0, None);
/// assert_eq!(p.edge, Edge::Top);
/// assert_eq!(p.center, Point::new(200.0, 355.0));
/// assert_eq!(p.arrow_offset, 0.0);
/// ```
pub fn place(
    target: Rect,
    screen: ScreenBounds,
    content: Size,
    spacing: f64,
    forced: Option<Edge>,
) -> Placement {
    PlacementConfig::default()
        .with_spacing(spacing)
        .place(target, screen, content, forced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    const SCREEN: Size = Size::new(400.0, 800.0);

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin_size((x, y), (w, h))
    }

    #[test]
    fn target_in_top_left_corner() {
        let p = place(
            rect(10.0, 10.0, 20.0, 20.0),
            SCREEN,
            Size::new(100.0, 50.0),
            10.0,
            None,
        );
        assert_eq!(p.edge, Edge::Bottom);
        assert_eq!(p.center, Point::new(60.0, 65.0));
        assert_eq!(p.arrow_offset, -40.0);
    }

    #[test]
    fn target_centered_on_screen() {
        let p = place(
            rect(190.0, 390.0, 20.0, 20.0),
            SCREEN,
            Size::new(100.0, 50.0),
            10.0,
            None,
        );
        assert_eq!(
            p,
            Placement {
                edge: Edge::Top,
                center: Point::new(200.0, 355.0),
                arrow_offset: 0.0,
            }
        );
    }

    #[test]
    fn forced_trailing_flush_right() {
        let target = rect(380.0, 0.0, 20.0, 20.0);
        let content = Size::new(150.0, 40.0);
        let p = place(target, SCREEN, content, 10.0, Some(Edge::Trailing));
        assert_eq!(p.edge, Edge::Trailing);
        assert_eq!(p.center.x, 315.0);
        // The y axis was clamped from 10 to 30; the arrow moves back by the delta.
        assert_eq!(p.center.y, 30.0);
        assert_eq!(p.arrow_offset, 10.0 - 30.0);
    }

    #[test]
    fn repeated_calls_agree() {
        let target = rect(33.0, 712.5, 48.0, 31.0);
        let content = Size::new(180.0, 64.0);
        let a = place(target, SCREEN, content, 10.0, None);
        let b = place(target, SCREEN, content, 10.0, None);
        assert_eq!(a, b);
    }

    // First layout pass before the content is measured, then the real size.
    #[test]
    fn provisional_then_measured() {
        let target = rect(150.0, 40.0, 100.0, 30.0);
        let first = place(target, SCREEN, Size::ZERO, 10.0, None);
        assert_eq!(first.edge, Edge::Top);
        assert_eq!(first.center, Point::new(200.0, 30.0));
        let second = place(target, SCREEN, Size::new(120.0, 40.0), 10.0, None);
        assert_eq!(second.edge, Edge::Bottom);
        assert_eq!(second.center, Point::new(200.0, 100.0));
    }

    #[test]
    fn config_fallback_applies() {
        let config = PlacementConfig::default().with_fallback(Edge::Bottom);
        let screen = Size::new(120.0, 60.0);
        let target = rect(10.0, 10.0, 100.0, 40.0);
        let p = config.place(target, screen, Size::new(100.0, 50.0), None);
        assert_eq!(p.edge, Edge::Bottom);
        // The x range is a single point; the y range is empty and collapses to the midpoint.
        assert_eq!(p.center, Point::new(60.0, 30.0));
    }

    #[test]
    fn default_config_matches_free_function() {
        let target = rect(300.0, 20.0, 60.0, 20.0);
        let content = Size::new(90.0, 30.0);
        assert_eq!(
            PlacementConfig::default().place(target, SCREEN, content, None),
            place(target, SCREEN, content, DEFAULT_SPACING, None)
        );
    }
}
