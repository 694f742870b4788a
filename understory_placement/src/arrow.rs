// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow offsets and renderer-facing geometry of a placed tooltip.

use kurbo::{Point, Rect, Size};

use crate::types::{Arrow, Edge, Placement};

/// Signed distance from the content's center to the point the arrow must sit
/// at to keep pointing at the target's center.
///
/// - `Top`/`Bottom`: `target.mid_x - clamped_center.x`
/// - `Leading`/`Trailing`: `target.mid_y - clamped_center.y`
///
/// The unclamped center of a tooltip is aligned with the target's center along
/// the arrow's axis, so the offset is zero exactly when
/// [`compute_center`](crate::compute_center) did not clamp that axis. Positive
/// values move the arrow towards larger coordinates (right or down).
///
/// `content` and `spacing` do not influence the result; they are accepted so the
/// three placement steps share one calling convention.
pub fn compute_arrow_offset(
    edge: Edge,
    target: Rect,
    clamped_center: Point,
    _content: Size,
    _spacing: f64,
) -> f64 {
    let mid = target.center();
    if edge.is_vertical() {
        mid.x - clamped_center.x
    } else {
        mid.y - clamped_center.y
    }
}

impl Placement {
    /// The tooltip content rectangle: `content` centered at [`Placement::center`].
    pub fn content_frame(&self, content: Size) -> Rect {
        Rect::from_center_size(self.center, content)
    }

    /// The arrow triangle connecting the content frame to the target.
    ///
    /// The base of width `arrow_width` lies on the side of the content frame that
    /// faces the target, centered at the frame's center shifted by
    /// [`Placement::arrow_offset`]. The tip extends `arrow_width / 2` towards the
    /// target, so with the conventional `arrow_width = 2 × spacing` it touches the
    /// target's edge. The base is not constrained to the frame; a large offset
    /// (target far off-screen) yields an arrow beyond the frame's corner.
    pub fn arrow(&self, content: Size, arrow_width: f64) -> Arrow {
        let frame = self.content_frame(content);
        let half = arrow_width / 2.0;
        let along = self.arrow_offset;
        match self.edge {
            Edge::Top | Edge::Bottom => {
                let x = self.center.x + along;
                let (base_y, tip_y) = if self.edge == Edge::Top {
                    (frame.max_y(), frame.max_y() + half)
                } else {
                    (frame.min_y(), frame.min_y() - half)
                };
                Arrow {
                    tip: Point::new(x, tip_y),
                    base_start: Point::new(x - half, base_y),
                    base_end: Point::new(x + half, base_y),
                }
            }
            Edge::Leading | Edge::Trailing => {
                let y = self.center.y + along;
                let (base_x, tip_x) = if self.edge == Edge::Leading {
                    (frame.max_x(), frame.max_x() + half)
                } else {
                    (frame.min_x(), frame.min_x() - half)
                };
                Arrow {
                    tip: Point::new(tip_x, y),
                    base_start: Point::new(base_x, y - half),
                    base_end: Point::new(base_x, y + half),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_center;

    const SCREEN: Size = Size::new(400.0, 800.0);

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin_size((x, y), (w, h))
    }

    #[test]
    fn zero_when_unclamped() {
        let target = rect(190.0, 390.0, 20.0, 20.0);
        let content = Size::new(100.0, 50.0);
        for edge in Edge::ALL {
            let c = compute_center(edge, target, SCREEN, content, 10.0);
            assert_eq!(compute_arrow_offset(edge, target, c, content, 10.0), 0.0);
        }
    }

    #[test]
    fn horizontal_clamp_shifts_arrow_left() {
        let target = rect(10.0, 10.0, 20.0, 20.0);
        let content = Size::new(100.0, 50.0);
        let c = compute_center(Edge::Bottom, target, SCREEN, content, 10.0);
        let offset = compute_arrow_offset(Edge::Bottom, target, c, content, 10.0);
        assert_eq!(offset, -40.0);
    }

    // Side edges measure from the target's vertical midpoint.
    #[test]
    fn side_edges_use_target_mid_y() {
        let target = rect(380.0, 0.0, 20.0, 20.0);
        let content = Size::new(150.0, 40.0);
        let c = compute_center(Edge::Trailing, target, SCREEN, content, 10.0);
        assert_eq!(c, Point::new(315.0, 30.0));
        let offset = compute_arrow_offset(Edge::Trailing, target, c, content, 10.0);
        assert_eq!(offset, -20.0);

        // Near the bottom the content is pushed up and the arrow moves down.
        let low = rect(0.0, 790.0, 10.0, 10.0);
        let c = compute_center(Edge::Trailing, low, SCREEN, content, 10.0);
        assert_eq!(c.y, 770.0);
        let offset = compute_arrow_offset(Edge::Trailing, low, c, content, 10.0);
        assert_eq!(offset, 25.0);
    }

    // A clamp on the edge's own axis does not move the arrow.
    #[test]
    fn clamp_on_other_axis_keeps_zero_offset() {
        let target = rect(380.0, 390.0, 20.0, 20.0);
        let content = Size::new(150.0, 40.0);
        let c = compute_center(Edge::Trailing, target, SCREEN, content, 10.0);
        assert_eq!(c.x, 315.0);
        let offset = compute_arrow_offset(Edge::Trailing, target, c, content, 10.0);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn content_and_spacing_do_not_move_the_offset() {
        let target = rect(10.0, 10.0, 20.0, 20.0);
        let center = Point::new(60.0, 65.0);
        let a = compute_arrow_offset(Edge::Bottom, target, center, Size::ZERO, 0.0);
        let b = compute_arrow_offset(Edge::Bottom, target, center, Size::new(300.0, 90.0), 24.0);
        assert_eq!(a, -40.0);
        assert_eq!(a, b);
    }

    #[test]
    fn content_frame_is_centered() {
        let p = Placement {
            edge: Edge::Top,
            center: Point::new(200.0, 355.0),
            arrow_offset: 0.0,
        };
        assert_eq!(
            p.content_frame(Size::new(100.0, 50.0)),
            Rect::new(150.0, 330.0, 250.0, 380.0)
        );
    }

    #[test]
    fn arrow_tip_touches_target() {
        let content = Size::new(100.0, 50.0);
        let top = Placement {
            edge: Edge::Top,
            center: Point::new(200.0, 355.0),
            arrow_offset: 0.0,
        };
        let a = top.arrow(content, 20.0);
        // Target min_y is 390; content bottom is 380.
        assert_eq!(a.tip, Point::new(200.0, 390.0));
        assert_eq!(a.base_start, Point::new(190.0, 380.0));
        assert_eq!(a.base_end, Point::new(210.0, 380.0));

        let bottom = Placement {
            edge: Edge::Bottom,
            center: Point::new(60.0, 65.0),
            arrow_offset: -40.0,
        };
        let a = bottom.arrow(content, 20.0);
        assert_eq!(a.tip, Point::new(20.0, 30.0));
        assert_eq!(a.base_start, Point::new(10.0, 40.0));
        assert_eq!(a.base_end, Point::new(30.0, 40.0));
    }

    #[test]
    fn arrow_on_side_edges() {
        let content = Size::new(100.0, 50.0);
        let leading = Placement {
            edge: Edge::Leading,
            center: Point::new(130.0, 400.0),
            arrow_offset: 5.0,
        };
        let a = leading.arrow(content, 20.0);
        assert_eq!(a.tip, Point::new(190.0, 405.0));
        assert_eq!(a.base_start, Point::new(180.0, 395.0));
        assert_eq!(a.base_end, Point::new(180.0, 415.0));

        let trailing = Placement {
            edge: Edge::Trailing,
            ..leading
        };
        let a = trailing.arrow(content, 20.0);
        assert_eq!(a.tip, Point::new(70.0, 405.0));
        assert_eq!(a.bounding_box(), Rect::new(70.0, 395.0, 80.0, 415.0));
    }
}
