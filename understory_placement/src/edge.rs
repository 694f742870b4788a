// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge resolution: pick the side of the target with enough room for the content.

use kurbo::{Rect, Size};

use crate::types::{Edge, EdgeSet, ScreenBounds};

/// Space left on `edge` of `target`, after reserving `2 × spacing`.
///
/// The reserve covers the gap between target and tooltip and the gap between
/// tooltip and screen edge. The result may be negative (target partly or fully
/// off-screen on that side).
///
/// - `Top`: `target.min_y - 2×spacing`
/// - `Bottom`: `screen.height - target.max_y - 2×spacing`
/// - `Leading`: `target.min_x - 2×spacing`
/// - `Trailing`: `screen.width - target.max_x - 2×spacing`
pub fn available_space(edge: Edge, target: Rect, screen: ScreenBounds, spacing: f64) -> f64 {
    let reserve = spacing * 2.0;
    match edge {
        Edge::Top => target.min_y() - reserve,
        Edge::Bottom => screen.height - target.max_y() - reserve,
        Edge::Leading => target.min_x() - reserve,
        Edge::Trailing => screen.width - target.max_x() - reserve,
    }
}

/// Content extent that must fit in the space of `edge`: height for vertical
/// edges, width otherwise.
fn required_extent(edge: Edge, content: Size) -> f64 {
    if edge.is_vertical() {
        content.height
    } else {
        content.width
    }
}

/// Returns true if `content` fits on `edge` of `target`.
///
/// The comparison is strict: space exactly equal to the content extent does not
/// fit, and a NaN on either side never fits.
pub fn fits(edge: Edge, target: Rect, screen: ScreenBounds, content: Size, spacing: f64) -> bool {
    available_space(edge, target, screen, spacing) > required_extent(edge, content)
}

/// Every edge of `target` with room for `content`.
pub fn available_edges(target: Rect, screen: ScreenBounds, content: Size, spacing: f64) -> EdgeSet {
    Edge::ALL
        .into_iter()
        .filter(|&edge| fits(edge, target, screen, content, spacing))
        .fold(EdgeSet::empty(), |set, edge| set | edge.as_set())
}

/// First edge in `priority` with room for `content`, or `fallback` if none fits.
///
/// A `forced` edge is returned unconditionally, even when the content will be clipped.
pub(crate) fn resolve_with_priority(
    target: Rect,
    screen: ScreenBounds,
    content: Size,
    spacing: f64,
    forced: Option<Edge>,
    priority: &[Edge],
    fallback: Edge,
) -> Edge {
    if let Some(edge) = forced {
        #[cfg(feature = "tracing")]
        tracing::trace!(?edge, "tooltip edge forced by caller");
        return edge;
    }
    if let Some(edge) = priority
        .iter()
        .copied()
        .find(|&edge| fits(edge, target, screen, content, spacing))
    {
        return edge;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(
        ?fallback,
        ?target,
        ?content,
        "no edge has room for the tooltip, using fallback"
    );
    fallback
}

/// Picks the presentation edge for a tooltip.
///
/// If `forced` is provided it is returned unconditionally. Otherwise edges are
/// tested in the fixed priority order `Top`, `Bottom`, `Leading`, `Trailing` and the
/// first one whose [`available_space`] exceeds the content's height (vertical
/// edges) or width (horizontal edges) wins. When no edge has room the result is
/// `Top`, even though the content may be clipped; this is a silent last-resort
/// policy, not an error.
///
/// Use [`PlacementConfig::resolve_edge`](crate::PlacementConfig::resolve_edge) for a
/// custom priority order or fallback.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{Edge, resolve_edge};
///
/// let screen = Size::new(400.0, 800.0);
/// let content = Size::new(100.0, 50.0);
///
/// // No room above a target at the very top of the screen.
/// let target = Rect::from_origin_size((10.0, 10.0), (20.0, 20.0));
/// assert_eq!(resolve_edge(target, screen, content, 10.0, None), Edge::Bottom);
///
/// // Callers can always force an edge.
/// assert_eq!(resolve_edge(target, screen, content, 10.0, Some(Edge::Leading)), Edge::Leading);
/// ```
pub fn resolve_edge(
    target: Rect,
    screen: ScreenBounds,
    content: Size,
    spacing: f64,
    forced: Option<Edge>,
) -> Edge {
    resolve_with_priority(
        target,
        screen,
        content,
        spacing,
        forced,
        &Edge::ALL,
        Edge::Top,
    )
}
