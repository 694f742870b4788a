// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: edges, edge sets, screen bounds, and placement results.

use kurbo::{Point, Rect, Size};

/// Size of the viewport a tooltip must stay within.
///
/// The origin is the top-left corner of the screen, so valid positions span
/// `0..=width` horizontally and `0..=height` vertically.
pub type ScreenBounds = Size;

/// The side of the target a tooltip is presented on.
///
/// `Leading` and `Trailing` are logical edges. In left-to-right layout (the only
/// layout this crate models) `Leading` is the min-x side and `Trailing` the max-x side.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// Above the target.
    Top,
    /// Below the target.
    Bottom,
    /// Before the target on the horizontal axis.
    Leading,
    /// After the target on the horizontal axis.
    Trailing,
}

impl Edge {
    /// All edges in default resolution priority: `Top`, `Bottom`, `Leading`, `Trailing`.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Leading, Self::Trailing];

    /// Returns true for `Top` and `Bottom`.
    ///
    /// A tooltip on a vertical edge is stacked above or below its target and its
    /// arrow slides along the x axis.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// The edge on the other side of the target.
    ///
    /// This is also the side of the tooltip that faces the target, where the arrow sits.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Leading => Self::Trailing,
            Self::Trailing => Self::Leading,
        }
    }

    /// The single-edge [`EdgeSet`] for this edge.
    pub const fn as_set(self) -> EdgeSet {
        match self {
            Self::Top => EdgeSet::TOP,
            Self::Bottom => EdgeSet::BOTTOM,
            Self::Leading => EdgeSet::LEADING,
            Self::Trailing => EdgeSet::TRAILING,
        }
    }
}

bitflags::bitflags! {
    /// A set of [`Edge`]s.
    ///
    /// Returned by [`available_edges`](crate::available_edges) to report every edge
    /// with enough room for the content.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EdgeSet: u8 {
        /// [`Edge::Top`].
        const TOP      = 0b0000_0001;
        /// [`Edge::Bottom`].
        const BOTTOM   = 0b0000_0010;
        /// [`Edge::Leading`].
        const LEADING  = 0b0000_0100;
        /// [`Edge::Trailing`].
        const TRAILING = 0b0000_1000;
    }
}

impl EdgeSet {
    /// Returns true if `edge` is a member of this set.
    pub const fn has(self, edge: Edge) -> bool {
        self.contains(edge.as_set())
    }
}

impl From<Edge> for EdgeSet {
    fn from(edge: Edge) -> Self {
        edge.as_set()
    }
}

/// A resolved, ready-to-render tooltip placement.
///
/// Computed fresh on every layout pass by [`place`](crate::place) or
/// [`PlacementConfig::place`](crate::PlacementConfig::place); identical inputs
/// always produce an identical `Placement`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// The edge of the target the tooltip is presented on.
    pub edge: Edge,
    /// Center of the tooltip content, clamped on-screen.
    pub center: Point,
    /// Signed displacement of the arrow from the content's center along the
    /// edge's cross axis (x for vertical edges, y otherwise).
    pub arrow_offset: f64,
}

/// The connecting arrow triangle of a tooltip, in screen coordinates.
///
/// See [`Placement::arrow`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrow {
    /// The point touching (or aimed at) the target.
    pub tip: Point,
    /// First base point on the content frame, the lower cross-axis coordinate.
    pub base_start: Point,
    /// Second base point on the content frame, the higher cross-axis coordinate.
    pub base_end: Point,
}

impl Arrow {
    /// The three points of the triangle, tip first.
    pub const fn points(&self) -> [Point; 3] {
        [self.tip, self.base_start, self.base_end]
    }

    /// Axis-aligned bounds of the triangle.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.base_start, self.base_end).union_pt(self.tip)
    }
}
