// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: Kurbo-native tooltip placement.
//!
//! Given the on-screen frame of a target view, the screen bounds, and the measured size of some
//! tooltip content, this crate decides where the tooltip goes:
//!
//! - **Edge resolution**: which side of the target (top, bottom, leading, trailing) has room.
//! - **Position**: where the content is centered, clamped so it stays on-screen.
//! - **Arrow offset**: how far the connecting arrow shifts from the content's center so it
//!   still points at the target after clamping.
//!
//! Every operation is a pure function of its inputs. Nothing is cached between calls and
//! identical inputs always yield an identical [`Placement`], so hosts simply recompute on
//! every layout pass (rotation, keyboard, content resize, ...).
//!
//! ## Not a renderer
//!
//! This crate does not draw bubbles or arrows and does not animate. It hands the renderer a
//! [`Placement`], plus the derived [`Placement::content_frame`] and [`Placement::arrow`]
//! geometry, and leaves styling and timing to the host.
//!
//! ## Coordinates
//!
//! Screen coordinates with the origin at the top-left, y growing downward. Target frames are
//! [`kurbo::Rect`]s, sizes are [`kurbo::Size`]s, and the screen is a [`ScreenBounds`] size
//! injected by the caller rather than looked up globally. `Leading` is the min-x side.
//!
//! ## Degenerate input
//!
//! All operations are total. Zero-sized targets, a zero screen, content larger than the
//! screen, and non-finite values produce defined, if visually imperfect, placements. When no
//! edge has room the resolver silently falls back to `Top`. Hosts typically measure content
//! one layout pass after the target; a zero content size on the first pass is expected and
//! simply yields a provisional placement.
//!
//! ## API overview
//!
//! - [`resolve_edge`]: pick the presentation edge, honoring a forced edge.
//! - [`compute_center`]: clamped content center for an edge.
//! - [`compute_arrow_offset`]: arrow displacement for a clamped center.
//! - [`place`]: all three steps at once.
//! - [`PlacementConfig`]: spacing, edge priority, and fallback shared by a UI.
//! - [`available_edges`] / [`available_space`]: inspect the room around a target.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_placement::{Edge, place};
//!
//! let screen = Size::new(400.0, 800.0);
//! let content = Size::new(100.0, 50.0);
//!
//! // A target in the top-left corner has no room above, so the tooltip goes below.
//! // Its ideal x (20) is clamped to 60, and the arrow shifts left to keep pointing
//! // at the target.
//! let target = Rect::from_origin_size((10.0, 10.0), (20.0, 20.0));
//! let p = place(target, screen, content, 10.0, None);
//! assert_eq!(p.edge, Edge::Bottom);
//! assert_eq!(p.center, Point::new(60.0, 65.0));
//! assert_eq!(p.arrow_offset, -40.0);
//!
//! let arrow = p.arrow(content, 20.0);
//! assert_eq!(arrow.tip, Point::new(20.0, 30.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod arrow;
mod config;
mod edge;
mod position;
mod types;

pub use arrow::compute_arrow_offset;
pub use config::{DEFAULT_SPACING, PlacementConfig, place};
pub use edge::{available_edges, available_space, fits, resolve_edge};
pub use position::{clamp_axis, compute_center, ideal_center};
pub use types::{Arrow, Edge, EdgeSet, Placement, ScreenBounds};
