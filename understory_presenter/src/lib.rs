// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_presenter --heading-base-level=0

//! Understory Presenter: a deterministic, `no_std` lifecycle for overlays.
//!
//! ## Overview
//!
//! Cards, windows, and tooltips are presented in two stages: a full-screen backdrop appears,
//! then the content follows once the backdrop's transition has had time to run. Dismissal runs
//! the same stages in reverse. This crate models that sequencing as an explicit state machine,
//! [`Presenter`], driven by messages.
//! It does not render, animate, or keep time.
//! Instead, feed it [`PresenterEvent`]s and perform the [`PresenterEffect`]s it returns.
//!
//! ## States
//!
//! | State | Event | Next | Effects |
//! |---|---|---|---|
//! | `Hidden` | `Present` | `Presenting` | `ShowBackdrop`, `StartTimer` |
//! | `Presenting` | `TimerFired` (current) | `Shown` | `ShowContent` |
//! | `Presenting`, `Shown` | `Dismiss` | `Dismissing` | `HideContent` (if shown), `StartTimer` |
//! | `Presenting`, `Shown` | `BackgroundTapped` | as `Dismiss` if enabled, else unchanged | as `Dismiss` |
//! | `Dismissing` | `TimerFired` (current) | `Hidden` | `HideBackdrop`, `Dismissed` |
//! | `Dismissing` | `Present` | `Presenting` | `StartTimer` |
//! | not `Hidden` | `CoverDismissed` | `Hidden` | `HideContent` (if shown), `Dismissed` |
//!
//! Every other combination is ignored. Each timer request carries a fresh [`TimerToken`] and only
//! the latest one is honored, so a quick present → dismiss → present never lets an old timer tear
//! down the new presentation.
//!
//! ## Backdrop
//!
//! [`Backdrop`] describes the full-screen layer: whether it dims, and which regions are cut out.
//! For tooltips the target and the tooltip are cut out, using a
//! [`Placement`](understory_placement::Placement) from `understory_placement`. Use
//! [`Backdrop::is_background_hit`] to turn a tap into [`PresenterEvent::BackgroundTapped`].
//!
//! ## Example
//!
//! ```
//! use understory_presenter::{Presenter, PresenterEffect, PresenterEvent, PresenterOptions};
//!
//! let mut presenter = Presenter::new(PresenterOptions::default());
//!
//! // The host binding flips to true.
//! let effects = presenter.set_presented(true);
//! let token = effects
//!     .iter()
//!     .find_map(|e| match e {
//!         PresenterEffect::StartTimer { token, .. } => Some(*token),
//!         _ => None,
//!     })
//!     .unwrap();
//!
//! // ... the host's timer elapses.
//! let effects = presenter.handle(PresenterEvent::TimerFired(token));
//! assert_eq!(effects, vec![PresenterEffect::ShowContent]);
//! assert!(presenter.is_content_visible());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod backdrop;
mod presenter;
mod types;

pub use backdrop::Backdrop;
pub use presenter::Presenter;
pub use types::{
    DEFAULT_ANIMATION_TIME, PresenterEffect, PresenterEvent, PresenterOptions, PresenterState,
    TimerToken,
};
