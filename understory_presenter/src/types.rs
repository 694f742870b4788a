// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the presenter: states, events, effects, timer tokens, and options.

use core::time::Duration;

/// Lifecycle state of a presented overlay.
///
/// See the [crate docs](crate) for the transition table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PresenterState {
    /// Nothing on screen.
    #[default]
    Hidden,
    /// Backdrop shown; content appears when the current timer fires.
    Presenting,
    /// Backdrop and content on screen.
    Shown,
    /// Content hidden; the backdrop goes away when the current timer fires.
    Dismissing,
}

/// Identifies a timer requested through [`PresenterEffect::StartTimer`].
///
/// Every request gets a fresh token. Only the most recent token is acted on, so a
/// host never needs to cancel timers: stale ones are ignored when they fire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub(crate) u64);

impl TimerToken {
    /// Raw token value, for hosts that key their timers by integer.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Input messages for [`Presenter::handle`](crate::Presenter::handle).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PresenterEvent {
    /// The host wants the overlay on screen (its binding became `true`).
    Present,
    /// The host wants the overlay gone (its binding became `false`).
    Dismiss,
    /// The user tapped the backdrop outside of any cut-out.
    BackgroundTapped,
    /// A timer started by [`PresenterEffect::StartTimer`] elapsed.
    TimerFired(TimerToken),
    /// The host's full-screen cover went away on its own (for example a system
    /// gesture), taking the backdrop with it.
    CoverDismissed,
}

/// Side effects the host performs in response to an event, in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PresenterEffect {
    /// Put the full-screen backdrop on screen.
    ShowBackdrop {
        /// Whether the backdrop dims what is behind it.
        dimmed: bool,
    },
    /// Reveal the presented content (card, window, or tooltip).
    ShowContent,
    /// Hide the presented content, leaving the backdrop in place.
    HideContent,
    /// Remove the backdrop.
    HideBackdrop,
    /// Start a one-shot timer and feed [`PresenterEvent::TimerFired`] back when it elapses.
    StartTimer {
        /// Token to echo back.
        token: TimerToken,
        /// How long to wait.
        delay: Duration,
    },
    /// The presentation is over: sync the host binding to `false` and run the
    /// `on_dismiss` callback, if any. Emitted once per presentation.
    Dismissed,
}

/// Default delay between backdrop and content transitions.
pub const DEFAULT_ANIMATION_TIME: Duration = Duration::from_millis(100);

/// Per-presenter options.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PresenterOptions {
    /// Whether the backdrop dims the content behind it. Default `true`.
    pub dimmed: bool,
    /// Whether a background tap dismisses the overlay. Default `true`.
    ///
    /// When `false` the backdrop still swallows taps; views behind the overlay
    /// stay non-interactive while it is up.
    pub tap_background_to_dismiss: bool,
    /// Delay between backdrop and content transitions, in both directions.
    pub animation_time: Duration,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            dimmed: true,
            tap_background_to_dismiss: true,
            animation_time: DEFAULT_ANIMATION_TIME,
        }
    }
}

impl PresenterOptions {
    /// Set whether the backdrop dims.
    #[must_use]
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    /// Set whether a background tap dismisses.
    #[must_use]
    pub fn tap_background_to_dismiss(mut self, enabled: bool) -> Self {
        self.tap_background_to_dismiss = enabled;
        self
    }

    /// Set the transition delay.
    #[must_use]
    pub fn animation_time(mut self, delay: Duration) -> Self {
        self.animation_time = delay;
        self
    }
}
