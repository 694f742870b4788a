// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presenter state machine.

use alloc::vec::Vec;

use crate::types::{PresenterEffect, PresenterEvent, PresenterOptions, PresenterState, TimerToken};

/// Sequences the appearance and dismissal of an overlay.
///
/// Presenting shows the backdrop first and the content one
/// [`animation_time`](PresenterOptions::animation_time) later; dismissing hides the
/// content first and the backdrop one `animation_time` later. The presenter never
/// waits itself: it asks the host to start timers via [`PresenterEffect::StartTimer`]
/// and expects [`PresenterEvent::TimerFired`] back.
///
/// Events that do not apply to the current state are ignored and produce no effects.
#[derive(Clone, Debug)]
pub struct Presenter {
    state: PresenterState,
    options: PresenterOptions,
    next_token: u64,
    pending: Option<TimerToken>,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(PresenterOptions::default())
    }
}

impl Presenter {
    /// Create a hidden presenter.
    pub fn new(options: PresenterOptions) -> Self {
        Self {
            state: PresenterState::Hidden,
            options,
            next_token: 0,
            pending: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PresenterState {
        self.state
    }

    /// Options this presenter was created with.
    pub fn options(&self) -> &PresenterOptions {
        &self.options
    }

    /// Replace the options. Takes effect on the next transition.
    pub fn set_options(&mut self, options: PresenterOptions) {
        self.options = options;
    }

    /// The value the host binding should hold: true while presenting or shown.
    pub fn is_presented(&self) -> bool {
        matches!(
            self.state,
            PresenterState::Presenting | PresenterState::Shown
        )
    }

    /// True while the backdrop is on screen.
    pub fn is_backdrop_visible(&self) -> bool {
        self.state != PresenterState::Hidden
    }

    /// True while the content is on screen.
    pub fn is_content_visible(&self) -> bool {
        self.state == PresenterState::Shown
    }

    /// The timer the presenter is currently waiting for, if any.
    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Mirror a host binding: `true` presents, `false` dismisses.
    pub fn set_presented(&mut self, presented: bool) -> Vec<PresenterEffect> {
        self.handle(if presented {
            PresenterEvent::Present
        } else {
            PresenterEvent::Dismiss
        })
    }

    /// Feed an event and return the effects for the host to perform, in order.
    pub fn handle(&mut self, event: PresenterEvent) -> Vec<PresenterEffect> {
        use PresenterEvent as E;
        use PresenterState as S;

        let mut out = Vec::new();
        let from = self.state;
        match (from, event) {
            (S::Hidden, E::Present) => {
                out.push(PresenterEffect::ShowBackdrop {
                    dimmed: self.options.dimmed,
                });
                out.push(self.start_timer());
                self.state = S::Presenting;
            }
            // Re-presenting mid-dismissal keeps the backdrop and restarts the reveal.
            (S::Dismissing, E::Present) => {
                out.push(self.start_timer());
                self.state = S::Presenting;
            }
            (S::Presenting | S::Shown, E::Dismiss) => self.begin_dismiss(&mut out),
            (S::Presenting | S::Shown, E::BackgroundTapped) => {
                if self.options.tap_background_to_dismiss {
                    self.begin_dismiss(&mut out);
                }
            }
            (S::Presenting | S::Dismissing, E::TimerFired(token)) => {
                if self.pending != Some(token) {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(?token, pending = ?self.pending, "ignoring stale presenter timer");
                    return out;
                }
                self.pending = None;
                if from == S::Presenting {
                    out.push(PresenterEffect::ShowContent);
                    self.state = S::Shown;
                } else {
                    out.push(PresenterEffect::HideBackdrop);
                    out.push(PresenterEffect::Dismissed);
                    self.state = S::Hidden;
                }
            }
            (S::Presenting | S::Shown | S::Dismissing, E::CoverDismissed) => {
                if from == S::Shown {
                    out.push(PresenterEffect::HideContent);
                }
                out.push(PresenterEffect::Dismissed);
                self.pending = None;
                self.state = S::Hidden;
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(state = ?from, ?event, "presenter event has no effect");
            }
        }

        #[cfg(feature = "tracing")]
        {
            if self.state != from {
                tracing::debug!(?from, to = ?self.state, ?event, "presenter transition");
            }
        }
        out
    }

    fn begin_dismiss(&mut self, out: &mut Vec<PresenterEffect>) {
        if self.state == PresenterState::Shown {
            out.push(PresenterEffect::HideContent);
        }
        out.push(self.start_timer());
        self.state = PresenterState::Dismissing;
    }

    fn start_timer(&mut self) -> PresenterEffect {
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(token);
        PresenterEffect::StartTimer {
            token,
            delay: self.options.animation_time,
        }
    }
}
