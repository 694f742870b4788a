// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presenter lifecycle driven by a fake clock.
//!
//! Presents a card, dismisses it by tapping the backdrop, and prints every effect
//! the host would perform. Timers are simulated by a queue sorted by due time.
//!
//! Run:
//! - `cargo run -p understory_examples --example presenter_lifecycle`

use std::time::Duration;

use kurbo::{Point, Size};
use understory_presenter::{
    Backdrop, Presenter, PresenterEffect, PresenterEvent, PresenterOptions, TimerToken,
};

struct Host {
    now: Duration,
    timers: Vec<(Duration, TimerToken)>,
}

impl Host {
    fn perform(&mut self, effects: Vec<PresenterEffect>) {
        for effect in effects {
            println!("  [{:>4} ms] {effect:?}", self.now.as_millis());
            if let PresenterEffect::StartTimer { token, delay } = effect {
                self.timers.push((self.now + delay, token));
                self.timers.sort_by_key(|&(due, _)| std::cmp::Reverse(due));
            }
        }
    }

    fn run_timers(&mut self, presenter: &mut Presenter) {
        while let Some((due, token)) = self.timers.pop() {
            self.now = due;
            let effects = presenter.handle(PresenterEvent::TimerFired(token));
            self.perform(effects);
        }
    }
}

fn main() {
    let screen = Size::new(400.0, 800.0);
    let options = PresenterOptions::default().animation_time(Duration::from_millis(150));
    let mut presenter = Presenter::new(options);
    let backdrop = Backdrop::full_screen(screen, options.dimmed);
    let mut host = Host {
        now: Duration::ZERO,
        timers: Vec::new(),
    };

    println!("present:");
    let effects = presenter.set_presented(true);
    host.perform(effects);
    host.run_timers(&mut presenter);
    println!("state: {:?}", presenter.state());

    println!("tap backdrop:");
    let tap = Point::new(30.0, 700.0);
    if backdrop.is_background_hit(tap) {
        let effects = presenter.handle(PresenterEvent::BackgroundTapped);
        host.perform(effects);
    }
    host.run_timers(&mut presenter);
    println!("state: {:?}", presenter.state());
    assert!(!presenter.is_backdrop_visible(), "backdrop should be gone");
}
