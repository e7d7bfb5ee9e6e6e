// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the search box state machine.
//!
//! Replays arbitrary event sequences (typing, waiting, keys, clicks) and
//! checks the focus and panel invariants after every step.

#![no_main]

use arbitrary::Arbitrary;
use hubsearch::testing::bundled_index;
use hubsearch::{Focus, Key, ManualClock, SearchConfig, SearchController, Searcher};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

#[derive(Debug, Arbitrary)]
enum Event {
    Input(String),
    Wait(u16),
    Down,
    Up,
    Escape,
    Focus,
    Click { inside: bool },
}

fuzz_target!(|events: Vec<Event>| {
    let clock = ManualClock::new();
    let searcher = Searcher::new(Arc::new(bundled_index()), SearchConfig::default());
    let mut controller = SearchController::new(searcher, "/subjects/biology/index.html", clock.clone());

    for event in events.into_iter().take(64) {
        match event {
            Event::Input(value) => {
                let value: String = value.chars().take(40).collect();
                controller.on_input(&value);
            }
            Event::Wait(ms) => {
                clock.advance(ms as u64);
                controller.poll();
            }
            Event::Down => {
                controller.on_key(Key::ArrowDown);
            }
            Event::Up => {
                controller.on_key(Key::ArrowUp);
            }
            Event::Escape => {
                controller.on_key(Key::Escape);
            }
            Event::Focus => controller.on_focus(),
            Event::Click { inside } => controller.on_pointer_down(inside),
        }

        // INVARIANT: a focused result always exists and is visible
        if let Focus::Result(i) = controller.focus() {
            assert!(controller.is_open());
            assert!(i < controller.results().len());
        }
        assert!(controller.results().len() <= SearchConfig::default().max_results);
        assert!(controller.results().iter().all(|r| r.href.starts_with("../../")));
    }
});
