// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounce as an explicit, cancellable timer.
//!
//! Each `schedule` invalidates the previous timer and hands back a fresh
//! `TimerHandle`. Nothing fires by itself: the owner calls `fire_due(now)`
//! whenever it gets a chance (a JS `setTimeout` callback, a test advancing a
//! clock) and receives the payload only if the current timer has expired.
//! At most one timer is ever pending.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Milliseconds on some monotonic timeline.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock for native builds.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Identifies one scheduled timer. Stale once another timer is scheduled or
/// the pending one is cancelled or fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    generation: u64,
    deadline_ms: u64,
}

impl TimerHandle {
    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }
}

#[derive(Debug)]
struct Pending<T> {
    handle: TimerHandle,
    payload: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay_ms: u64,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay_ms: delay.as_millis() as u64,
            generation: 0,
            pending: None,
        }
    }

    /// Replace any pending timer with one firing `delay` after `now_ms`.
    pub fn schedule(&mut self, payload: T, now_ms: u64) -> TimerHandle {
        self.generation += 1;
        let handle = TimerHandle {
            generation: self.generation,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
        };
        // INVARIANT: at most one search is pending
        self.pending = Some(Pending { handle, payload });
        handle
    }

    /// Drop the pending timer, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Take the payload if the pending timer has expired.
    pub fn fire_due(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.handle.deadline_ms => self.pending.take().map(|p| p.payload),
            _ => None,
        }
    }

    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.handle.generation == handle.generation)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.handle.deadline_ms)
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}
