//! Tick source: pending one-shot wake-ups keyed by deck slot.

use std::time::{Duration, Instant};

use neon_deck_core::TickTicket;

/// Milliseconds on some monotonic timeline.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by [`Instant`], starting at zero.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and headless runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: start_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    pub fn set(&mut self, ms: u64) {
        self.now = ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    ticket: TickTicket,
    deadline_ms: u64,
}

/// At most one pending tick per slot; scheduling again replaces it.
///
/// Requests are one-shot. A scene that keeps animating must ask again from
/// inside the tick it is handling.
#[derive(Debug, Clone, Default)]
pub struct TickSource {
    pending: Vec<Pending>,
}

impl TickSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Arm `ticket` to fire `interval_ms` after `now_ms` (never sooner than
    /// one millisecond, so a zero interval cannot spin the pump).
    pub fn schedule(&mut self, ticket: TickTicket, interval_ms: u32, now_ms: u64) {
        let deadline_ms = now_ms + u64::from(interval_ms.max(1));
        let entry = Pending {
            ticket,
            deadline_ms,
        };
        match self.pending.iter_mut().find(|p| p.ticket.slot == ticket.slot) {
            Some(slot) => *slot = entry,
            None => self.pending.push(entry),
        }
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.deadline_ms).min()
    }

    /// Remove and return the earliest ticket due at `now_ms` (ties go to the
    /// lower slot).
    pub fn pop_due(&mut self, now_ms: u64) -> Option<TickTicket> {
        let (index, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline_ms <= now_ms)
            .min_by_key(|(_, p)| (p.deadline_ms, p.ticket.slot))?;
        Some(self.pending.swap_remove(index).ticket)
    }

    /// How long the caller may sleep before the next deadline.
    pub fn time_until_next(&self, now_ms: u64) -> Option<Duration> {
        self.next_deadline()
            .map(|d| Duration::from_millis(d.saturating_sub(now_ms)))
    }
}
