//! Driver: the single serial context that owns the deck, its pending ticks
//! and the grid the active scene draws into.

use std::ops::ControlFlow;
use std::time::Duration;

use neon_deck_core::{Deck, DeckEvent, DeckOutcome, GridBuffer, ScheduledTick};
use neon_deck_types::InputEvent;

use crate::timer::TickSource;

#[derive(Debug, Clone)]
pub struct Driver {
    deck: Deck,
    ticks: TickSource,
    grid: GridBuffer,
    dirty: bool,
}

impl Driver {
    pub fn new(deck: Deck, width: u16, height: u16) -> Self {
        Self {
            deck,
            ticks: TickSource::new(),
            grid: GridBuffer::new(width, height),
            dirty: true,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn ticks(&self) -> &TickSource {
        &self.ticks
    }

    /// Activate the starting scene and arm its first tick.
    pub fn start(&mut self, now_ms: u64) {
        let schedule = self.deck.start();
        log::info!(
            "driver: starting at slot {} ({})",
            self.deck.current_index(),
            self.deck.active().title()
        );
        self.arm_and_mark(schedule, true, now_ms);
    }

    fn arm_and_mark(&mut self, schedule: Option<ScheduledTick>, redraw: bool, now_ms: u64) {
        if let Some(s) = schedule {
            self.ticks.schedule(s.ticket, s.interval_ms, now_ms);
        }
        self.dirty |= redraw;
    }

    /// Route one input event. `Break` means the user asked to quit.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> ControlFlow<()> {
        match self.deck.dispatch(DeckEvent::Input(event)) {
            DeckOutcome::Quit => {
                log::info!("driver: quit requested");
                ControlFlow::Break(())
            }
            DeckOutcome::Continue { schedule, redraw } => {
                self.arm_and_mark(schedule, redraw, now_ms);
                ControlFlow::Continue(())
            }
        }
    }

    /// Deliver every tick due at `now_ms`, one at a time. Returns whether
    /// the grid needs redrawing.
    pub fn pump(&mut self, now_ms: u64) -> bool {
        while let Some(ticket) = self.ticks.pop_due(now_ms) {
            match self.deck.dispatch(DeckEvent::Tick(ticket)) {
                DeckOutcome::Continue { schedule, redraw } => {
                    if !redraw {
                        log::trace!("driver: tick for slot {} had no effect", ticket.slot);
                    }
                    self.arm_and_mark(schedule, redraw, now_ms);
                }
                DeckOutcome::Quit => {
                    log::warn!("driver: tick for slot {} asked to quit, ignored", ticket.slot);
                }
            }
        }
        self.dirty
    }

    /// How long the input poll may block before the next tick is due.
    pub fn timeout(&self, now_ms: u64) -> Option<Duration> {
        self.ticks.time_until_next(now_ms)
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Render the active scene and hand back the grid.
    pub fn frame(&mut self) -> &GridBuffer {
        if self.dirty {
            self.deck.render(&mut self.grid);
            self.dirty = false;
        }
        &self.grid
    }

    pub fn grid(&self) -> &GridBuffer {
        &self.grid
    }
}
