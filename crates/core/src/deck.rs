//! Deck - ordered scenes, navigation, and tick routing.
//!
//! The deck owns every scene and knows which one is active. Scenes never see
//! a timer: they return a [`TickRequest`] and the deck wraps it in a
//! [`ScheduledTick`] carrying a [`TickTicket`]. A ticket names the slot and
//! the activation epoch it was issued for; a tick whose ticket no longer
//! matches the active slot's epoch is dropped without touching any scene.
//!
//! Inactive scenes are paused, not reset. Coming back to a slot calls
//! [`Scene::activate`] again, which resumes the animation where it stopped.

use crate::grid::GridBuffer;
use crate::scene::{Scene, SceneEvent, StaticContent};
use crate::types::{Direction, InputEvent, TickRequest};

/// Identity of one scheduled tick: the slot it targets and the activation
/// it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickTicket {
    pub slot: usize,
    pub epoch: u64,
}

/// A tick the caller should deliver back after `interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub ticket: TickTicket,
    pub interval_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    Tick(TickTicket),
    Input(InputEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckOutcome {
    Continue {
        schedule: Option<ScheduledTick>,
        redraw: bool,
    },
    Quit,
}

impl DeckOutcome {
    const IGNORED: DeckOutcome = DeckOutcome::Continue {
        schedule: None,
        redraw: false,
    };
}

#[derive(Debug, Clone)]
pub struct Deck {
    scenes: Vec<Scene>,
    current: usize,
    epoch: u64,
}

impl Deck {
    /// Build a deck; an empty list gets a single placeholder slide so the
    /// current index is always valid.
    pub fn new(mut scenes: Vec<Scene>) -> Self {
        if scenes.is_empty() {
            scenes.push(Scene::Content(StaticContent::new(
                "Empty deck",
                "There are no scenes to show.",
            )));
        }
        Self {
            scenes,
            current: 0,
            epoch: 0,
        }
    }

    /// Pick the starting slot (clamped to the last scene).
    pub fn with_start(mut self, index: usize) -> Self {
        self.current = index.min(self.scenes.len() - 1);
        self
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn active(&self) -> &Scene {
        &self.scenes[self.current]
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.scenes.iter().map(Scene::title)
    }

    /// Activate the starting slot. Call once before dispatching anything.
    pub fn start(&mut self) -> Option<ScheduledTick> {
        self.activate_current()
    }

    /// Move one slot in `direction`. Returns `None` at either end (no
    /// wraparound) or when the newly active scene does not animate.
    pub fn navigate(&mut self, direction: Direction) -> Option<ScheduledTick> {
        let target = self.current as isize + direction.delta();
        if target < 0 || target as usize >= self.scenes.len() {
            return None;
        }
        self.current = target as usize;
        log::debug!(
            "deck: slot {} ({})",
            self.current,
            self.scenes[self.current].title()
        );
        self.activate_current()
    }

    fn activate_current(&mut self) -> Option<ScheduledTick> {
        self.epoch += 1;
        let request = self.scenes[self.current].activate();
        self.schedule(request)
    }

    fn schedule(&self, request: Option<TickRequest>) -> Option<ScheduledTick> {
        request.map(|r| ScheduledTick {
            ticket: TickTicket {
                slot: self.current,
                epoch: self.epoch,
            },
            interval_ms: r.interval_ms,
        })
    }

    /// Whether `ticket` still addresses the live activation of the active slot.
    pub fn is_current(&self, ticket: TickTicket) -> bool {
        ticket.slot == self.current && ticket.epoch == self.epoch
    }

    pub fn dispatch(&mut self, event: DeckEvent) -> DeckOutcome {
        match event {
            DeckEvent::Tick(ticket) => {
                if !self.is_current(ticket) {
                    log::trace!("deck: stale tick {:?} dropped", ticket);
                    return DeckOutcome::IGNORED;
                }
                let request = self.scenes[self.current].advance(SceneEvent::Tick);
                DeckOutcome::Continue {
                    schedule: self.schedule(request),
                    redraw: true,
                }
            }
            DeckEvent::Input(InputEvent::Quit) => DeckOutcome::Quit,
            DeckEvent::Input(InputEvent::Navigate(direction)) => {
                let before = self.current;
                let schedule = self.navigate(direction);
                DeckOutcome::Continue {
                    schedule,
                    redraw: self.current != before,
                }
            }
            DeckEvent::Input(input) => {
                if !self.scenes[self.current].consumes(input) {
                    return DeckOutcome::IGNORED;
                }
                let request = self.scenes[self.current].advance(SceneEvent::Input(input));
                DeckOutcome::Continue {
                    schedule: self.schedule(request),
                    redraw: true,
                }
            }
        }
    }

    /// Clear `grid` and draw the active scene into it.
    pub fn render(&self, grid: &mut GridBuffer) {
        grid.clear();
        self.active().render(grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{BarGrowth, CursorTrail, ParticleField, RunnerGame};
    use crate::rng::SceneRng;
    use crate::types::{BARS_TICK_MS, PARTICLES_TICK_MS};

    fn content(title: &str) -> Scene {
        Scene::Content(StaticContent::new(title, "body"))
    }

    fn particles() -> Scene {
        Scene::Particles(ParticleField::new(60, 16, SceneRng::new(1)))
    }

    fn expect_schedule(outcome: DeckOutcome) -> ScheduledTick {
        match outcome {
            DeckOutcome::Continue {
                schedule: Some(s), ..
            } => s,
            other => panic!("expected a schedule, got {other:?}"),
        }
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut deck = Deck::new(vec![content("a"), content("b"), content("c")]);
        deck.start();
        for _ in 0..3 {
            deck.navigate(Direction::Next);
        }
        assert_eq!(deck.current_index(), 2);
        for _ in 0..5 {
            deck.navigate(Direction::Previous);
        }
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn boundary_navigation_requests_no_redraw() {
        let mut deck = Deck::new(vec![content("a"), content("b")]);
        deck.start();
        let outcome = deck.dispatch(DeckEvent::Input(InputEvent::Navigate(Direction::Previous)));
        assert_eq!(outcome, DeckOutcome::IGNORED);
        let outcome = deck.dispatch(DeckEvent::Input(InputEvent::Navigate(Direction::Next)));
        assert_eq!(
            outcome,
            DeckOutcome::Continue {
                schedule: None,
                redraw: true
            }
        );
    }

    #[test]
    fn ticks_for_an_old_activation_are_discarded() {
        let mut deck = Deck::new(vec![particles(), content("b")]);
        let first = deck.start().expect("particles animate");
        assert_eq!(first.interval_ms, PARTICLES_TICK_MS);

        deck.navigate(Direction::Next);
        let back = deck.navigate(Direction::Previous).expect("resumes");
        assert_eq!(back.ticket.slot, first.ticket.slot);
        assert_ne!(back.ticket.epoch, first.ticket.epoch);

        let before = match deck.active() {
            Scene::Particles(p) => p.ticks(),
            _ => unreachable!(),
        };
        assert_eq!(deck.dispatch(DeckEvent::Tick(first.ticket)), DeckOutcome::IGNORED);
        let after = match deck.active() {
            Scene::Particles(p) => p.ticks(),
            _ => unreachable!(),
        };
        assert_eq!(before, after);

        let next = expect_schedule(deck.dispatch(DeckEvent::Tick(back.ticket)));
        assert_eq!(next.ticket, back.ticket);
    }

    #[test]
    fn inactive_scenes_do_not_advance() {
        let bars = BarGrowth::new("bars", &[("x", 30)], 35, SceneRng::new(5));
        let mut deck = Deck::new(vec![Scene::Bars(bars), content("b")]);
        let tick = deck.start().expect("bars animate");
        assert_eq!(tick.interval_ms, BARS_TICK_MS);
        deck.dispatch(DeckEvent::Tick(tick.ticket));

        deck.navigate(Direction::Next);
        deck.dispatch(DeckEvent::Tick(tick.ticket));
        match &deck.scenes()[0] {
            Scene::Bars(b) => assert!(b.values()[0] <= 2),
            _ => unreachable!(),
        }
    }

    #[test]
    fn unconsumed_input_requests_no_redraw() {
        let mut deck = Deck::new(vec![content("a"), Scene::Trail(CursorTrail::new(60, 16))]);
        deck.start();
        let pointer = InputEvent::Pointer { x: 3, y: 4, click: false };
        assert_eq!(deck.dispatch(DeckEvent::Input(pointer)), DeckOutcome::IGNORED);
        assert_eq!(deck.dispatch(DeckEvent::Input(InputEvent::Jump)), DeckOutcome::IGNORED);

        deck.navigate(Direction::Next);
        assert_eq!(
            deck.dispatch(DeckEvent::Input(pointer)),
            DeckOutcome::Continue {
                schedule: None,
                redraw: true
            }
        );
        assert_eq!(deck.dispatch(DeckEvent::Input(InputEvent::Restart)), DeckOutcome::IGNORED);
    }

    #[test]
    fn runner_redraws_only_for_accepted_jumps() {
        let runner = RunnerGame::new(60, 16, SceneRng::new(2));
        let mut deck = Deck::new(vec![Scene::Runner(runner)]);
        deck.start();
        let first = deck.dispatch(DeckEvent::Input(InputEvent::Jump));
        assert!(matches!(first, DeckOutcome::Continue { redraw: true, .. }));
        // Already airborne.
        assert_eq!(deck.dispatch(DeckEvent::Input(InputEvent::Jump)), DeckOutcome::IGNORED);
        // Not game over.
        assert_eq!(deck.dispatch(DeckEvent::Input(InputEvent::Restart)), DeckOutcome::IGNORED);
    }

    #[test]
    fn quit_is_reported() {
        let mut deck = Deck::new(vec![content("a")]);
        assert_eq!(deck.dispatch(DeckEvent::Input(InputEvent::Quit)), DeckOutcome::Quit);
    }

    #[test]
    fn empty_deck_gets_a_placeholder() {
        let mut deck = Deck::new(Vec::new());
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.start(), None);
        let mut grid = GridBuffer::new(60, 16);
        deck.render(&mut grid);
        assert!(grid.row_text(0).contains("Empty deck"));
    }

    #[test]
    fn start_slot_is_clamped() {
        let deck = Deck::new(vec![content("a"), content("b")]).with_start(9);
        assert_eq!(deck.current_index(), 1);
        assert_eq!(deck.titles().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
