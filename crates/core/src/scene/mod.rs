//! Scenes - self-contained animated state machines.
//!
//! The scene set is fixed at compile time, so [`Scene`] is a closed enum that
//! forwards to the concrete structs. Every variant follows the same contract:
//!
//! - [`Scene::activate`] runs whenever the scene becomes the active slot. It is
//!   idempotent: reactivating never resets progress, it only asks for a tick
//!   again if the animation is still running.
//! - [`Scene::advance`] consumes one [`SceneEvent`] and returns the follow-up
//!   tick request, if any. Ticks are never implicit.
//! - [`Scene::render`] is a pure function of the current state.

pub mod bars;
pub mod content;
pub mod credits;
pub mod gradient;
pub mod particles;
pub mod runner;
pub mod trail;
pub mod wireframe;

pub use bars::BarGrowth;
pub use content::StaticContent;
pub use credits::CreditsScroll;
pub use gradient::ColorGradient;
pub use particles::ParticleField;
pub use runner::{JumpPhase, Obstacle, Rect, RunnerGame};
pub use trail::CursorTrail;
pub use wireframe::WireframeStarfield;

use crate::grid::GridBuffer;
use crate::rng::{derive_seed, SceneRng};
use crate::types::{CellTag, InputEvent, TickRequest};

/// Event routed to the active scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// One configured interval has elapsed.
    Tick,
    Input(InputEvent),
}

/// All scene kinds a deck can hold.
#[derive(Debug, Clone)]
pub enum Scene {
    Credits(CreditsScroll),
    Content(StaticContent),
    Bars(BarGrowth),
    Particles(ParticleField),
    Gradient(ColorGradient),
    Wireframe(WireframeStarfield),
    Runner(RunnerGame),
    Trail(CursorTrail),
}

impl Scene {
    pub fn title(&self) -> &str {
        match self {
            Scene::Credits(s) => s.title(),
            Scene::Content(s) => s.title(),
            Scene::Bars(s) => s.title(),
            Scene::Particles(s) => s.title(),
            Scene::Gradient(s) => s.title(),
            Scene::Wireframe(s) => s.title(),
            Scene::Runner(s) => s.title(),
            Scene::Trail(s) => s.title(),
        }
    }

    pub fn activate(&mut self) -> Option<TickRequest> {
        match self {
            Scene::Credits(s) => s.activate(),
            Scene::Content(s) => s.activate(),
            Scene::Bars(s) => s.activate(),
            Scene::Particles(s) => s.activate(),
            Scene::Gradient(s) => s.activate(),
            Scene::Wireframe(s) => s.activate(),
            Scene::Runner(s) => s.activate(),
            Scene::Trail(s) => s.activate(),
        }
    }

    pub fn advance(&mut self, event: SceneEvent) -> Option<TickRequest> {
        match self {
            Scene::Credits(s) => s.advance(event),
            Scene::Content(s) => s.advance(event),
            Scene::Bars(s) => s.advance(event),
            Scene::Particles(s) => s.advance(event),
            Scene::Gradient(s) => s.advance(event),
            Scene::Wireframe(s) => s.advance(event),
            Scene::Runner(s) => s.advance(event),
            Scene::Trail(s) => s.advance(event),
        }
    }

    pub fn render(&self, grid: &mut GridBuffer) {
        match self {
            Scene::Credits(s) => s.render(grid),
            Scene::Content(s) => s.render(grid),
            Scene::Bars(s) => s.render(grid),
            Scene::Particles(s) => s.render(grid),
            Scene::Gradient(s) => s.render(grid),
            Scene::Wireframe(s) => s.render(grid),
            Scene::Runner(s) => s.render(grid),
            Scene::Trail(s) => s.render(grid),
        }
    }

    /// Whether `input` would change this scene's state. Inputs a scene
    /// ignores need no redraw.
    pub fn consumes(&self, input: InputEvent) -> bool {
        match self {
            Scene::Runner(s) => s.consumes(input),
            Scene::Trail(_) => matches!(input, InputEvent::Pointer { .. }),
            _ => false,
        }
    }

    /// Whether the scene still wants ticks (terminal states return `false`).
    pub fn is_animating(&self) -> bool {
        match self {
            Scene::Credits(s) => s.is_animating(),
            Scene::Content(_) => false,
            Scene::Bars(s) => s.is_animating(),
            Scene::Particles(_) => true,
            Scene::Gradient(_) => true,
            Scene::Wireframe(_) => true,
            Scene::Runner(s) => s.is_animating(),
            Scene::Trail(_) => true,
        }
    }
}

/// The standard demo deck, in presentation order.
pub fn standard_scenes(seed: u64, width: u16, height: u16) -> Vec<Scene> {
    let rng = |slot| SceneRng::new(derive_seed(seed, slot));
    vec![
        Scene::Credits(CreditsScroll::new(credits::default_credits(), height)),
        Scene::Content(StaticContent::new(
            "Navigating the deck",
            "A small deck of terminal animations.\n\n\
             Use the left and right arrows (or h / l) to move between slides. \
             Space jumps in the runner, r restarts it, and the mouse drives the \
             cursor trail.\n\nPress q to quit.",
        )),
        Scene::Bars(BarGrowth::new(
            "Throughput per project",
            &[
                ("Project A", 22),
                ("Project B", 16),
                ("Project C", 31),
                ("Project D", 18),
                ("Project E", 27),
            ],
            35,
            rng(2),
        )),
        Scene::Particles(ParticleField::new(width, height, rng(3))),
        Scene::Gradient(ColorGradient::default()),
        Scene::Wireframe(WireframeStarfield::new(width, height, rng(5))),
        Scene::Runner(RunnerGame::new(width, height, rng(6))),
        Scene::Trail(CursorTrail::new(width, height)),
    ]
}

/// Word-wrap `text` into lines of at most `width` characters.
///
/// Explicit newlines are kept; words longer than `width` are hard-split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0usize;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if line_len > 0 {
                    out.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                out.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > width && line_len > 0 {
                out.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }
        out.push(line);
    }
    out
}

/// Title bar on row 0: the whole row tagged, text centered.
pub(crate) fn draw_title(grid: &mut GridBuffer, title: &str) {
    grid.fill_row(0, ' ', CellTag::Title);
    grid.put_str_centered(0, title, CellTag::Title);
}
