//! Animation core - pure, deterministic, and testable
//!
//! This crate contains every scene, the numerical primitives they share, and
//! the deck that schedules them. It has **no dependencies** on the terminal,
//! the clock, or any I/O, making it:
//!
//! - **Deterministic**: the same deck seed replays identical animations
//! - **Testable**: every scene can be stepped tick by tick from a test
//! - **Portable**: the grid can be dumped headless or drawn by any front end
//! - **Fast**: steady-state ticks run out of fixed-capacity pools
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size character grid every scene renders into
//! - [`geometry`]: 3D rotation, perspective projection, Bresenham lines
//! - [`spring`]: analytic damped spring for smooth following
//! - [`pool`]: bounded collections of expiring entities
//! - [`particle`]: free-flying particle with age and lifespan
//! - [`color`]: RGB interpolation and the ping-pong progress driver
//! - [`rng`]: seeded per-scene random streams
//! - [`scene`]: the scenes themselves and the closed [`Scene`] enum
//! - [`deck`]: ordered scenes, navigation, and stale-tick filtering
//!
//! # Example
//!
//! ```
//! use neon_deck_core::{standard_scenes, Deck, DeckEvent, DeckOutcome, GridBuffer};
//! use neon_deck_types::{Direction, InputEvent, GRID_HEIGHT, GRID_WIDTH};
//!
//! let mut deck = Deck::new(standard_scenes(42, GRID_WIDTH, GRID_HEIGHT));
//! let first = deck.start().expect("credits animate");
//!
//! // Delivering the ticket advances the credits and asks for the next tick.
//! let outcome = deck.dispatch(DeckEvent::Tick(first.ticket));
//! assert!(matches!(outcome, DeckOutcome::Continue { redraw: true, .. }));
//!
//! // Leaving the slot makes the old ticket stale.
//! deck.dispatch(DeckEvent::Input(InputEvent::Navigate(Direction::Next)));
//! let stale = deck.dispatch(DeckEvent::Tick(first.ticket));
//! assert!(matches!(stale, DeckOutcome::Continue { redraw: false, schedule: None }));
//!
//! let mut grid = GridBuffer::new(GRID_WIDTH, GRID_HEIGHT);
//! deck.render(&mut grid);
//! ```

pub mod color;
pub mod deck;
pub mod geometry;
pub mod grid;
pub mod particle;
pub mod pool;
pub mod rng;
pub mod scene;
pub mod spring;

pub use neon_deck_types as types;

// Re-export commonly used types for convenience
pub use deck::{Deck, DeckEvent, DeckOutcome, ScheduledTick, TickTicket};
pub use geometry::{clip_segment, draw_line, line_points, project, rotate_x, Point3};
pub use grid::{GridBuffer, GridCell};
pub use pool::{Bounds, Ephemeral, Pool};
pub use rng::{derive_seed, SceneRng};
pub use scene::{standard_scenes, Scene, SceneEvent};
pub use spring::{fps, Spring, SpringAxis};
