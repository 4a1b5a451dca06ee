//! Engine - timing and the serial event loop around the deck.
//!
//! The core crate never reads a clock. This crate supplies the missing half:
//!
//! - [`TickSource`] keeps the one-shot wake-ups scenes ask for, at most one
//!   per deck slot, and hands them back in deadline order.
//! - [`Driver`] owns the deck, the tick source and the grid, and applies
//!   every input event and every due tick one at a time.
//! - [`Clock`] abstracts "now" so the driver can be stepped by hand in tests
//!   ([`ManualClock`]) or run against [`MonotonicClock`].
//!
//! # Example
//!
//! ```
//! use neon_deck_core::{standard_scenes, Deck};
//! use neon_deck_engine::{Clock, Driver, ManualClock};
//! use neon_deck_types::{GRID_HEIGHT, GRID_WIDTH};
//!
//! let deck = Deck::new(standard_scenes(1, GRID_WIDTH, GRID_HEIGHT));
//! let mut driver = Driver::new(deck, GRID_WIDTH, GRID_HEIGHT);
//! let mut clock = ManualClock::new(0);
//!
//! driver.start(clock.now_ms());
//! clock.advance(250);
//! assert!(driver.pump(clock.now_ms()));
//! let grid = driver.frame();
//! assert_eq!(grid.width(), GRID_WIDTH);
//! ```

pub mod driver;
pub mod timer;

pub use neon_deck_core as core;
pub use neon_deck_types as types;

pub use driver::Driver;
pub use timer::{Clock, ManualClock, MonotonicClock, TickSource};
