//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events onto the small closed set of
//! [`crate::types::InputEvent`]s the deck understands. Nothing here knows
//! about scenes; unmapped keys simply produce `None`.

pub mod map;

pub use neon_deck_types as types;

pub use map::{map_key, map_mouse, should_quit};
