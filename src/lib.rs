//! Neon Deck (workspace facade crate).
//!
//! Re-exports the member crates under stable module names so the binary,
//! the integration tests and the benches can write `neon_deck::{core, engine,
//! input, term, types}` while the implementation lives under `crates/`.

pub mod config;

pub use neon_deck_core as core;
pub use neon_deck_engine as engine;
pub use neon_deck_input as input;
pub use neon_deck_term as term;
pub use neon_deck_types as types;

pub use config::{build_default_deck, parse_args, DeckConfig};
