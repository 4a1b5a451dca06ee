//! Terminal output for the deck.
//!
//! A small rendering layer that avoids widget toolkits: the active scene's
//! grid is mapped into a styled framebuffer and flushed to the terminal as a
//! diff against the previous frame.
//!
//! - [`fb`]: the styled framebuffer
//! - [`deck_view`]: header, rounded frame, tag palette, `[n/N]` footer
//! - [`renderer`]: alternate screen, mouse capture, diff flushing

pub mod deck_view;
pub mod fb;
pub mod renderer;

pub use neon_deck_core as core;
pub use neon_deck_types as types;

pub use deck_view::{style_for, DeckView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
