//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the deck.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the tick driver and the terminal layer alike.
//!
//! # Grid Dimensions
//!
//! Every scene renders into one fixed-size grid:
//!
//! - **Width**: 60 columns (indexed 0-59)
//! - **Height**: 16 rows (indexed 0-15)
//!
//! # Tick Intervals
//!
//! Scenes ask for their own cadence (milliseconds):
//!
//! | Constant | Value | Scene |
//! |----------|-------|-------|
//! | `CREDITS_TICK_MS` | 250 | Credits scroll |
//! | `BARS_TICK_MS` | 100 | Bar chart growth |
//! | `PARTICLES_TICK_MS` | 50 | Particle field |
//! | `GRADIENT_TICK_MS` | 100 | Color gradient |
//! | `WIREFRAME_TICK_MS` | 80 | Wireframe cube + starfield |
//! | `RUNNER_TICK_MS` | 100 | Runner game |
//! | `TRAIL_TICK_MS` | 33 | Cursor trail (~30 FPS) |
//!
//! # Examples
//!
//! ```
//! use neon_deck_types::{Direction, InputEvent, Rgb, GRID_WIDTH, GRID_HEIGHT};
//!
//! let pink = Rgb::from_hex("#FF10F0").unwrap();
//! assert_eq!(pink, Rgb::new(0xFF, 0x10, 0xF0));
//! assert_eq!(pink.to_hex(), "#FF10F0");
//!
//! let ev = InputEvent::from_str("next").unwrap();
//! assert_eq!(ev, InputEvent::Navigate(Direction::Next));
//!
//! assert_eq!(GRID_WIDTH, 60);
//! assert_eq!(GRID_HEIGHT, 16);
//! ```

/// Grid width in cells (60 columns)
pub const GRID_WIDTH: u16 = 60;

/// Grid height in cells (16 rows)
pub const GRID_HEIGHT: u16 = 16;

/// Credits advance one line per tick.
pub const CREDITS_TICK_MS: u32 = 250;

/// Bar chart growth cadence.
pub const BARS_TICK_MS: u32 = 100;

/// Particle field cadence.
pub const PARTICLES_TICK_MS: u32 = 50;

/// Color gradient cadence.
pub const GRADIENT_TICK_MS: u32 = 100;

/// Wireframe cube and starfield cadence.
pub const WIREFRAME_TICK_MS: u32 = 80;

/// Runner game cadence.
pub const RUNNER_TICK_MS: u32 = 100;

/// Cursor trail cadence (30 FPS).
pub const TRAIL_TICK_MS: u32 = 33;

/// Hard cap on live particles in the particle field.
pub const PARTICLE_CAPACITY: usize = 100;

/// Hard cap on live obstacles in the runner game.
pub const OBSTACLE_CAPACITY: usize = 16;

/// Number of pointer samples kept by the cursor trail.
pub const TRAIL_LENGTH: usize = 20;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, hex digits are case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Semantic tag attached to every grid cell.
///
/// The core never decides colors; the output layer maps tags to styles.
/// `Tint` is the one exception: the color gradient scene computes its color
/// as part of its animation state and hands it through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellTag {
    #[default]
    Default,
    /// The player's car or the cursor.
    Actor,
    Obstacle,
    Ground,
    Particle,
    Title,
    Heading,
    Text,
    Bar,
    Star,
    /// Rasterized wireframe edge.
    Edge,
    Trail,
    Ripple,
    /// Game-over and other warnings.
    Alert,
    Tint(Rgb),
}

/// Navigation direction within a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Index delta for this direction.
    pub fn delta(&self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// Abstract input events consumed by the core.
///
/// Raw key and mouse decoding lives in the input crate; it must map onto
/// exactly these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move to the next or previous scene
    Navigate(Direction),
    /// Jump (runner game)
    Jump,
    /// Restart after game over
    Restart,
    /// Leave the deck
    Quit,
    /// Pointer moved (or clicked) at a grid coordinate
    Pointer { x: i32, y: i32, click: bool },
}

impl InputEvent {
    /// Parse a keyboard-level event name (case-insensitive).
    ///
    /// `Pointer` events carry coordinates and have no textual form.
    ///
    /// # Examples
    ///
    /// ```
    /// use neon_deck_types::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_str("JUMP"), Some(InputEvent::Jump));
    /// assert_eq!(InputEvent::from_str("warp"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "next" => Some(InputEvent::Navigate(Direction::Next)),
            "previous" | "prev" => Some(InputEvent::Navigate(Direction::Previous)),
            "jump" => Some(InputEvent::Jump),
            "restart" => Some(InputEvent::Restart),
            "quit" => Some(InputEvent::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Navigate(Direction::Next) => "next",
            InputEvent::Navigate(Direction::Previous) => "previous",
            InputEvent::Jump => "jump",
            InputEvent::Restart => "restart",
            InputEvent::Quit => "quit",
            InputEvent::Pointer { .. } => "pointer",
        }
    }
}

/// A scene's request to be advanced again after `interval_ms`.
///
/// Requests are never implicit: a scene that wants to keep animating returns
/// a fresh request from every tick it handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickRequest {
    pub interval_ms: u32,
}

impl TickRequest {
    pub const fn after(interval_ms: u32) -> Self {
        Self { interval_ms }
    }
}
