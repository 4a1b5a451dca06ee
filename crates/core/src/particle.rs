//! Free-flight particles.

use crate::pool::{Bounds, Ephemeral};

/// A particle moving at constant velocity until it ages out or leaves the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub glyph: char,
    pub age: u32,
    pub lifespan: u32,
}

impl Particle {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, glyph: char, lifespan: u32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            glyph,
            age: 0,
            lifespan,
        }
    }

    /// Launch from `(x, y)` at `speed` cells/tick along `angle` radians.
    pub fn launch(x: f64, y: f64, angle: f64, speed: f64, glyph: char, lifespan: u32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(x, y, cos * speed, sin * speed, glyph, lifespan)
    }

    /// Cell the particle currently occupies (truncated toward negative infinity).
    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl Ephemeral for Particle {
    type Step = ();

    fn advance(&mut self, _: ()) {
        self.x += self.vx;
        self.y += self.vy;
        self.age = self.age.saturating_add(1);
    }

    fn expired(&self, bounds: Bounds) -> bool {
        self.age >= self.lifespan || !bounds.contains(self.x, self.y)
    }
}
