//! Linear color interpolation and the ping-pong progress driver.

use crate::types::Rgb;

fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let v = start as f64 + t * (end as f64 - start as f64);
    v.round().clamp(0.0, 255.0) as u8
}

/// Interpolate each channel independently: `start + t * (end - start)`.
///
/// `t` is clamped to `[0, 1]`; every channel stays in byte range.
pub fn lerp_rgb(start: Rgb, end: Rgb, t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    Rgb::new(
        lerp_channel(start.r, end.r, t),
        lerp_channel(start.g, end.g, t),
        lerp_channel(start.b, end.b, t),
    )
}

/// Scalar progress bouncing between 0.0 and 1.0.
///
/// The direction flips exactly when a bound is hit; progress is clamped onto
/// the bound on that step, never past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingPong {
    progress: f64,
    step: f64,
    forward: bool,
}

impl PingPong {
    pub fn new(step: f64) -> Self {
        Self {
            progress: 0.0,
            step: step.abs(),
            forward: true,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }

    pub fn advance(&mut self) {
        if self.forward {
            self.progress += self.step;
        } else {
            self.progress -= self.step;
        }

        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.forward = false;
        } else if self.progress <= 0.0 {
            self.progress = 0.0;
            self.forward = true;
        }
    }
}
