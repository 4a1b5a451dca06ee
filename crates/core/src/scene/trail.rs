//! Spring-driven followers chasing the pointer, with a fading trail and
//! click ripples.

use std::f64::consts::TAU;

use arrayvec::ArrayVec;

use super::SceneEvent;
use crate::grid::GridBuffer;
use crate::spring::{fps, Spring, SpringAxis};
use crate::types::{CellTag, InputEvent, Rgb, TickRequest, TRAIL_LENGTH, TRAIL_TICK_MS};

pub const FOLLOWER_COUNT: usize = 8;
pub const RIPPLE_MAX_RADIUS: i32 = 10;

const NEON: [Rgb; 4] = [
    Rgb::new(0xFF, 0x10, 0xF0),
    Rgb::new(0x10, 0xF0, 0xFF),
    Rgb::new(0x10, 0xFF, 0x50),
    Rgb::new(0xFF, 0xFF, 0x10),
];

#[derive(Debug, Clone, Copy)]
struct Follower {
    x: SpringAxis,
    y: SpringAxis,
}

impl Follower {
    fn new(index: usize, x: f64, y: f64) -> Self {
        let frequency = 4.0 + index as f64 * 0.5;
        let damping = 0.3 + index as f64 * 0.05;
        let spring = Spring::new(fps(30), frequency, damping);
        Self {
            x: SpringAxis::new(spring, x),
            y: SpringAxis::new(spring, y),
        }
    }

    fn cell(&self) -> (i32, i32) {
        (
            (self.x.position + 0.5).floor() as i32,
            (self.y.position + 0.5).floor() as i32,
        )
    }

    fn glyph(index: usize) -> char {
        if index % 2 == 0 {
            '◆'
        } else if index % 3 == 0 {
            '■'
        } else {
            '●'
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

#[derive(Debug, Clone)]
pub struct CursorTrail {
    width: u16,
    height: u16,
    cursor: (i32, i32),
    followers: [Follower; FOLLOWER_COUNT],
    trail: ArrayVec<(i32, i32), TRAIL_LENGTH>,
    ripple: Option<Ripple>,
    frame: u64,
}

impl CursorTrail {
    pub fn new(width: u16, height: u16) -> Self {
        let cx = (width / 2) as i32;
        let cy = (height / 2) as i32;
        Self {
            width,
            height,
            cursor: (cx, cy),
            followers: std::array::from_fn(|i| Follower::new(i, cx as f64, cy as f64)),
            trail: ArrayVec::new(),
            ripple: None,
            frame: 0,
        }
    }

    pub fn title(&self) -> &str {
        "Cursor trail"
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Oldest sample first.
    pub fn trail(&self) -> &[(i32, i32)] {
        &self.trail
    }

    pub fn ripple(&self) -> Option<Ripple> {
        self.ripple
    }

    pub fn follower_positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.followers.iter().map(|f| (f.x.position, f.y.position))
    }

    pub fn activate(&mut self) -> Option<TickRequest> {
        Some(TickRequest::after(TRAIL_TICK_MS))
    }

    pub fn advance(&mut self, event: SceneEvent) -> Option<TickRequest> {
        match event {
            SceneEvent::Tick => {
                self.tick();
                Some(TickRequest::after(TRAIL_TICK_MS))
            }
            SceneEvent::Input(InputEvent::Pointer { x, y, click }) => {
                self.pointer(x, y, click);
                None
            }
            SceneEvent::Input(_) => None,
        }
    }

    fn pointer(&mut self, x: i32, y: i32, click: bool) {
        self.cursor = (x, y);

        if self.frame % 2 == 0 {
            if self.trail.is_full() {
                self.trail.remove(0);
            }
            self.trail.push((x, y));
        }

        if click {
            self.ripple = Some(Ripple { x, y, radius: 1 });
        }
    }

    fn tick(&mut self) {
        self.frame += 1;

        let offset = 5.0 + 1.5 * (self.frame as f64 / 10.0).sin();
        let (cx, cy) = (self.cursor.0 as f64, self.cursor.1 as f64);
        for (i, f) in self.followers.iter_mut().enumerate() {
            let angle = i as f64 * (TAU / FOLLOWER_COUNT as f64);
            f.x.retarget(cx + angle.cos() * offset);
            f.y.retarget(cy + angle.sin() * offset);
            f.x.step();
            f.y.step();
        }

        self.ripple = self
            .ripple
            .map(|r| Ripple { radius: r.radius + 1, ..r })
            .filter(|r| r.radius <= RIPPLE_MAX_RADIUS);
    }

    pub fn render(&self, grid: &mut GridBuffer) {
        grid.put_str(0, self.height as i32 - 1, "Move the mouse, click for ripples", CellTag::Text);

        let n = self.trail.len();
        for (i, &(x, y)) in self.trail.iter().enumerate() {
            // The oldest quarter fades out; newer samples walk the palette.
            let idx = (i * NEON.len() / n.max(1)).min(NEON.len() - 1);
            let tag = if idx == 0 { CellTag::Trail } else { CellTag::Tint(NEON[idx]) };
            grid.set(x, y, '·', tag);
        }

        if let Some(r) = self.ripple {
            let radius = r.radius as f64;
            for y in r.y - r.radius..=r.y + r.radius {
                for x in r.x - r.radius..=r.x + r.radius {
                    let d = (((x - r.x).pow(2) + (y - r.y).pow(2)) as f64).sqrt();
                    if d <= radius && d > radius - 1.0 {
                        grid.set(x, y, '○', CellTag::Ripple);
                    }
                }
            }
        }

        for (i, f) in self.followers.iter().enumerate() {
            let (x, y) = f.cell();
            grid.set(x, y, Follower::glyph(i), CellTag::Tint(NEON[i % NEON.len()]));
        }

        let (x, y) = self.cursor;
        grid.set(x, y, '█', CellTag::Actor);
    }
}
