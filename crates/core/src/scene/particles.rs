//! Particle fountain around the grid center.

use std::f64::consts::TAU;

use super::{draw_title, SceneEvent};
use crate::grid::GridBuffer;
use crate::particle::Particle;
use crate::pool::{Bounds, Pool};
use crate::rng::SceneRng;
use crate::types::{CellTag, TickRequest, PARTICLES_TICK_MS, PARTICLE_CAPACITY};

const GLYPHS: [char; 10] = ['*', '+', '.', '·', '•', '°', '✧', '✦', '✴', '✹'];

/// Spawn roughly once every three ticks.
const SPAWN_ODDS: (u32, u32) = (1, 3);

/// Infinite particle animation: probabilistic spawn, free flight, prune.
#[derive(Debug, Clone)]
pub struct ParticleField {
    pool: Pool<Particle>,
    bounds: Bounds,
    rng: SceneRng,
    ticks: u64,
}

impl ParticleField {
    pub fn new(width: u16, height: u16, rng: SceneRng) -> Self {
        Self::with_capacity(width, height, PARTICLE_CAPACITY, rng)
    }

    pub fn with_capacity(width: u16, height: u16, capacity: usize, rng: SceneRng) -> Self {
        Self {
            pool: Pool::with_capacity(capacity),
            bounds: Bounds::new(width, height),
            rng,
            ticks: 0,
        }
    }

    pub fn title(&self) -> &str {
        "Particle simulation"
    }

    pub fn particles(&self) -> &Pool<Particle> {
        &self.pool
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn activate(&mut self) -> Option<TickRequest> {
        Some(TickRequest::after(PARTICLES_TICK_MS))
    }

    pub fn advance(&mut self, event: SceneEvent) -> Option<TickRequest> {
        if event != SceneEvent::Tick {
            return None;
        }
        self.ticks += 1;

        if !self.pool.is_full() && self.rng.chance(SPAWN_ODDS.0, SPAWN_ODDS.1) {
            let particle = self.spawn();
            self.pool.try_spawn(particle);
        }
        self.pool.tick((), self.bounds);

        Some(TickRequest::after(PARTICLES_TICK_MS))
    }

    fn spawn(&mut self) -> Particle {
        let x = self.bounds.width as f64 / 2.0 + self.rng.range_f64(-2.0, 2.0);
        let y = self.bounds.height as f64 / 2.0;
        let angle = self.rng.range_f64(0.0, TAU);
        let speed = self.rng.range_f64(0.2, 0.6);
        let glyph = self.rng.pick(&GLYPHS).unwrap_or('*');
        let lifespan = self.rng.range_u32(50, 100);
        Particle::launch(x, y, angle, speed, glyph, lifespan)
    }

    pub fn render(&self, grid: &mut GridBuffer) {
        for p in self.pool.iter() {
            let (x, y) = p.cell();
            grid.set(x, y, p.glyph, CellTag::Particle);
        }
        draw_title(grid, self.title());
    }
}
