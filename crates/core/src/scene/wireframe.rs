//! Spinning wireframe cube over a drifting starfield.

use std::f64::consts::TAU;

use arrayvec::ArrayVec;

use super::SceneEvent;
use crate::geometry::{draw_line, project, rotate_x, Point3};
use crate::grid::GridBuffer;
use crate::rng::SceneRng;
use crate::types::{CellTag, TickRequest, WIREFRAME_TICK_MS};

/// Half edge length of the cube in model units, sized so the whole cube
/// projects inside a 60x16 grid at every angle.
pub const CUBE_SIZE: f64 = 0.5;
pub const PERSPECTIVE: f64 = 5.0;
pub const ROTATION_STEP: f64 = 0.05;
pub const STAR_COUNT: usize = 40;
pub const STAR_DRIFT: f64 = 0.02;
/// Stars wrap from `+STAR_EXTENT` back to `-STAR_EXTENT` on the X axis.
pub const STAR_EXTENT: f64 = CUBE_SIZE * 3.0;

const S: f64 = CUBE_SIZE;
const VERTICES: [Point3; 8] = [
    Point3::new(-S, -S, -S),
    Point3::new(S, -S, -S),
    Point3::new(-S, S, -S),
    Point3::new(S, S, -S),
    Point3::new(-S, -S, S),
    Point3::new(S, -S, S),
    Point3::new(-S, S, S),
    Point3::new(S, S, S),
];

const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 3), (3, 2), (2, 0),
    (4, 5), (5, 7), (7, 6), (6, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

#[derive(Debug, Clone)]
pub struct WireframeStarfield {
    angle: f64,
    stars: ArrayVec<Point3, STAR_COUNT>,
    width: u16,
    height: u16,
}

impl WireframeStarfield {
    pub fn new(width: u16, height: u16, mut rng: SceneRng) -> Self {
        let mut stars = ArrayVec::new();
        for _ in 0..STAR_COUNT {
            stars.push(Point3::new(
                rng.range_f64(-STAR_EXTENT, STAR_EXTENT),
                rng.range_f64(-STAR_EXTENT, STAR_EXTENT),
                rng.range_f64(-STAR_EXTENT, STAR_EXTENT),
            ));
        }
        Self {
            angle: 0.0,
            stars,
            width,
            height,
        }
    }

    pub fn title(&self) -> &str {
        "Wireframe & starfield"
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn stars(&self) -> &[Point3] {
        &self.stars
    }

    pub fn activate(&mut self) -> Option<TickRequest> {
        Some(TickRequest::after(WIREFRAME_TICK_MS))
    }

    pub fn advance(&mut self, event: SceneEvent) -> Option<TickRequest> {
        if event != SceneEvent::Tick {
            return None;
        }

        self.angle = (self.angle + ROTATION_STEP).rem_euclid(TAU);
        for star in &mut self.stars {
            star.x += STAR_DRIFT;
            if star.x > STAR_EXTENT {
                star.x = -STAR_EXTENT;
            }
        }
        Some(TickRequest::after(WIREFRAME_TICK_MS))
    }

    pub fn render(&self, grid: &mut GridBuffer) {
        let projected: ArrayVec<Option<(i32, i32)>, 8> = VERTICES
            .iter()
            .map(|v| project(rotate_x(*v, self.angle), PERSPECTIVE, self.width, self.height))
            .collect();

        for &(a, b) in EDGES.iter() {
            if let (Some((x1, y1)), Some((x2, y2))) = (projected[a], projected[b]) {
                draw_line(grid, x1, y1, x2, y2, '*', CellTag::Edge);
            }
        }

        for star in &self.stars {
            let p = rotate_x(*star, self.angle);
            if let Some((x, y)) = project(p, PERSPECTIVE, self.width, self.height) {
                grid.set(x, y, '.', CellTag::Star);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_wraps_within_a_full_turn() {
        let mut scene = WireframeStarfield::new(60, 16, SceneRng::new(4));
        let mut wrapped = false;
        let mut prev = scene.angle();
        for _ in 0..300 {
            scene.advance(SceneEvent::Tick);
            let a = scene.angle();
            assert!((0.0..TAU).contains(&a));
            if a < prev {
                wrapped = true;
            }
            prev = a;
        }
        assert!(wrapped, "126 ticks of 0.05 rad complete a turn");
    }

    #[test]
    fn stars_teleport_instead_of_reflecting() {
        let mut scene = WireframeStarfield::new(60, 16, SceneRng::new(4));
        let before: Vec<f64> = scene.stars().iter().map(|s| s.x).collect();
        let ticks = ((2.0 * STAR_EXTENT) / STAR_DRIFT) as usize + 2;
        let mut saw_wrap = false;
        for _ in 0..ticks {
            let prev: Vec<f64> = scene.stars().iter().map(|s| s.x).collect();
            scene.advance(SceneEvent::Tick);
            for (now, was) in scene.stars().iter().zip(&prev) {
                assert!(now.x <= STAR_EXTENT && now.x >= -STAR_EXTENT);
                if now.x < *was {
                    assert_eq!(now.x, -STAR_EXTENT);
                    saw_wrap = true;
                }
            }
        }
        assert!(saw_wrap);
        assert_eq!(before.len(), STAR_COUNT);
    }

    #[test]
    fn whole_cube_is_visible_at_every_angle() {
        let mut scene = WireframeStarfield::new(60, 16, SceneRng::new(4));
        for _ in 0..130 {
            let mut grid = GridBuffer::new(60, 16);
            scene.render(&mut grid);
            for v in VERTICES {
                assert!(project(rotate_x(v, scene.angle()), PERSPECTIVE, 60, 16).is_some());
            }
            assert!(grid.count_tag(CellTag::Edge) >= 4);
            scene.advance(SceneEvent::Tick);
        }
    }
}
