//! Side-scrolling runner: jump the car over incoming obstacles.
//!
//! The car is driven by a small jump state machine
//! (`Grounded -> Rising -> Falling -> Grounded`); obstacles live in a
//! [`Pool`] and scroll left at the current game speed. Collision is plain
//! axis-aligned rectangle overlap between the car and every live obstacle,
//! tested once per tick after everything has moved.

use super::SceneEvent;
use crate::grid::GridBuffer;
use crate::pool::{Bounds, Ephemeral, Pool};
use crate::rng::SceneRng;
use crate::types::{CellTag, InputEvent, TickRequest, OBSTACLE_CAPACITY, RUNNER_TICK_MS};

/// Column of the car's left edge.
pub const CAR_X: i32 = 5;
/// Rows gained (then lost) per tick while airborne.
pub const JUMP_HEIGHT: u8 = 4;
/// Ticks spent at the apex before descending.
pub const APEX_TICKS: u8 = 3;
/// Score points per speed increase.
pub const SPEEDUP_EVERY: u32 = 500;
pub const MAX_SPEED: i32 = 5;
/// Range of the horizontal gap between consecutive obstacles.
pub const MIN_GAP: i32 = 18;
pub const MAX_GAP: i32 = 40;

const CAR_PATTERN: &[&str] = &["_/^\\_", "O---O"];

const OBSTACLE_PATTERNS: &[&[&str]] = &[&["^"], &["/\\", "||"], &["#", "#", "#"]];

/// Axis-aligned rectangle in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Vertical motion of the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    Grounded,
    Rising { lift: u8 },
    /// `apex` counts the ticks left at the top before the descent starts.
    Falling { lift: u8, apex: u8 },
}

impl JumpPhase {
    pub fn lift(&self) -> u8 {
        match *self {
            JumpPhase::Grounded => 0,
            JumpPhase::Rising { lift } | JumpPhase::Falling { lift, .. } => lift,
        }
    }

    fn step(self) -> Self {
        match self {
            JumpPhase::Grounded => JumpPhase::Grounded,
            JumpPhase::Rising { lift } => {
                let lift = lift + 1;
                if lift >= JUMP_HEIGHT {
                    JumpPhase::Falling {
                        lift: JUMP_HEIGHT,
                        apex: APEX_TICKS,
                    }
                } else {
                    JumpPhase::Rising { lift }
                }
            }
            JumpPhase::Falling { lift, apex } if apex > 0 => JumpPhase::Falling { lift, apex: apex - 1 },
            JumpPhase::Falling { lift, .. } if lift <= 1 => JumpPhase::Grounded,
            JumpPhase::Falling { lift, .. } => JumpPhase::Falling { lift: lift - 1, apex: 0 },
        }
    }
}

/// A scrolling obstacle sitting on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub rect: Rect,
    pub pattern: &'static [&'static str],
}

impl Obstacle {
    /// Build from a glyph pattern whose bottom row rests on `ground_y - 1`.
    pub fn on_ground(x: i32, ground_y: i32, pattern: &'static [&'static str]) -> Self {
        let height = pattern.len() as i32;
        let width = pattern.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        Self {
            rect: Rect {
                x,
                y: ground_y - height,
                width,
                height,
            },
            pattern,
        }
    }
}

impl Ephemeral for Obstacle {
    /// Current game speed in columns per tick.
    type Step = i32;

    fn advance(&mut self, speed: i32) {
        self.rect.x -= speed;
    }

    fn expired(&self, _bounds: Bounds) -> bool {
        self.rect.x + self.rect.width <= 0
    }
}

#[derive(Debug, Clone)]
pub struct RunnerGame {
    jump: JumpPhase,
    obstacles: Pool<Obstacle>,
    bounds: Bounds,
    ground_y: i32,
    /// Spawn position of the next obstacle; counts down by the speed every tick.
    next_gap: i32,
    score: u32,
    speed: i32,
    game_over: bool,
    rng: SceneRng,
}

impl RunnerGame {
    pub fn new(width: u16, height: u16, mut rng: SceneRng) -> Self {
        let next_gap = width as i32 + rng.range_i32(MIN_GAP, MAX_GAP);
        Self {
            jump: JumpPhase::Grounded,
            obstacles: Pool::with_capacity(OBSTACLE_CAPACITY),
            bounds: Bounds::new(width, height),
            ground_y: height as i32 - 2,
            next_gap,
            score: 0,
            speed: 1,
            game_over: false,
            rng,
        }
    }

    pub fn title(&self) -> &str {
        "Neon runner"
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_animating(&self) -> bool {
        !self.game_over
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.jump
    }

    pub fn ground_y(&self) -> i32 {
        self.ground_y
    }

    pub fn obstacles(&self) -> &Pool<Obstacle> {
        &self.obstacles
    }

    pub fn car_rect(&self) -> Rect {
        let height = CAR_PATTERN.len() as i32;
        Rect {
            x: CAR_X,
            y: self.ground_y - height - self.jump.lift() as i32,
            width: CAR_PATTERN[0].chars().count() as i32,
            height,
        }
    }

    /// Place an obstacle directly (dropped when the pool is full).
    pub fn spawn_obstacle(&mut self, obstacle: Obstacle) -> bool {
        self.obstacles.try_spawn(obstacle)
    }

    fn request(&self) -> Option<TickRequest> {
        self.is_animating().then_some(TickRequest::after(RUNNER_TICK_MS))
    }

    pub fn activate(&mut self) -> Option<TickRequest> {
        self.request()
    }

    /// Jump only from the ground while playing; restart only at game over.
    pub fn consumes(&self, input: InputEvent) -> bool {
        match input {
            InputEvent::Jump => !self.game_over && self.jump == JumpPhase::Grounded,
            InputEvent::Restart => self.game_over,
            _ => false,
        }
    }

    pub fn advance(&mut self, event: SceneEvent) -> Option<TickRequest> {
        match event {
            SceneEvent::Tick => self.tick(),
            SceneEvent::Input(input) if !self.consumes(input) => None,
            SceneEvent::Input(InputEvent::Jump) => {
                self.jump = JumpPhase::Rising { lift: 0 };
                None
            }
            SceneEvent::Input(InputEvent::Restart) => {
                self.restart();
                self.request()
            }
            SceneEvent::Input(_) => None,
        }
    }

    fn restart(&mut self) {
        self.jump = JumpPhase::Grounded;
        self.obstacles.clear();
        self.next_gap = self.bounds.width as i32 + self.rng.range_i32(MIN_GAP, MAX_GAP);
        self.score = 0;
        self.speed = 1;
        self.game_over = false;
        log::debug!("runner: restarted");
    }

    fn tick(&mut self) -> Option<TickRequest> {
        if self.game_over {
            return None;
        }

        self.jump = self.jump.step();

        self.score += 1;
        if self.score % SPEEDUP_EVERY == 0 {
            self.speed = ((self.score / SPEEDUP_EVERY) as i32 + 1).min(MAX_SPEED);
        }

        let width = self.bounds.width as i32;
        if self.next_gap <= width {
            let pattern = self.rng.pick(OBSTACLE_PATTERNS).unwrap_or(OBSTACLE_PATTERNS[0]);
            self.obstacles
                .try_spawn(Obstacle::on_ground(self.next_gap, self.ground_y, pattern));
            self.next_gap = width + self.rng.range_i32(MIN_GAP, MAX_GAP);
        } else {
            self.next_gap -= self.speed;
        }

        self.obstacles.advance_all(self.speed);

        let car = self.car_rect();
        if self.obstacles.iter().any(|o| o.rect.overlaps(&car)) {
            self.game_over = true;
            log::debug!("runner: game over at score {}", self.score);
        }

        self.obstacles.prune(self.bounds);
        self.request()
    }

    pub fn render(&self, grid: &mut GridBuffer) {
        grid.put_str(1, 0, &format!("SCORE: {}", self.score), CellTag::Heading);
        grid.fill_row(self.ground_y, '-', CellTag::Ground);

        for o in self.obstacles.iter() {
            draw_pattern(grid, o.rect.x, o.rect.y, o.pattern, CellTag::Obstacle);
        }

        let car = self.car_rect();
        let car_tag = if self.game_over { CellTag::Alert } else { CellTag::Actor };
        draw_pattern(grid, car.x, car.y, CAR_PATTERN, car_tag);

        if self.game_over {
            grid.put_str_centered(self.ground_y / 2, "GAME OVER! Press R to restart", CellTag::Alert);
        } else {
            grid.put_str_centered(self.ground_y + 1, "Space or W to jump", CellTag::Text);
        }
    }
}

fn draw_pattern(grid: &mut GridBuffer, x: i32, y: i32, pattern: &[&str], tag: CellTag) {
    for (dy, row) in pattern.iter().enumerate() {
        for (dx, ch) in row.chars().enumerate() {
            if ch != ' ' {
                grid.set(x + dx as i32, y + dy as i32, ch, tag);
            }
        }
    }
}
