//! 3D rotation, perspective projection and Bresenham line rasterization.
//!
//! Everything here is pure: projection culls silently instead of failing, and
//! line drawing relies on the grid's own clipping.

use crate::grid::GridBuffer;
use crate::types::CellTag;

/// A point in model space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Rotate `p` by `angle` radians around the X axis.
pub fn rotate_x(p: Point3, angle: f64) -> Point3 {
    let (sin_a, cos_a) = angle.sin_cos();
    Point3 {
        x: p.x,
        y: p.y * cos_a - p.z * sin_a,
        z: p.y * sin_a + p.z * cos_a,
    }
}

/// Perspective-project `p` onto a `viewport_w` x `viewport_h` grid.
///
/// Returns `None` when the point sits on or behind the camera plane
/// (`z + perspective <= 0`) or lands outside the viewport.
pub fn project(p: Point3, perspective: f64, viewport_w: u16, viewport_h: u16) -> Option<(i32, i32)> {
    let depth = p.z + perspective;
    if depth <= 0.0 {
        return None;
    }
    let scale = perspective / depth;
    let half_w = viewport_w as f64 / 2.0;
    let half_h = viewport_h as f64 / 2.0;
    let x = (p.x * scale * half_w + half_w).floor();
    let y = (p.y * scale * half_h + half_h).floor();
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    if x < 0.0 || y < 0.0 || x >= viewport_w as f64 || y >= viewport_h as f64 {
        return None;
    }
    Some((x as i32, y as i32))
}

/// Iterator over the cells of a Bresenham line, both endpoints included.
///
/// State is kept in `i64` so any pair of `i32` endpoints steps without
/// overflow.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    x_end: i64,
    y_end: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // x and y never leave the span between the two i32 endpoints.
        let current = (self.x as i32, self.y as i32);
        if self.x == self.x_end && self.y == self.y_end {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Cells traversed from `(x1, y1)` to `(x2, y2)`, valid in all eight octants.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> LinePoints {
    let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    LinePoints {
        x: x1,
        y: y1,
        x_end: x2,
        y_end: y2,
        dx,
        dy,
        sx: if x1 < x2 { 1 } else { -1 },
        sy: if y1 < y2 { 1 } else { -1 },
        err: dx - dy,
        done: false,
    }
}

const OUT_LEFT: u8 = 1;
const OUT_RIGHT: u8 = 2;
const OUT_TOP: u8 = 4;
const OUT_BOTTOM: u8 = 8;

/// Cohen-Sutherland clip of a segment against `[0, width) x [0, height)`.
///
/// Returns the clipped endpoints rounded to cells, or `None` when the segment
/// misses the grid. Segments already inside come back unchanged.
pub fn clip_segment(width: u16, height: u16, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<(i32, i32, i32, i32)> {
    if width == 0 || height == 0 {
        return None;
    }
    let x_max = f64::from(width - 1);
    let y_max = f64::from(height - 1);
    let outcode = |x: f64, y: f64| {
        let mut code = 0;
        if x < 0.0 {
            code |= OUT_LEFT;
        } else if x > x_max {
            code |= OUT_RIGHT;
        }
        if y < 0.0 {
            code |= OUT_TOP;
        } else if y > y_max {
            code |= OUT_BOTTOM;
        }
        code
    };

    let (mut ax, mut ay) = (f64::from(x1), f64::from(y1));
    let (mut bx, mut by) = (f64::from(x2), f64::from(y2));
    let mut code_a = outcode(ax, ay);
    let mut code_b = outcode(bx, by);

    // Each endpoint crosses at most two edges; the slack absorbs rounding.
    for _ in 0..8 {
        if code_a | code_b == 0 {
            let cell = |v: f64, max: f64| v.round().clamp(0.0, max) as i32;
            return Some((cell(ax, x_max), cell(ay, y_max), cell(bx, x_max), cell(by, y_max)));
        }
        if code_a & code_b != 0 {
            return None;
        }
        let out = if code_a != 0 { code_a } else { code_b };
        let (x, y) = if out & OUT_TOP != 0 {
            (ax + (bx - ax) * (0.0 - ay) / (by - ay), 0.0)
        } else if out & OUT_BOTTOM != 0 {
            (ax + (bx - ax) * (y_max - ay) / (by - ay), y_max)
        } else if out & OUT_RIGHT != 0 {
            (x_max, ay + (by - ay) * (x_max - ax) / (bx - ax))
        } else {
            (0.0, ay + (by - ay) * (0.0 - ax) / (bx - ax))
        };
        if out == code_a {
            (ax, ay) = (x, y);
            code_a = outcode(ax, ay);
        } else {
            (bx, by) = (x, y);
            code_b = outcode(bx, by);
        }
    }
    None
}

/// Rasterize a line into `grid`, writing `ch` at every traversed cell.
/// The segment is clipped to the grid first, so far-off endpoints cost no
/// more than the visible part.
pub fn draw_line(grid: &mut GridBuffer, x1: i32, y1: i32, x2: i32, y2: i32, ch: char, tag: CellTag) {
    let Some((x1, y1, x2, y2)) = clip_segment(grid.width(), grid.height(), x1, y1, x2, y2) else {
        return;
    };
    for (x, y) in line_points(x1, y1, x2, y2) {
        grid.set(x, y, ch, tag);
    }
}
