//! DeckView: maps the deck and its grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Deck, GridBuffer};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::CellTag;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub const NEON_PINK: Rgb = Rgb::new(0xFF, 0x10, 0xF0);
pub const NEON_BLUE: Rgb = Rgb::new(0x10, 0xF0, 0xFF);
pub const NEON_GREEN: Rgb = Rgb::new(0x10, 0xFF, 0x50);
pub const NEON_YELLOW: Rgb = Rgb::new(0xFF, 0xFF, 0x10);

/// Style for a semantic cell tag.
pub fn style_for(tag: CellTag) -> CellStyle {
    match tag {
        CellTag::Default | CellTag::Text => CellStyle::default(),
        CellTag::Actor => CellStyle::fg(NEON_PINK).bold(),
        CellTag::Obstacle => CellStyle::fg(NEON_YELLOW).bold(),
        CellTag::Ground => CellStyle::fg(NEON_BLUE).dim(),
        CellTag::Particle => CellStyle::fg(NEON_BLUE),
        CellTag::Title => CellStyle::fg(Rgb::new(255, 255, 255))
            .on(Rgb::new(0x5A, 0x10, 0x8C))
            .bold(),
        CellTag::Heading => CellStyle::fg(NEON_PINK).bold(),
        CellTag::Bar => CellStyle::fg(NEON_GREEN),
        CellTag::Star => CellStyle::fg(Rgb::new(180, 180, 200)).dim(),
        CellTag::Edge => CellStyle::fg(NEON_BLUE).bold(),
        CellTag::Trail => CellStyle::fg(NEON_BLUE).dim(),
        CellTag::Ripple => CellStyle::fg(NEON_GREEN).bold(),
        CellTag::Alert => CellStyle::fg(Rgb::new(255, 60, 60)).bold(),
        CellTag::Tint(rgb) => CellStyle::fg(rgb),
    }
}

/// Header row, rounded frame around the grid, footer row.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckView;

impl DeckView {
    /// Total terminal size the view needs for a `width` x `height` grid.
    pub fn required_size(width: u16, height: u16) -> (u16, u16) {
        (width + 2, height + 4)
    }

    fn frame_origin(&self, grid: &GridBuffer, viewport: Viewport) -> (u16, u16) {
        let (w, h) = Self::required_size(grid.width(), grid.height());
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    /// Terminal cell where grid cell (0, 0) is drawn.
    pub fn origin(&self, grid: &GridBuffer, viewport: Viewport) -> (u16, u16) {
        let (x, y) = self.frame_origin(grid, viewport);
        (x + 1, y + 2)
    }

    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(&self, deck: &Deck, grid: &GridBuffer, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (x0, y0) = self.frame_origin(grid, viewport);
        let frame_w = grid.width() + 2;
        let frame_h = grid.height() + 2;

        // Header.
        let brand = CellStyle::fg(NEON_PINK).bold();
        let end = fb.put_str(x0, y0, "NEON DECK", brand);
        fb.put_str(end + 1, y0, "·", CellStyle::default().dim());
        fb.put_str(end + 3, y0, deck.active().title(), CellStyle::fg(NEON_BLUE));

        self.draw_border(fb, x0, y0 + 1, frame_w, frame_h, CellStyle::fg(NEON_BLUE));

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if let Some(cell) = grid.get(x as i32, y as i32) {
                    fb.put_char(x0 + 1 + x, y0 + 2 + y, cell.ch, style_for(cell.tag));
                }
            }
        }

        // Footer.
        let footer_y = y0 + 1 + frame_h;
        let hint = CellStyle::default().dim();
        fb.put_str(x0, footer_y, "←/→ navigate  q quit", hint);
        let counter = format!("[{}/{}]", deck.current_index() + 1, deck.len());
        let cx = (x0 + frame_w).saturating_sub(counter.chars().count() as u16);
        fb.put_str(cx, footer_y, &counter, CellStyle::fg(NEON_GREEN));
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, deck: &Deck, grid: &GridBuffer, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(deck, grid, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}
