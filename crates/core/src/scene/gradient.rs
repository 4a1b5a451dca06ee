//! Text whose color sweeps back and forth between two endpoints.

use super::{draw_title, SceneEvent};
use crate::color::{lerp_rgb, PingPong};
use crate::grid::GridBuffer;
use crate::types::{CellTag, Rgb, TickRequest, GRADIENT_TICK_MS};

const STEP: f64 = 0.02;

#[derive(Debug, Clone)]
pub struct ColorGradient {
    text: String,
    start: Rgb,
    end: Rgb,
    progress: PingPong,
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self::new(
            "This text shifts color, one step per tick",
            Rgb::new(0xFF, 0x00, 0x00),
            Rgb::new(0x00, 0x00, 0xFF),
        )
    }
}

impl ColorGradient {
    pub fn new(text: impl Into<String>, start: Rgb, end: Rgb) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            progress: PingPong::new(STEP),
        }
    }

    pub fn title(&self) -> &str {
        "Progressive styling"
    }

    pub fn progress(&self) -> f64 {
        self.progress.progress()
    }

    pub fn is_forward(&self) -> bool {
        self.progress.is_forward()
    }

    pub fn current_color(&self) -> Rgb {
        lerp_rgb(self.start, self.end, self.progress.progress())
    }

    pub fn activate(&mut self) -> Option<TickRequest> {
        Some(TickRequest::after(GRADIENT_TICK_MS))
    }

    pub fn advance(&mut self, event: SceneEvent) -> Option<TickRequest> {
        if event != SceneEvent::Tick {
            return None;
        }
        self.progress.advance();
        Some(TickRequest::after(GRADIENT_TICK_MS))
    }

    pub fn render(&self, grid: &mut GridBuffer) {
        draw_title(grid, self.title());

        let color = self.current_color();
        let mid = grid.height() as i32 / 2;
        grid.put_str_centered(mid - 2, &self.text, CellTag::Tint(color));

        let readout = format!(
            "Current color: {} ({:.0}%)",
            color.to_hex(),
            self.progress.progress() * 100.0
        );
        grid.put_str_centered(mid, &readout, CellTag::Tint(color));

        // Full sweep swatch with a marker at the current position.
        let w = grid.width() as i32;
        let span = (w - 1).max(1) as f64;
        for x in 0..w {
            let c = lerp_rgb(self.start, self.end, x as f64 / span);
            grid.set(x, mid + 2, '█', CellTag::Tint(c));
        }
        let marker = (self.progress.progress() * span).round() as i32;
        grid.set(marker, mid + 3, '▲', CellTag::Tint(color));
    }
}
