//! Static title + body slide.

use super::{draw_title, wrap, SceneEvent};
use crate::grid::GridBuffer;
use crate::types::{CellTag, TickRequest};

const MARGIN: i32 = 2;

#[derive(Debug, Clone)]
pub struct StaticContent {
    title: String,
    body: String,
}

impl StaticContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn activate(&mut self) -> Option<TickRequest> {
        None
    }

    pub fn advance(&mut self, _event: SceneEvent) -> Option<TickRequest> {
        None
    }

    pub fn render(&self, grid: &mut GridBuffer) {
        draw_title(grid, &self.title);
        let text_width = (grid.width() as i32 - 2 * MARGIN).max(1) as usize;
        for (i, line) in wrap(&self.body, text_width).iter().enumerate() {
            grid.put_str(MARGIN, 2 + i as i32, line, CellTag::Text);
        }
    }
}
