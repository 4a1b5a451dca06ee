//! Rolling credits.

use super::SceneEvent;
use crate::grid::GridBuffer;
use crate::types::{CellTag, TickRequest, CREDITS_TICK_MS};

/// Lines above the first credit the cursor starts at, so the roll begins on
/// an empty screen.
const LEAD_IN: i32 = 5;

/// Role and name pairs: even lines are roles, odd lines are names. The list
/// fits the deck grid so the finished roll shows every entry.
pub fn default_credits() -> Vec<String> {
    [
        "Starring",
        "The Terminal",
        "Lead Architect",
        "Ada Moreno",
        "Simulation",
        "Jane Doe",
        "Rendering",
        "John Smith",
        "Particles",
        "Alex Johnson",
        "Springs and Physics",
        "Maria Garcia",
        "Production",
        "Chris Williams",
        "A Neon Deck Production",
        "2025",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Credits that roll up one line per tick, then settle into a static list.
#[derive(Debug, Clone)]
pub struct CreditsScroll {
    lines: Vec<String>,
    /// Virtual scroll position: the line index that sits just below the bottom row.
    cursor: i32,
    viewport_height: i32,
    finished: bool,
}

impl CreditsScroll {
    pub fn new(lines: Vec<String>, viewport_height: u16) -> Self {
        Self {
            lines,
            cursor: -LEAD_IN,
            viewport_height: viewport_height as i32,
            finished: false,
        }
    }

    pub fn title(&self) -> &str {
        "Credits"
    }

    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    pub fn is_animating(&self) -> bool {
        !self.finished
    }

    fn request(&self) -> Option<TickRequest> {
        self.is_animating().then_some(TickRequest::after(CREDITS_TICK_MS))
    }

    pub fn activate(&mut self) -> Option<TickRequest> {
        self.request()
    }

    pub fn advance(&mut self, event: SceneEvent) -> Option<TickRequest> {
        if event != SceneEvent::Tick || self.finished {
            return None;
        }

        self.cursor += 1;
        if self.cursor > self.lines.len() as i32 + self.viewport_height {
            self.finished = true;
            log::debug!("credits: fully shown after cursor {}", self.cursor);
        }
        self.request()
    }

    /// First line shown once the roll is over: the top of the list, or the
    /// last full page when the list is taller than the viewport.
    fn settled_top(&self, rows: i32) -> i32 {
        (self.lines.len() as i32 - rows).max(0)
    }

    pub fn render(&self, grid: &mut GridBuffer) {
        let rows = self.viewport_height.min(grid.height() as i32);
        let top = self.settled_top(rows);
        for row in 0..rows {
            let idx = if self.finished {
                top + row
            } else {
                self.cursor - self.viewport_height + row
            };
            if idx < 0 {
                continue;
            }
            if let Some(line) = self.lines.get(idx as usize) {
                let tag = if idx % 2 == 0 { CellTag::Heading } else { CellTag::Text };
                grid.put_str_centered(row, line, tag);
            }
        }
    }
}
