//! Grid buffer - the fixed-size render target shared by all scenes.

use crate::types::CellTag;

/// A single grid cell: a glyph plus its semantic tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub ch: char,
    pub tag: CellTag,
}

impl GridCell {
    pub const BLANK: GridCell = GridCell {
        ch: ' ',
        tag: CellTag::Default,
    };
}

impl Default for GridCell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// 2D buffer of tagged character cells.
///
/// Dimensions are fixed at construction. Writes outside `0..width` x
/// `0..height` are silently dropped, so callers can hand over raw projection
/// or physics coordinates without pre-checking them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer {
    width: u16,
    height: u16,
    cells: Vec<GridCell>,
}

impl GridBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![GridCell::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<GridCell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, ch: char, tag: CellTag) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = GridCell { ch, tag };
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(GridCell::BLANK);
    }

    /// Write a string left to right, clipping at the right edge.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str, tag: CellTag) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x + i as i32;
            if cx >= self.width as i32 {
                break;
            }
            self.set(cx, y, ch, tag);
        }
    }

    /// Write a string horizontally centered on row `y`.
    pub fn put_str_centered(&mut self, y: i32, s: &str, tag: CellTag) {
        let len = s.chars().count() as i32;
        let x = (self.width as i32 - len) / 2;
        self.put_str(x, y, s, tag);
    }

    pub fn fill_row(&mut self, y: i32, ch: char, tag: CellTag) {
        for x in 0..self.width as i32 {
            self.set(x, y, ch, tag);
        }
    }

    /// Glyphs of row `y` as a string (empty for rows outside the grid).
    pub fn row_text(&self, y: i32) -> String {
        if y < 0 || y >= self.height as i32 {
            return String::new();
        }
        (0..self.width as i32)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    /// Number of cells carrying `tag`.
    pub fn count_tag(&self, tag: CellTag) -> usize {
        self.cells.iter().filter(|c| c.tag == tag).count()
    }
}
