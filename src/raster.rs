use crate::color::{Hsla, Rgba};
use crate::gradient::Surface;

/// One raster cell: a background fill plus an optional outline glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub bg: Rgba,
    pub glyph: Option<(char, Rgba)>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            bg: Rgba::BLACK,
            glyph: None,
        }
    }
}

/// An in-memory render target made of `width x height` cells, one cell per
/// surface pixel.
///
/// Fills paint every cell whose centre falls inside the rectangle. Strokes
/// draw box-drawing glyphs along the rectangle's outline, colored with the
/// stroke color composited over whatever fill is underneath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Raster {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Raster {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Change the size, clearing all cells. Returns whether the size changed.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        if (width, height) == (self.width, self.height) {
            return false;
        }
        *self = Self::new(width, height);
        true
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = y * self.width as usize + x;
        &mut self.cells[idx]
    }

    /// Indices of cells whose centre lies in `[start, start + len)`.
    fn centre_span(start: f64, len: f64, limit: u16) -> std::ops::Range<usize> {
        let lo = (start - 0.5).ceil().max(0.0);
        let hi = (start + len - 0.5).ceil().clamp(0.0, limit as f64);
        if !(lo < hi) {
            return 0..0;
        }
        lo as usize..hi as usize
    }
}

impl Surface for Raster {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla) {
        let rgba = color.to_rgba();
        let cols = Self::centre_span(x, w, self.width);
        let rows = Self::centre_span(y, h, self.height);
        for row in rows {
            for col in cols.clone() {
                let cell = self.cell_mut(col, row);
                cell.bg = rgba.blend_over(cell.bg);
                cell.glyph = None;
            }
        }
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla) {
        if !(x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite()) {
            return;
        }
        let stroke = color.to_rgba();
        let left = x.floor() as i64;
        let right = ((x + w).ceil() as i64 - 1).max(left);
        let top = y.floor() as i64;
        let bottom = ((y + h).ceil() as i64 - 1).max(top);

        let max_col = self.width as i64 - 1;
        let max_row = self.height as i64 - 1;
        for row in top.max(0)..=bottom.min(max_row) {
            for col in left.max(0)..=right.min(max_col) {
                let (is_top, is_bottom) = (row == top, row == bottom);
                let (is_left, is_right) = (col == left, col == right);
                let glyph = match (is_top, is_bottom, is_left, is_right) {
                    (_, _, true, true) => '\u{2502}',
                    (true, true, _, _) => '\u{2500}',
                    (true, _, true, _) => '\u{250c}',
                    (true, _, _, true) => '\u{2510}',
                    (_, true, true, _) => '\u{2514}',
                    (_, true, _, true) => '\u{2518}',
                    (true, _, _, _) | (_, true, _, _) => '\u{2500}',
                    (_, _, true, _) | (_, _, _, true) => '\u{2502}',
                    _ => continue,
                };
                let cell = self.cell_mut(col as usize, row as usize);
                cell.glyph = Some((glyph, stroke.blend_over(cell.bg)));
            }
        }
    }
}
