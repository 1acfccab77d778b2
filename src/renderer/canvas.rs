//! Character-cell canvas with 2D primitives
//!
//! Shapes are given in playfield units and rasterized onto terminal cells.

use crossterm::style::Color;
use glam::Vec2;

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: Color::Reset,
    };

    pub const fn new(glyph: char, color: Color) -> Self {
        Self { glyph, color }
    }
}

/// Grid of cells covering the whole playfield
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    /// Cells per playfield unit on each axis
    scale: Vec2,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, playfield: Vec2) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale: Vec2::new(cols as f32 / playfield.x, rows as f32 / playfield.y),
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Cell coordinates of a playfield point (may be off-canvas)
    pub fn to_cell(&self, point: Vec2) -> (i32, i32) {
        (
            (point.x * self.scale.x).floor() as i32,
            (point.y * self.scale.y).floor() as i32,
        )
    }

    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row.min(self.rows - 1) as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Set a single cell; off-canvas writes are ignored
    pub fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = cell;
        }
    }

    /// Fill the axis-aligned box spanning `min..max`
    pub fn fill_rect(&mut self, min: Vec2, max: Vec2, cell: Cell) {
        let (c0, r0) = self.to_cell(min);
        let (c1, r1) = self.to_cell(max);
        // Anything with a visible extent covers at least one cell
        for row in r0..=r1.max(r0) {
            for col in c0..=c1.max(c0) {
                self.put(col, row, cell);
            }
        }
    }

    /// Straight line from `a` to `b`
    pub fn line(&mut self, a: Vec2, b: Vec2, cell: Cell) {
        let (c0, r0) = self.to_cell(a);
        let (c1, r1) = self.to_cell(b);
        let steps = (c1 - c0).abs().max((r1 - r0).abs()).max(1);

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let col = c0 as f32 + (c1 - c0) as f32 * t;
            let row = r0 as f32 + (r1 - r0) as f32 * t;
            self.put(col.round() as i32, row.round() as i32, cell);
        }
    }

    /// Filled circle; always marks at least the cell under the center
    pub fn disc(&mut self, center: Vec2, radius: f32, cell: Cell) {
        let (cc, cr) = self.to_cell(center);
        self.put(cc, cr, cell);

        let (c0, r0) = self.to_cell(center - Vec2::splat(radius));
        let (c1, r1) = self.to_cell(center + Vec2::splat(radius));
        for row in r0..=r1 {
            for col in c0..=c1 {
                // Cell center back in playfield units
                let p = Vec2::new(
                    (col as f32 + 0.5) / self.scale.x,
                    (row as f32 + 0.5) / self.scale.y,
                );
                if p.distance(center) <= radius {
                    self.put(col, row, cell);
                }
            }
        }
    }
}
