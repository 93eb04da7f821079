// Copyright (c) 2026 rezky_nightky

use crate::star::Star;

/// Two spaces, so blank cells line up with double-width glyphs.
pub const BLANK_CELL: &str = "  ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for GridSize {
    fn default() -> Self {
        Self { cols: 20, rows: 10 }
    }
}

impl GridSize {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.cols as i32 && y < self.rows as i32
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }
}

/// Renders the visible stars as `rows` newline-terminated lines of `cols`
/// cells each.
///
/// When several visible stars share a cell the last one in `stars` wins.
pub fn render(stars: &[Star], grid: GridSize) -> String {
    let mut cells: Vec<Option<char>> = vec![None; grid.cols as usize * grid.rows as usize];
    for s in stars.iter().filter(|s| s.visible) {
        if let Some(i) = grid.index(s.x, s.y) {
            cells[i] = Some(s.glyph);
        }
    }

    let mut out = String::with_capacity(cells.len() * BLANK_CELL.len() + grid.rows as usize);
    let cols = grid.cols as usize;
    for y in 0..grid.rows as usize {
        for cell in &cells[y * cols..(y + 1) * cols] {
            match cell {
                Some(glyph) => out.push(*glyph),
                None => out.push_str(BLANK_CELL),
            }
        }
        out.push('\n');
    }
    out
}
