// Copyright (c) 2026 rezky_nightky

use rand::Rng;

use crate::grid::GridSize;
use crate::theme::Theme;

pub const STAR_COUNT: usize = 40;

/// One positioned glyph on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub visible: bool,
    pub glyph: char,
    /// Horizontal step per tick, one of -1, 0, 1.
    pub velocity: i8,
}

/// Draws a fresh set of `count` stars for `theme`.
///
/// Draw order per star is x, y, visibility, glyph, velocity, so a given
/// seed always yields the same set.
pub fn create_stars<R: Rng + ?Sized>(
    theme: &Theme,
    grid: GridSize,
    count: usize,
    rng: &mut R,
) -> Vec<Star> {
    let cols = grid.cols.max(1) as i32;
    let rows = grid.rows.max(1) as i32;
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..cols);
            let y = rng.random_range(0..rows);
            let visible = rng.random_bool(0.5);
            let glyph = theme.glyphs[rng.random_range(0..theme.glyphs.len())];
            let velocity = theme.motion.initial_velocity(rng);
            Star {
                x,
                y,
                visible,
                glyph,
                velocity,
            }
        })
        .collect()
}
