// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    /// Display columns taken by `ch`; 0 marks the right half of a wide glyph.
    pub width: u8,
}

impl Cell {
    pub fn blank_with_bg(bg: Option<Color>) -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg,
            width: 1,
        }
    }

    pub fn continuation(fg: Option<Color>, bg: Option<Color>) -> Self {
        Self {
            ch: ' ',
            fg,
            bg,
            width: 0,
        }
    }

    pub fn is_continuation(&self) -> bool {
        self.width == 0
    }
}
