// Copyright (c) 2026 rezky_nightky

use crate::motion::Motion;
use crate::palette::{Padding, Rgb, Style};
use crate::runtime::ColorMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub fg: Rgb,
    pub bg: Rgb,
    /// Candidate glyphs; never empty.
    pub glyphs: &'static [char],
    pub motion: Motion,
}

pub static THEMES: [Theme; 3] = [
    Theme {
        name: "Starry Sky",
        fg: Rgb::hex(0xFAFAFA),
        bg: Rgb::hex(0x0B1020),
        glyphs: &['✨'],
        motion: Motion::Blink,
    },
    Theme {
        name: "Flowers",
        fg: Rgb::hex(0xFFD3E0),
        bg: Rgb::hex(0x1B2F2B),
        glyphs: &['🌸', '🌼', '🌺'],
        motion: Motion::Sway,
    },
    Theme {
        name: "Ocean",
        fg: Rgb::hex(0xA3DFF7),
        bg: Rgb::hex(0x0E3B5F),
        glyphs: &['🌊', '💧'],
        motion: Motion::Flow,
    },
];

const BLOCK_PADDING: Padding = Padding {
    vertical: 1,
    horizontal: 2,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeId {
    #[default]
    Starry,
    Flowers,
    Ocean,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Starry, ThemeId::Flowers, ThemeId::Ocean];

    pub fn index(self) -> usize {
        match self {
            ThemeId::Starry => 0,
            ThemeId::Flowers => 1,
            ThemeId::Ocean => 2,
        }
    }

    /// The digit keys `1`..`3` pick a theme; nothing else does.
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(ThemeId::Starry),
            '2' => Some(ThemeId::Flowers),
            '3' => Some(ThemeId::Ocean),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            ThemeId::Starry => '1',
            ThemeId::Flowers => '2',
            ThemeId::Ocean => '3',
        }
    }
}

/// Theme table with its colors resolved for the running terminal.
///
/// Built once at startup and shared by reference; nothing mutates it.
#[derive(Clone, Debug)]
pub struct Catalog {
    themes: &'static [Theme],
    styles: Vec<Style>,
}

impl Catalog {
    pub fn new(mode: ColorMode) -> Self {
        let styles = THEMES
            .iter()
            .map(|t| Style {
                fg: t.fg.resolve(mode),
                bg: t.bg.resolve(mode),
                padding: BLOCK_PADDING,
            })
            .collect();
        Self {
            themes: &THEMES,
            styles,
        }
    }

    pub fn theme_count(&self) -> usize {
        self.themes.len()
    }

    pub fn theme_at(&self, i: usize) -> Option<&Theme> {
        self.themes.get(i)
    }

    pub fn theme(&self, id: ThemeId) -> &Theme {
        &self.themes[id.index()]
    }

    pub fn style(&self, id: ThemeId) -> Style {
        self.styles[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_themes_with_glyphs() {
        let cat = Catalog::new(ColorMode::TrueColor);
        assert_eq!(cat.theme_count(), 3);
        for i in 0..cat.theme_count() {
            assert!(!cat.theme_at(i).unwrap().glyphs.is_empty());
        }
        assert!(cat.theme_at(3).is_none());
    }

    #[test]
    fn keys_round_trip_to_ids() {
        for id in ThemeId::ALL {
            assert_eq!(ThemeId::from_key(id.key()), Some(id));
        }
        assert_eq!(ThemeId::from_key('4'), None);
        assert_eq!(ThemeId::from_key('q'), None);
    }

    #[test]
    fn ids_index_their_named_theme() {
        let cat = Catalog::new(ColorMode::Mono);
        assert_eq!(cat.theme(ThemeId::Starry).name, "Starry Sky");
        assert_eq!(cat.theme(ThemeId::Flowers).motion, Motion::Sway);
        assert_eq!(cat.theme(ThemeId::Ocean).glyphs, &['🌊', '💧']);
    }

    #[test]
    fn styles_carry_block_padding() {
        let cat = Catalog::new(ColorMode::TrueColor);
        let s = cat.style(ThemeId::Ocean);
        assert_eq!(s.padding, BLOCK_PADDING);
        assert_eq!(
            s.bg,
            Some(crossterm::style::Color::Rgb {
                r: 0x0E,
                g: 0x3B,
                b: 0x5F
            })
        );
    }
}
