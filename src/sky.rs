// Copyright (c) 2026 rezky_nightky

use std::time::Duration;

use rand::{rngs::StdRng, Rng};

use crate::grid::{self, GridSize};
use crate::palette::Style;
use crate::star::{create_stars, Star, STAR_COUNT};
use crate::theme::{Catalog, ThemeId};

pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl+C, or a termination signal routed through the shell.
    Interrupt,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    Tick,
    Key(Key),
}

/// What the sky asks of the shell after handling a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cmd {
    None,
    /// Deliver one `Msg::Tick` after the given delay.
    Tick(Duration),
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub text: String,
    pub style: Style,
}

/// The animation state: active theme plus its stars.
pub struct Sky<'c, R = StdRng> {
    catalog: &'c Catalog,
    theme: ThemeId,
    stars: Vec<Star>,
    grid: GridSize,
    rng: R,
}

impl<'c, R: Rng> Sky<'c, R> {
    pub fn new(catalog: &'c Catalog, grid: GridSize, mut rng: R) -> Self {
        let theme = ThemeId::default();
        let stars = create_stars(catalog.theme(theme), grid, STAR_COUNT, &mut rng);
        Self {
            catalog,
            theme,
            stars,
            grid,
            rng,
        }
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    #[cfg(test)]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn init(&self) -> Cmd {
        Cmd::Tick(TICK_INTERVAL)
    }

    pub fn update(&mut self, msg: Msg) -> Cmd {
        match msg {
            Msg::Tick => {
                self.advance();
                Cmd::Tick(TICK_INTERVAL)
            }
            Msg::Key(Key::Interrupt) | Msg::Key(Key::Char('q')) => {
                tracing::info!(theme = ?self.theme, "quit requested");
                Cmd::Quit
            }
            Msg::Key(Key::Char(c)) => {
                if let Some(id) = ThemeId::from_key(c) {
                    self.switch_theme(id);
                }
                Cmd::None
            }
            Msg::Key(Key::Other) => Cmd::None,
        }
    }

    pub fn view(&self) -> View {
        let theme = self.catalog.theme(self.theme);
        let mut text = format!(
            "Theme: {} | Press 1,2,3 to change | q to quit\n\n",
            theme.name
        );
        text.push_str(&grid::render(&self.stars, self.grid));
        View {
            text,
            style: self.catalog.style(self.theme),
        }
    }

    fn advance(&mut self) {
        let motion = self.catalog.theme(self.theme).motion;
        for star in &mut self.stars {
            motion.step(star, self.grid, &mut self.rng);
        }
        tracing::trace!(
            visible = self.stars.iter().filter(|s| s.visible).count(),
            "tick"
        );
    }

    fn switch_theme(&mut self, id: ThemeId) {
        self.theme = id;
        self.stars = create_stars(self.catalog.theme(id), self.grid, STAR_COUNT, &mut self.rng);
        tracing::debug!(theme = self.catalog.theme(id).name, "theme switched");
    }
}
