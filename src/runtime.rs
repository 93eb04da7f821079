// Copyright (c) 2026 rezky_nightky

use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Mono,
    Color16,
    Color256,
    TrueColor,
}

impl ColorMode {
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::TrueColor => "24-bit truecolor",
            ColorMode::Color256 => "8-bit (256-color)",
            ColorMode::Color16 => "16-color",
            ColorMode::Mono => "mono",
        }
    }

    pub fn from_depth(depth: u16) -> Result<Self, String> {
        match depth {
            0 => Ok(ColorMode::Mono),
            16 => Ok(ColorMode::Color16),
            8 | 256 => Ok(ColorMode::Color256),
            24 | 32 => Ok(ColorMode::TrueColor),
            _ => Err(format!(
                "invalid --colormode: {} (allowed: 0,16,8/256,24/32)",
                depth
            )),
        }
    }
}

/// Guesses the color depth from the usual terminal capability hints.
pub fn detect_color_mode() -> ColorMode {
    detect_from(
        &env::var("COLORTERM").unwrap_or_default(),
        &env::var("TERM").unwrap_or_default(),
    )
}

fn detect_from(colorterm: &str, term: &str) -> ColorMode {
    let colorterm = colorterm.to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorMode::TrueColor;
    }

    let term = term.to_ascii_lowercase();
    if term == "dumb" {
        return ColorMode::Mono;
    }
    if term.contains("256color") {
        return ColorMode::Color256;
    }

    ColorMode::Color16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorterm_truecolor_wins_over_term() {
        assert_eq!(detect_from("truecolor", "dumb"), ColorMode::TrueColor);
        assert_eq!(detect_from("24bit", ""), ColorMode::TrueColor);
    }

    #[test]
    fn term_hints_select_depth() {
        assert_eq!(detect_from("", "dumb"), ColorMode::Mono);
        assert_eq!(detect_from("", "xterm-256color"), ColorMode::Color256);
        assert_eq!(detect_from("", "xterm"), ColorMode::Color16);
    }

    #[test]
    fn from_depth_accepts_aliases_and_rejects_others() {
        assert_eq!(ColorMode::from_depth(8), Ok(ColorMode::Color256));
        assert_eq!(ColorMode::from_depth(32), Ok(ColorMode::TrueColor));
        assert!(ColorMode::from_depth(12).is_err());
    }
}
