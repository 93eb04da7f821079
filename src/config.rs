// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::error::AppError;
use crate::runtime::{detect_color_mode, ColorMode};
use crate::theme::{Catalog, ThemeId};

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "twinkle", version, disable_version_flag = true)]
pub struct Args {
    #[arg(
        long = "seed",
        help_heading = "GENERAL",
        help = "Fixed random seed (same seed, same animation)"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "colormode",
        help_heading = "APPEARANCE",
        help = "Force color mode (allowed: 0,16,8/256,24/32). Default: detected from COLORTERM/TERM"
    )]
    pub colormode: Option<u16>,

    #[arg(
        long = "log-file",
        value_name = "PATH",
        help_heading = "LOGGING",
        help = "Append diagnostic logs to PATH (nothing is logged without it)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long = "log-level",
        default_value_t = LogLevel::Info,
        value_enum,
        help_heading = "LOGGING",
        help = "Most verbose level written to --log-file"
    )]
    pub log_level: LogLevel,

    #[arg(
        long = "list-themes",
        help_heading = "HELP",
        help = "List themes with their keys and exit"
    )]
    pub list_themes: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}

/// Validated session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub seed: Option<u64>,
    pub color_mode: ColorMode,
    pub log_file: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self, AppError> {
        let color_mode = match args.colormode {
            Some(depth) => ColorMode::from_depth(depth).map_err(AppError::InvalidArgument)?,
            None => detect_color_mode(),
        };
        Ok(Self {
            seed: args.seed,
            color_mode,
            log_file: args.log_file.clone(),
            log_level: args.log_level,
        })
    }
}

pub fn print_list_themes() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mTHEMES:\x1b[0m");
    } else {
        println!("THEMES:");
    }
    println!();
    println!("KEY  NAME         MOTION  GLYPHS");
    let catalog = Catalog::new(ColorMode::Mono);
    for i in 0..catalog.theme_count() {
        let (Some(t), Some(id)) = (catalog.theme_at(i), ThemeId::ALL.get(i)) else {
            continue;
        };
        let glyphs: String = t.glyphs.iter().collect();
        println!(
            "{}    {:<12} {:<7} {}",
            id.key(),
            t.name,
            format!("{:?}", t.motion).to_ascii_lowercase(),
            glyphs
        );
    }
    println!();
    println!("q or Ctrl+C quits.");
}
