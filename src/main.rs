// Copyright (c) 2026 rezky_nightky

mod cell;
mod config;
mod error;
mod frame;
mod grid;
mod motion;
mod paint;
mod palette;
mod runtime;
mod shell;
mod sky;
mod star;
mod terminal;
mod theme;
mod timer;

use std::fs::OpenOptions;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use clap::builder::styling::{AnsiColor as ClapAnsiColor, Color as ClapColor};
use clap::builder::styling::{Effects as ClapEffects, Style as ClapStyle};
use clap::builder::Styles as ClapStyles;
use clap::{CommandFactory, FromArgMatches};
use rand::{rngs::StdRng, SeedableRng};

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};

use crate::config::{color_enabled_stdout, print_list_themes, Args, Settings};
use crate::error::{AppError, Result};
use crate::grid::GridSize;
use crate::sky::Sky;
use crate::terminal::{restore_terminal_best_effort, Terminal};
use crate::theme::Catalog;

const HELP_TEMPLATE_PLAIN: &str = "\
{before-help}{about-with-newline}
USAGE:
  {usage}

{all-args}{after-help}";

const HELP_TEMPLATE_COLOR: &str = "\
{before-help}{about-with-newline}
\x1b[1;36mUSAGE:\x1b[0m
  {usage}

{all-args}{after-help}";

const KEYS_HELP: &str = "KEYS:\n  1 Starry Sky   2 Flowers   3 Ocean   q / Ctrl+C quit";

fn clap_styles() -> ClapStyles {
    ClapStyles::styled()
        .header(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Cyan))),
        )
        .usage(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Green))),
        )
        .literal(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Yellow))))
        .placeholder(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Magenta))))
}

fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::from(settings.log_level))
        .try_init()
        .map_err(|e| AppError::Logger(e.to_string()))
}

/// Flag raised by SIGINT/SIGTERM/SIGHUP; the terminal host turns it into
/// an interrupt key on its next poll.
fn install_signal_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    {
        for sig in [SIGINT, SIGTERM, SIGHUP] {
            if let Err(e) = signal_hook::flag::register(sig, Arc::clone(&flag)) {
                tracing::warn!(signal = sig, error = %e, "failed to register signal flag");
            }
        }
    }
    flag
}

fn run_session(settings: Settings) -> Result<()> {
    init_logging(&settings)?;

    let catalog = Catalog::new(settings.color_mode);
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    tracing::info!(
        seed = ?settings.seed,
        color_mode = settings.color_mode.label(),
        "session starting"
    );

    let mut sky = Sky::new(&catalog, GridSize::default(), rng);
    let mut term = Terminal::new(install_signal_flag())?;
    shell::run(&mut sky, &mut term)?;
    Ok(())
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    let mut cmd = Args::command();
    cmd = cmd.styles(clap_styles());
    cmd = cmd.after_help(KEYS_HELP);
    let help_template = if color_enabled_stdout() {
        HELP_TEMPLATE_COLOR
    } else {
        HELP_TEMPLATE_PLAIN
    };
    cmd = cmd.help_template(help_template);
    cmd.build();

    if cmd.get_arguments().any(|a| a.get_id().as_str() == "help") {
        cmd = cmd.mut_arg("help", |a| a.help_heading("HELP"));
    }

    let matches = cmd.get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if args.list_themes {
        print_list_themes();
        return;
    }

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.info {
        let sha = env!("TWINKLE_GIT_SHA");
        println!("Version: v{}", env!("CARGO_PKG_VERSION"));
        if sha.is_empty() {
            println!("Build: {}", env!("TWINKLE_BUILD"));
        } else {
            println!("Build: {} ({})", env!("TWINKLE_BUILD"), sha);
        }
        println!("Copyright: (c) 2026 {}", env!("CARGO_PKG_AUTHORS"));
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
        return;
    }

    let result = Settings::from_args(&args).and_then(run_session);
    if let Err(e) = result {
        println!("Error running program: {}", e);
        std::process::exit(e.exit_code());
    }
}
