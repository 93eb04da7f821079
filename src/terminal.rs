// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, IsTerminal, Result, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::error::AppError;
use crate::frame::Frame;
use crate::paint;
use crate::shell::{Host, HostEvent};
use crate::sky::{Key, View};

/// Frame bookkeeping for one output stream: what was laid out last and
/// what is already on screen.
struct Screen<W: Write> {
    out: W,
    frame: Frame,
    last: Option<Frame>,
    view: Option<View>,
}

impl<W: Write> Screen<W> {
    fn new(out: W, w: u16, h: u16) -> Self {
        Self {
            out,
            frame: Frame::new(w, h, None),
            last: None,
            view: None,
        }
    }

    fn present(&mut self, view: &View) -> Result<()> {
        paint::layout(view, &mut self.frame);
        self.view = Some(view.clone());
        self.draw()
    }

    fn resize(&mut self, w: u16, h: u16) -> Result<()> {
        tracing::debug!(width = w, height = h, "terminal resized");
        self.frame = Frame::new(w, h, None);
        self.last = None;
        if let Some(view) = self.view.take() {
            self.present(&view)?;
        }
        Ok(())
    }

    /// Writes every row that differs from what is already on screen.
    ///
    /// Rows are always rewritten from column 0 so a terminal that measures a
    /// glyph differently cannot leave the rest of the row misaligned.
    fn draw(&mut self) -> Result<()> {
        let full = self
            .last
            .as_ref()
            .map(|l| l.width != self.frame.width || l.height != self.frame.height)
            .unwrap_or(true);

        if full {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut cur_fg: Option<Color> = None;
        let mut cur_bg: Option<Color> = None;
        self.out.queue(ResetColor)?;

        for y in 0..self.frame.height {
            let row = self.frame.row(y);
            if !full && self.last.as_ref().map(|l| l.row(y)) == Some(row) {
                continue;
            }

            self.out.queue(cursor::MoveTo(0, y))?;
            for cell in row.iter().filter(|c| !c.is_continuation()) {
                if cell.fg != cur_fg {
                    self.out
                        .queue(SetForegroundColor(cell.fg.unwrap_or(Color::Reset)))?;
                    cur_fg = cell.fg;
                }
                if cell.bg != cur_bg {
                    self.out
                        .queue(SetBackgroundColor(cell.bg.unwrap_or(Color::Reset)))?;
                    cur_bg = cell.bg;
                }
                self.out.queue(Print(cell.ch))?;
            }
        }

        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(ResetColor)?;
        self.out.flush()?;
        self.last = Some(self.frame.clone());
        Ok(())
    }
}

/// Switches `out` to the alternate screen and reports the size to lay out
/// for. Raw mode must already be on.
fn enter_screen<W: Write>(
    out: &mut W,
    size: impl FnOnce() -> Result<(u16, u16)>,
) -> Result<(u16, u16)> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let _ = out.execute(terminal::DisableLineWrap);
    out.execute(SetAttribute(Attribute::Reset))?;
    out.execute(ResetColor)?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;
    out.flush()?;
    size()
}

/// Runs `setup`, calling `restore` if any part of it fails.
fn rollback_on_err<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    let res = setup();
    if res.is_err() {
        restore();
    }
    res
}

/// Crossterm-backed host: raw mode, alternate screen, hidden cursor.
pub struct Terminal {
    screen: Screen<Stdout>,
    interrupted: Arc<AtomicBool>,
}

impl Terminal {
    /// Takes over the terminal. `interrupted` is polled alongside input so a
    /// termination signal ends the session like Ctrl+C would.
    pub fn new(interrupted: Arc<AtomicBool>) -> crate::error::Result<Self> {
        let mut out = stdout();
        if !out.is_terminal() {
            return Err(AppError::NotATerminal);
        }
        terminal::enable_raw_mode()?;
        let (w, h) = rollback_on_err(
            || enter_screen(&mut out, terminal::size),
            restore_terminal_best_effort,
        )?;
        Ok(Self {
            screen: Screen::new(out, w, h),
            interrupted,
        })
    }
}

impl Host for Terminal {
    fn poll(&mut self, timeout: Duration) -> Result<Option<HostEvent>> {
        if self.interrupted.swap(false, Ordering::Relaxed) {
            return Ok(Some(HostEvent::Key(Key::Interrupt)));
        }
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(k) if k.kind == KeyEventKind::Press => Ok(Some(HostEvent::Key(map_key(k)))),
            Event::Resize(w, h) => {
                self.screen.resize(w, h)?;
                Ok(Some(HostEvent::Resized))
            }
            _ => Ok(None),
        }
    }

    fn present(&mut self, view: &View) -> Result<()> {
        self.screen.present(view)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore_terminal_best_effort();
    }
}

pub fn map_key(k: KeyEvent) -> Key {
    match (k.code, k.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Key::Interrupt,
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Key::Char(c)
        }
        _ => Key::Other,
    }
}

pub fn restore_terminal_best_effort() {
    let mut out = stdout();
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}
