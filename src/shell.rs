// Copyright (c) 2026 rezky_nightky

use std::io::Result;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::sky::{Cmd, Key, Msg, Sky, View};
use crate::timer::OneShot;

/// Upper bound on a single input wait, so signal flags are noticed promptly.
const MAX_POLL: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Key(Key),
    /// The host already repainted; the model is untouched.
    Resized,
}

/// Event source and painter the shell drives.
pub trait Host {
    /// Waits up to `timeout` for input. `Ok(None)` means nothing arrived.
    fn poll(&mut self, timeout: Duration) -> Result<Option<HostEvent>>;

    fn present(&mut self, view: &View) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub keys: u64,
}

/// Runs the sky until it asks to quit.
///
/// One message is handled at a time. A `Cmd::Tick` arms a one-shot timer
/// from the moment the handler returned, so a slow tick pushes every later
/// tick back rather than catching up.
pub fn run<R: Rng, H: Host>(sky: &mut Sky<'_, R>, host: &mut H) -> Result<RunSummary> {
    let mut timer = OneShot::default();
    let mut summary = RunSummary::default();

    let mut cmd = sky.init();
    loop {
        match cmd {
            Cmd::Quit => {
                timer.disarm();
                break;
            }
            Cmd::Tick(after) => timer.arm(Instant::now(), after),
            Cmd::None => {}
        }
        host.present(&sky.view())?;

        let msg = loop {
            if timer.take_due(Instant::now()) {
                break Msg::Tick;
            }
            let wait = timer.remaining(Instant::now()).unwrap_or(MAX_POLL).min(MAX_POLL);
            match host.poll(wait)? {
                Some(HostEvent::Key(k)) => break Msg::Key(k),
                Some(HostEvent::Resized) | None => {}
            }
        };

        match msg {
            Msg::Tick => summary.ticks += 1,
            Msg::Key(_) => summary.keys += 1,
        }
        cmd = sky.update(msg);
    }

    tracing::info!(
        theme = ?sky.theme(),
        ticks = summary.ticks,
        keys = summary.keys,
        "session ended"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::grid::GridSize;
    use crate::runtime::ColorMode;
    use crate::star::STAR_COUNT;
    use crate::theme::{Catalog, ThemeId};

    /// Replays a script of events; an empty slot just lets time pass.
    struct Scripted {
        script: VecDeque<Option<HostEvent>>,
        presented: Vec<View>,
    }

    impl Scripted {
        fn new(script: impl IntoIterator<Item = Option<HostEvent>>) -> Self {
            Self {
                script: script.into_iter().collect(),
                presented: Vec::new(),
            }
        }
    }

    impl Host for Scripted {
        fn poll(&mut self, timeout: Duration) -> Result<Option<HostEvent>> {
            match self.script.pop_front() {
                Some(ev) => {
                    if ev.is_none() {
                        std::thread::sleep(timeout);
                    }
                    Ok(ev)
                }
                // Ran dry: end the session so a short script cannot hang.
                None => Ok(Some(HostEvent::Key(Key::Char('q')))),
            }
        }

        fn present(&mut self, view: &View) -> Result<()> {
            self.presented.push(view.clone());
            Ok(())
        }
    }

    fn key(c: char) -> Option<HostEvent> {
        Some(HostEvent::Key(Key::Char(c)))
    }

    #[test]
    fn quit_stops_before_any_tick() {
        let cat = Catalog::new(ColorMode::Mono);
        let mut sky = Sky::new(&cat, GridSize::default(), StdRng::seed_from_u64(1));
        let mut host = Scripted::new([key('q')]);

        let summary = run(&mut sky, &mut host).unwrap();
        assert_eq!(summary, RunSummary { ticks: 0, keys: 1 });
        assert_eq!(host.presented.len(), 1);
    }

    #[test]
    fn switch_then_interrupt() {
        let cat = Catalog::new(ColorMode::Mono);
        let mut sky = Sky::new(&cat, GridSize::default(), StdRng::seed_from_u64(2));
        let mut host = Scripted::new([
            key('3'),
            Some(HostEvent::Resized),
            key('x'),
            Some(HostEvent::Key(Key::Interrupt)),
        ]);

        let summary = run(&mut sky, &mut host).unwrap();
        assert_eq!(summary.keys, 3);
        assert_eq!(sky.theme(), ThemeId::Ocean);
        assert_eq!(sky.stars().len(), STAR_COUNT);
        assert!(sky.stars().iter().all(|s| s.velocity == 1));
        assert!(host.presented[1].text.starts_with("Theme: Ocean"));
    }

    #[test]
    fn idle_time_delivers_ticks() {
        let cat = Catalog::new(ColorMode::Mono);
        let mut sky = Sky::new(&cat, GridSize::default(), StdRng::seed_from_u64(3));
        // 20 idle polls of up to 100ms each cover well over one 500ms interval
        let mut script: Vec<Option<HostEvent>> = vec![None; 20];
        script.push(key('q'));
        let mut host = Scripted::new(script);

        let summary = run(&mut sky, &mut host).unwrap();
        assert!(summary.ticks >= 1, "{:?}", summary);
        assert_eq!(summary.keys, 1);
        assert_eq!(host.presented.len() as u64, 1 + summary.ticks + summary.keys - 1);
    }
}
