// Copyright (c) 2026 rezky_nightky

use std::time::{Duration, Instant};

/// A single pending firing. Re-arming replaces it.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Time left until the firing, zero once due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Consumes the firing if it is due. The caller re-arms when done.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
