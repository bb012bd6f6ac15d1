//! Wall-clock timing of a run.

use std::time::{Duration, Instant};

/// Start/stop timer. Stopping keeps the measured duration; restarting
/// discards it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stopwatch that is already running.
    pub fn started() -> Self {
        let mut watch = Self::new();
        watch.start();
        watch
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.elapsed = Duration::ZERO;
    }

    /// Freeze the elapsed time. No effect if not running.
    pub fn stop(&mut self) {
        if let Some(start) = self.started.take() {
            self.elapsed = start.elapsed();
        }
    }

    /// Time since `start` while running, the frozen duration once stopped.
    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(start) => start.elapsed(),
            None => self.elapsed,
        }
    }
}
