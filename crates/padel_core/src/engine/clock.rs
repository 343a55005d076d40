//! Match clock: countdown and elapsed counters driven by an external 1 Hz
//! tick source.
//!
//! The clock owns no timer. The embedding layer schedules the cadence and
//! calls [`MatchClock::tick`] once per second; `start`/`stop` gate whether a
//! tick has any effect, which makes stopping safe against a straggling
//! callback and makes repeated starts harmless.

use serde::{Deserialize, Serialize};

/// Remaining time at or below this many seconds counts as "low" (5 minutes).
pub const TIME_LOW_THRESHOLD_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchClock {
    /// Configured match duration in seconds.
    total_secs: u64,
    /// Countdown, clamped at zero.
    remaining_secs: u64,
    /// Count-up, increments on every running tick.
    elapsed_secs: u64,
    running: bool,
}

impl MatchClock {
    /// New stopped clock with the full duration remaining.
    pub fn new(total_secs: u64) -> Self {
        Self { total_secs, remaining_secs: total_secs, elapsed_secs: 0, running: false }
    }

    /// Begin accepting ticks. Idempotent: starting a running clock changes
    /// nothing and cannot produce a second tick stream.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop accepting ticks. Any tick delivered after this is ignored.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one second: decrement the countdown (idempotent at zero) and
    /// increment the elapsed counter. Ignored while stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        self.elapsed_secs += 1;
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Restore the countdown to a snapshot value (undo path).
    pub fn set_remaining_secs(&mut self, secs: u64) {
        self.remaining_secs = secs;
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Fraction of the configured duration already played, in [0, 1].
    /// A zero-duration clock reports 0.
    pub fn progress_percentage(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        (self.elapsed_secs as f64 / self.total_secs as f64).min(1.0)
    }

    /// Five minutes or less on the countdown.
    pub fn is_time_low(&self) -> bool {
        self.remaining_secs <= TIME_LOW_THRESHOLD_SECS
    }

    pub fn formatted_remaining(&self) -> String {
        format_clock(self.remaining_secs)
    }

    pub fn formatted_elapsed(&self) -> String {
        format_clock(self.elapsed_secs)
    }
}

/// `HH:MM:SS` rendering of a second count.
pub fn format_clock(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
