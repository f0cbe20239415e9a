//! Countdown Timer Service
//!
//! A cancellable countdown that reports periodic ticks and a single
//! completion. The timer never reads the clock itself: the game loop feeds
//! it elapsed time through [`TimerService::advance`], which keeps it
//! deterministic and independent of any runtime's timer primitive.
//!
//! # Tick schedule
//!
//! For a 10 s countdown with a 1 s interval the events are:
//!
//! ```text
//! start -> Tick(10000), Tick(9000), ... Tick(1000), Finished
//! ```
//!
//! No tick is emitted at zero; `Finished` takes its place.

use std::time::Duration;

/// Notification produced by a running countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Milliseconds still remaining on the countdown
    Tick(i64),
    /// The countdown reached zero
    Finished,
}

/// Scheduler interface the game controller drives its countdown through
///
/// Only one countdown exists per service: arming a new one replaces
/// whatever was there before.
pub trait TimerService {
    /// Prepare a countdown without starting it (replaces any prior countdown)
    fn arm(&mut self, duration_ms: i64, interval_ms: i64);

    /// Start the armed countdown (no-op if nothing is armed or already running)
    fn start(&mut self);

    /// Drop the current countdown; no further events are produced
    fn cancel(&mut self);

    /// Whether a countdown is currently running
    fn is_running(&self) -> bool;

    /// Move time forward and collect the events that became due
    fn advance(&mut self, elapsed: Duration) -> Vec<TimerEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed,
    /// `pending_start` is set until the opening tick has been delivered
    Running { elapsed_ms: i64, next_tick_at: i64, pending_start: bool },
    Done,
}

/// Frame-driven implementation of [`TimerService`]
#[derive(Debug, Clone)]
pub struct CountDownTimer {
    duration_ms: i64,
    interval_ms: i64,
    phase: Phase,
}

impl CountDownTimer {
    pub fn new() -> Self {
        CountDownTimer {
            duration_ms: 0,
            interval_ms: 1,
            phase: Phase::Idle,
        }
    }

    /// Milliseconds left, or `None` when no countdown is armed or running
    #[cfg(test)]
    pub fn remaining_ms(&self) -> Option<i64> {
        match self.phase {
            Phase::Armed => Some(self.duration_ms),
            Phase::Running { elapsed_ms, .. } => Some((self.duration_ms - elapsed_ms).max(0)),
            Phase::Idle | Phase::Done => None,
        }
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.phase == Phase::Armed
    }
}

impl Default for CountDownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerService for CountDownTimer {
    fn arm(&mut self, duration_ms: i64, interval_ms: i64) {
        self.duration_ms = duration_ms.max(0);
        self.interval_ms = interval_ms.max(1);
        self.phase = Phase::Armed;
    }

    fn start(&mut self) {
        if self.phase == Phase::Armed {
            self.phase = Phase::Running {
                elapsed_ms: 0,
                next_tick_at: self.interval_ms,
                pending_start: true,
            };
        }
    }

    fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<TimerEvent> {
        let mut events = Vec::new();

        let Phase::Running { mut elapsed_ms, mut next_tick_at, pending_start } = self.phase else {
            return events;
        };

        if pending_start {
            if self.duration_ms <= 0 {
                self.phase = Phase::Done;
                events.push(TimerEvent::Finished);
                return events;
            }
            events.push(TimerEvent::Tick(self.duration_ms));
        }

        elapsed_ms = elapsed_ms.saturating_add(i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX));

        // A long frame can cross several interval boundaries at once
        while next_tick_at <= elapsed_ms && next_tick_at < self.duration_ms {
            events.push(TimerEvent::Tick(self.duration_ms - next_tick_at));
            next_tick_at += self.interval_ms;
        }

        if elapsed_ms >= self.duration_ms {
            self.phase = Phase::Done;
            events.push(TimerEvent::Finished);
        } else {
            self.phase = Phase::Running {
                elapsed_ms,
                next_tick_at,
                pending_start: false,
            };
        }

        events
    }
}
