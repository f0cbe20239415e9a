// GameController
//
// Mediates between raw inputs (taps, timer ticks, countdown completion,
// snapshot restore) and the GameState, queueing DisplayEvents for the
// presentation layer.
//
// State machine:
//
//   Idle (started = false) --first tap / resume--> Running (started = true)
//   Running --time expired (via reset)--> Idle
//
// Tapping while Running only increments the score.

use std::time::Duration;

use super::events::DisplayEvent;
use super::state::{GameState, Snapshot, COUNTDOWN_INTERVAL_MS, INITIAL_COUNTDOWN_MS};
use crate::timer::{CountDownTimer, TimerEvent, TimerService};

/// Countdown lengths used by a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownSettings {
    pub initial_countdown_ms: i64,
    pub interval_ms: i64,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        CountdownSettings {
            initial_countdown_ms: INITIAL_COUNTDOWN_MS,
            interval_ms: COUNTDOWN_INTERVAL_MS,
        }
    }
}

/// Owns the round state and its countdown
pub struct GameController<T: TimerService = CountDownTimer> {
    state: GameState,
    settings: CountdownSettings,
    timer: T,
    pending: Vec<DisplayEvent>,
}

impl GameController<CountDownTimer> {
    /// A controller in the freshly reset state
    pub fn fresh(settings: CountdownSettings) -> Self {
        let mut controller = GameController::with_timer(settings, CountDownTimer::new());
        controller.reset();
        controller
    }

    /// A controller rebuilt from a snapshot; its countdown is already running
    pub fn restored(settings: CountdownSettings, snapshot: Snapshot) -> Self {
        let mut controller = GameController::with_timer(settings, CountDownTimer::new());
        controller.resume(snapshot.score, snapshot.time_left_ms);
        controller
    }
}

impl<T: TimerService> GameController<T> {
    /// Wraps a timer without arming it; call [`reset`](Self::reset) or
    /// [`resume`](Self::resume) before use.
    pub fn with_timer(settings: CountdownSettings, timer: T) -> Self {
        GameController {
            state: GameState::fresh(settings.initial_countdown_ms),
            settings,
            timer,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_started(&self) -> bool {
        self.state.started
    }

    #[cfg(test)]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Back to an untapped round with the countdown armed but not running
    pub fn reset(&mut self) {
        self.state = GameState::fresh(self.settings.initial_countdown_ms);
        self.timer
            .arm(self.settings.initial_countdown_ms, self.settings.interval_ms);

        self.pending.push(DisplayEvent::ScoreChanged(self.state.score));
        self.pending.push(DisplayEvent::TimeChanged(self.state.seconds_left()));

        log::info!(
            "Round reset ({} ms, {} ms interval)",
            self.settings.initial_countdown_ms,
            self.settings.interval_ms
        );
    }

    /// Continue a round from saved values; the countdown starts right away
    pub fn resume(&mut self, saved_score: i32, saved_time_left_ms: i64) {
        self.state = GameState {
            score: saved_score.max(0),
            time_left_ms: saved_time_left_ms.max(0),
            started: false,
        };

        self.pending.push(DisplayEvent::ScoreChanged(self.state.score));
        self.pending.push(DisplayEvent::TimeChanged(self.state.seconds_left()));

        self.timer.arm(self.state.time_left_ms, self.settings.interval_ms);
        self.timer.start();
        self.state.started = true;

        log::info!(
            "Round resumed: score {}, {} ms left",
            self.state.score,
            self.state.time_left_ms
        );
    }

    /// Begin the armed countdown
    pub fn start(&mut self) {
        self.timer.start();
        self.state.started = true;
        log::info!("Round started");
    }

    /// A tap on the button. The first tap of a round both starts it and counts.
    ///
    /// Taps are not scored once the clock shows zero; the pending expiry
    /// ends the round on the next update.
    pub fn on_tap(&mut self) {
        self.pending.push(DisplayEvent::TapFeedback);

        if self.state.time_left_ms <= 0 {
            log::debug!("Tap ignored, no time left");
            return;
        }

        if !self.state.started {
            self.start();
        }

        self.state.score = self.state.score.saturating_add(1);
        self.pending.push(DisplayEvent::ScoreChanged(self.state.score));
        self.pending.push(DisplayEvent::ScoreEmphasized);
    }

    pub fn on_tick(&mut self, remaining_ms: i64) {
        self.state.time_left_ms = remaining_ms.max(0);
        self.pending.push(DisplayEvent::TimeChanged(self.state.seconds_left()));
        log::debug!("Tick: {} ms left", self.state.time_left_ms);
    }

    /// End of round: report the final score, then start over
    pub fn on_time_expired(&mut self) {
        let final_score = self.state.score;
        log::info!("Time expired, final score {}", final_score);

        self.pending.push(DisplayEvent::GameOver { final_score });
        self.reset();
    }

    pub fn capture_snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Tear the controller down for a suspend, keeping only the snapshot
    pub fn suspend(mut self) -> Snapshot {
        self.timer.cancel();
        let snapshot = self.capture_snapshot();
        log::info!(
            "Round suspended: score {}, {} ms left",
            snapshot.score,
            snapshot.time_left_ms
        );
        snapshot
    }

    pub fn show_about(&mut self) {
        self.pending.push(DisplayEvent::ShowAbout {
            version: env!("CARGO_PKG_VERSION").to_string(),
        });
    }

    /// Advance the countdown by one frame and route what it reports
    pub fn update(&mut self, elapsed: Duration) {
        for event in self.timer.advance(elapsed) {
            match event {
                TimerEvent::Tick(remaining_ms) => self.on_tick(remaining_ms),
                TimerEvent::Finished => self.on_time_expired(),
            }
        }
    }

    /// Take the display updates queued since the last call
    pub fn drain_events(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Timer double that records what the controller asked of it
    #[derive(Default)]
    struct RecordingTimer {
        armed: Option<(i64, i64)>,
        running: bool,
        arm_calls: usize,
        queued: Vec<TimerEvent>,
        /// Shared so cancels stay visible after the controller is consumed
        cancels: Rc<Cell<usize>>,
    }

    impl TimerService for RecordingTimer {
        fn arm(&mut self, duration_ms: i64, interval_ms: i64) {
            self.armed = Some((duration_ms, interval_ms));
            self.running = false;
            self.arm_calls += 1;
        }

        fn start(&mut self) {
            if self.armed.is_some() {
                self.running = true;
            }
        }

        fn cancel(&mut self) {
            self.armed = None;
            self.running = false;
            self.cancels.set(self.cancels.get() + 1);
        }

        fn is_running(&self) -> bool {
            self.running
        }

        fn advance(&mut self, _elapsed: Duration) -> Vec<TimerEvent> {
            std::mem::take(&mut self.queued)
        }
    }

    fn fresh_state() -> GameState {
        GameState {
            score: 0,
            time_left_ms: 10_000,
            started: false,
        }
    }

    #[test]
    fn test_reset_yields_fresh_state() {
        let mut game = GameController::fresh(CountdownSettings::default());
        game.on_tap();
        game.on_tap();
        game.on_tick(4_000);

        game.reset();
        assert_eq!(*game.state(), fresh_state());
    }

    #[test]
    fn test_reset_arms_without_starting() {
        let mut game = GameController::with_timer(CountdownSettings::default(), RecordingTimer::default());
        game.reset();

        assert_eq!(game.timer().armed, Some((10_000, 1_000)));
        assert!(!game.timer().is_running());
        assert_eq!(
            game.drain_events(),
            vec![DisplayEvent::ScoreChanged(0), DisplayEvent::TimeChanged(10)]
        );
    }

    #[test]
    fn test_three_taps_start_and_count() {
        let mut game = GameController::fresh(CountdownSettings::default());
        game.on_tap();
        game.on_tap();
        game.on_tap();

        assert_eq!(game.state().score, 3);
        assert!(game.is_started());
    }

    #[test]
    fn test_first_tap_starts_countdown() {
        let mut game = GameController::with_timer(CountdownSettings::default(), RecordingTimer::default());
        game.reset();
        game.drain_events();

        game.on_tap();
        assert!(game.timer().is_running());
        assert_eq!(
            game.drain_events(),
            vec![
                DisplayEvent::TapFeedback,
                DisplayEvent::ScoreChanged(1),
                DisplayEvent::ScoreEmphasized,
            ]
        );
    }

    #[test]
    fn test_taps_while_running_add_exactly_n() {
        let mut game = GameController::fresh(CountdownSettings::default());
        game.on_tap();
        let before = game.state().score;

        for _ in 0..25 {
            game.on_tap();
        }

        assert_eq!(game.state().score, before + 25);
        assert!(game.is_started());
    }

    #[test]
    fn test_taps_while_running_do_not_rearm() {
        let mut game = GameController::with_timer(CountdownSettings::default(), RecordingTimer::default());
        game.reset();
        game.on_tap();
        game.on_tap();

        assert_eq!(game.timer().arm_calls, 1);
    }

    #[test]
    fn test_expiry_right_after_reset() {
        let mut game = GameController::fresh(CountdownSettings::default());
        game.drain_events();

        game.on_time_expired();

        assert_eq!(*game.state(), fresh_state());
        let events = game.drain_events();
        assert_eq!(events[0], DisplayEvent::GameOver { final_score: 0 });
    }

    #[test]
    fn test_expiry_always_returns_to_fresh_state() {
        for taps in [0, 1, 17] {
            let mut game = GameController::fresh(CountdownSettings::default());
            for _ in 0..taps {
                game.on_tap();
            }
            game.on_tick(3_000);

            game.on_time_expired();
            assert_eq!(*game.state(), fresh_state());
        }
    }

    #[test]
    fn test_expiry_reports_final_score_then_resets_display() {
        let mut game = GameController::fresh(CountdownSettings::default());
        game.on_tap();
        game.on_tap();
        game.drain_events();

        game.on_time_expired();
        assert_eq!(
            game.drain_events(),
            vec![
                DisplayEvent::GameOver { final_score: 2 },
                DisplayEvent::ScoreChanged(0),
                DisplayEvent::TimeChanged(10),
            ]
        );
    }

    #[test]
    fn test_resume_restores_and_starts() {
        let mut game = GameController::with_timer(CountdownSettings::default(), RecordingTimer::default());
        game.resume(5, 3_000);

        assert_eq!(
            *game.state(),
            GameState {
                score: 5,
                time_left_ms: 3_000,
                started: true
            }
        );
        assert_eq!(game.timer().armed, Some((3_000, 1_000)));
        assert!(game.timer().is_running());
        assert_eq!(
            game.drain_events(),
            vec![DisplayEvent::ScoreChanged(5), DisplayEvent::TimeChanged(3)]
        );
    }

    #[test]
    fn test_resume_then_tick_shows_seconds() {
        let mut game = GameController::restored(
            CountdownSettings::default(),
            Snapshot {
                score: 5,
                time_left_ms: 3_000,
            },
        );
        game.drain_events();

        game.on_tick(2_000);
        assert_eq!(game.drain_events(), vec![DisplayEvent::TimeChanged(2)]);
        assert_eq!(game.state().time_left_ms, 2_000);
    }

    #[test]
    fn test_resume_then_expiry_resets_score() {
        let mut game = GameController::restored(
            CountdownSettings::default(),
            Snapshot {
                score: 5,
                time_left_ms: 3_000,
            },
        );

        game.on_time_expired();
        assert_eq!(game.state().score, 0);
        assert!(!game.is_started());
    }

    #[test]
    fn test_repeated_tick_is_idempotent() {
        let mut game = GameController::fresh(CountdownSettings::default());
        game.on_tap();

        game.on_tick(6_500);
        let after_first = *game.state();
        game.drain_events();

        game.on_tick(6_500);
        game.on_tick(6_500);
        assert_eq!(*game.state(), after_first);
        assert_eq!(
            game.drain_events(),
            vec![DisplayEvent::TimeChanged(6), DisplayEvent::TimeChanged(6)]
        );
    }

    #[test]
    fn test_capture_snapshot() {
        let mut game = GameController::fresh(CountdownSettings::default());
        game.on_tap();
        game.on_tick(7_000);

        assert_eq!(
            game.capture_snapshot(),
            Snapshot {
                score: 1,
                time_left_ms: 7_000
            }
        );
    }

    #[test]
    fn test_suspend_cancels_countdown() {
        let timer = RecordingTimer::default();
        let cancels = Rc::clone(&timer.cancels);
        let mut game = GameController::with_timer(CountdownSettings::default(), timer);
        game.reset();
        game.on_tap();
        game.on_tick(8_000);
        assert_eq!(cancels.get(), 0);

        let snapshot = game.suspend();
        assert_eq!(cancels.get(), 1);
        assert_eq!(
            snapshot,
            Snapshot {
                score: 1,
                time_left_ms: 8_000
            }
        );
    }

    #[test]
    fn test_tap_without_time_left_is_not_scored() {
        let settings = CountdownSettings {
            initial_countdown_ms: 0,
            interval_ms: 1_000,
        };
        let mut game = GameController::with_timer(settings, RecordingTimer::default());
        game.reset();
        game.drain_events();

        game.on_tap();
        assert_eq!(game.state().score, 0);
        assert!(!game.is_started());
        assert!(!game.timer().is_running());
        assert_eq!(game.drain_events(), vec![DisplayEvent::TapFeedback]);
    }

    #[test]
    fn test_tap_after_restore_with_no_time_left() {
        let mut game = GameController::restored(
            CountdownSettings::default(),
            Snapshot {
                score: 4,
                time_left_ms: 0,
            },
        );

        game.on_tap();
        assert_eq!(game.state().score, 4);

        game.update(Duration::from_millis(16));
        assert_eq!(*game.state(), fresh_state());
    }

    #[test]
    fn test_show_about_reports_version() {
        let mut game = GameController::fresh(CountdownSettings::default());
        game.drain_events();

        game.show_about();
        assert_eq!(
            game.drain_events(),
            vec![DisplayEvent::ShowAbout {
                version: env!("CARGO_PKG_VERSION").to_string()
            }]
        );
    }

    #[test]
    fn test_update_routes_timer_events() {
        let mut game = GameController::with_timer(CountdownSettings::default(), RecordingTimer::default());
        game.reset();
        game.on_tap();
        game.on_tap();
        game.drain_events();

        game.timer.queued = vec![TimerEvent::Tick(1_000), TimerEvent::Finished];
        game.update(Duration::from_millis(16));

        assert_eq!(
            game.drain_events(),
            vec![
                DisplayEvent::TimeChanged(1),
                DisplayEvent::GameOver { final_score: 2 },
                DisplayEvent::ScoreChanged(0),
                DisplayEvent::TimeChanged(10),
            ]
        );
        assert!(!game.is_started());
        assert!(!game.timer().is_running());
    }

    #[test]
    fn test_full_round_with_real_timer() {
        let mut game = GameController::fresh(CountdownSettings::default());
        game.update(Duration::from_secs(30));
        assert_eq!(game.state().time_left_ms, 10_000);

        game.on_tap();
        game.update(Duration::from_millis(4_500));
        assert_eq!(game.state().time_left_ms, 6_000);
        assert!(game.is_started());

        game.on_tap();
        game.drain_events();
        game.update(Duration::from_millis(6_000));

        let events = game.drain_events();
        assert!(events.contains(&DisplayEvent::GameOver { final_score: 2 }));
        assert_eq!(*game.state(), fresh_state());
    }

    #[test]
    fn test_custom_settings() {
        let settings = CountdownSettings {
            initial_countdown_ms: 30_000,
            interval_ms: 500,
        };
        let mut game = GameController::with_timer(settings, RecordingTimer::default());
        game.reset();

        assert_eq!(game.state().time_left_ms, 30_000);
        assert_eq!(game.timer().armed, Some((30_000, 500)));
    }
}
