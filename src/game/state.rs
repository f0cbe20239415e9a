// GameState and Snapshot value types
//
// GameState is the whole of the game's mutable data. The controller owns one
// and replaces it wholesale on reset; the presentation layer never sees it
// directly, only the display events derived from it.

/// Countdown length of a fresh round
pub const INITIAL_COUNTDOWN_MS: i64 = 10_000;

/// Spacing between timer ticks
pub const COUNTDOWN_INTERVAL_MS: i64 = 1_000;

/// Score and countdown state of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub score: i32,
    pub time_left_ms: i64,
    pub started: bool,
}

impl GameState {
    /// State of a round that has not been tapped yet
    pub fn fresh(initial_countdown_ms: i64) -> Self {
        GameState {
            score: 0,
            time_left_ms: initial_countdown_ms.max(0),
            started: false,
        }
    }

    /// Whole seconds left, truncated (9999 ms shows as 9)
    pub fn seconds_left(&self) -> i64 {
        self.time_left_ms / 1000
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            time_left_ms: self.time_left_ms,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh(INITIAL_COUNTDOWN_MS)
    }
}

/// The pair kept across a suspend/restore cycle of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub score: i32,
    pub time_left_ms: i64,
}
