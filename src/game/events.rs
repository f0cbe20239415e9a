// Display events
//
// The controller never touches widgets. Every visible consequence of a state
// change is queued as a DisplayEvent, and the presentation layer drains the
// queue once per frame and applies it to its labels, button and overlays.

/// A visible update requested by the game controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Score label should show this value
    ScoreChanged(i32),
    /// Time label should show this many whole seconds
    TimeChanged(i64),
    /// Draw attention to the score label (blink)
    ScoreEmphasized,
    /// Acknowledge a tap on the button (bounce)
    TapFeedback,
    /// Round is over; show the final score
    GameOver { final_score: i32 },
    /// Show the about dialog
    ShowAbout { version: String },
}

/// Label text for the score display
pub fn score_label(score: i32) -> String {
    format!("YOUR SCORE: {}", score)
}

/// Label text for the countdown display
pub fn time_left_label(seconds: i64) -> String {
    format!("TIME LEFT: {}", seconds)
}

/// End-of-round toast text
pub fn game_over_message(final_score: i32) -> String {
    format!("TIMES UP! YOUR SCORE: {}", final_score)
}

/// Title line of the about dialog
pub fn about_title(version: &str) -> String {
    format!("TIMEFIGHTER V{}", version)
}

/// Body lines of the about dialog
pub const ABOUT_MESSAGE: [&str; 3] = [
    "TAP THE BUTTON AS FAST",
    "AS YOU CAN BEFORE THE",
    "CLOCK RUNS OUT.",
];
