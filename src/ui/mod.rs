//! HUD Components
//!
//! Widgets that are always on screen during play: the score and time labels
//! and the tap button. They hold their own animation state (blink, bounce)
//! and are advanced once per frame with the frame's elapsed time.
//!
//! # Available Components
//!
//! - [`Label`] - Centered text line with a blink effect
//! - [`TapButton`] - The button the player taps, with a bounce effect

pub mod label;
pub mod tap_button;

pub use label::{Label, LabelStyle};
pub use tap_button::TapButton;
