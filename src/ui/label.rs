//! Text label with an optional blink effect
//!
//! Used for the score and time readouts. The label keeps its own text and
//! animation state; the UI manager sets the text from display events and
//! calls `emphasize()` when the score changes.
//!
//! # Example
//!
//! ```rust
//! use crate::ui::{Label, LabelStyle};
//!
//! let mut score_label = Label::new(180, 120, LabelStyle::default());
//! score_label.set_text("YOUR SCORE: 1");
//! score_label.emphasize();
//!
//! // Each frame
//! score_label.update(delta);
//! score_label.render(&mut canvas)?;
//! ```

use crate::text::draw_centered_text;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use std::time::Duration;

/// Configuration for label appearance
#[derive(Debug, Clone)]
pub struct LabelStyle {
    /// Text color at rest
    pub color: Color,

    /// Bitmap font scale
    pub scale: u32,

    /// Total length of the blink effect
    pub blink_duration: Duration,

    /// Number of fade-out/fade-in cycles in one blink
    pub blink_cycles: u32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            color: Color::RGB(240, 240, 240),
            scale: 3,
            blink_duration: Duration::from_millis(300),
            blink_cycles: 3,
        }
    }
}

/// A centered line of text
pub struct Label {
    text: String,
    center_x: i32,
    y: i32,
    style: LabelStyle,
    /// Time since the blink started, `None` when not blinking
    blink_elapsed: Option<Duration>,
}

impl Label {
    pub fn new(center_x: i32, y: i32, style: LabelStyle) -> Self {
        Label {
            text: String::new(),
            center_x,
            y,
            style,
            blink_elapsed: None,
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Start (or restart) the blink effect
    pub fn emphasize(&mut self) {
        self.blink_elapsed = Some(Duration::ZERO);
    }

    #[cfg(test)]
    pub fn is_blinking(&self) -> bool {
        self.blink_elapsed.is_some()
    }

    pub fn update(&mut self, delta: Duration) {
        if let Some(elapsed) = self.blink_elapsed {
            let elapsed = elapsed + delta;
            self.blink_elapsed = if elapsed >= self.style.blink_duration {
                None
            } else {
                Some(elapsed)
            };
        }
    }

    /// Current opacity (0-255)
    ///
    /// While blinking, opacity follows a triangle wave that dips to zero
    /// `blink_cycles` times and ends fully opaque.
    pub fn alpha(&self) -> u8 {
        let Some(elapsed) = self.blink_elapsed else {
            return 255;
        };

        let total = self.style.blink_duration.as_secs_f32();
        if total <= 0.0 || self.style.blink_cycles == 0 {
            return 255;
        }

        let progress = (elapsed.as_secs_f32() / total).clamp(0.0, 1.0);
        let phase = (progress * self.style.blink_cycles as f32).fract();
        // 1 -> 0 -> 1 within each cycle
        let level = (phase * 2.0 - 1.0).abs();
        (level * 255.0) as u8
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let color = self.style.color;
        let color = Color::RGBA(color.r, color.g, color.b, self.alpha());

        canvas.set_blend_mode(BlendMode::Blend);
        draw_centered_text(canvas, &self.text, self.center_x, self.y, color, self.style.scale)?;
        canvas.set_blend_mode(BlendMode::None);

        Ok(())
    }
}
