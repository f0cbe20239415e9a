//! Toast Component
//!
//! A transient message box near the bottom of the screen, used for the
//! end-of-round score. It does not block input: the next round can start
//! while it is still showing. Fades out over its last quarter.
//!
//! # Example
//!
//! ```rust
//! use crate::gui::Toast;
//!
//! let mut toast = Toast::new(Duration::from_millis(3500));
//! toast.show("TIMES UP! YOUR SCORE: 12");
//!
//! // In game loop
//! toast.update(delta);
//! toast.render(&mut canvas)?;
//! ```

use crate::text::{draw_centered_text, text_width, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ToastStyle {
    pub background_color: Color,
    pub text_color: Color,
    pub text_scale: u32,
    pub padding: u32,
    /// Distance from the bottom edge of the screen
    pub bottom_margin: u32,
}

impl Default for ToastStyle {
    fn default() -> Self {
        ToastStyle {
            background_color: Color::RGB(50, 50, 50),
            text_color: Color::RGB(255, 255, 255),
            text_scale: 2,
            padding: 10,
            bottom_margin: 60,
        }
    }
}

pub struct Toast {
    message: Option<String>,
    duration: Duration,
    elapsed: Duration,
    style: ToastStyle,
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Toast {
            message: None,
            duration,
            elapsed: Duration::ZERO,
            style: ToastStyle::default(),
        }
    }

    /// Show a message, replacing any toast still on screen
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.elapsed = Duration::ZERO;
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    #[cfg(test)]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn update(&mut self, delta: Duration) {
        if self.message.is_none() {
            return;
        }
        self.elapsed += delta;
        if self.elapsed >= self.duration {
            self.message = None;
        }
    }

    /// Opacity: fully opaque for the first three quarters, then fading
    pub fn alpha(&self) -> u8 {
        if self.message.is_none() {
            return 0;
        }

        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            return 255;
        }

        let remaining = 1.0 - (self.elapsed.as_secs_f32() / total).clamp(0.0, 1.0);
        ((remaining * 4.0).min(1.0) * 255.0) as u8
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let Some(message) = &self.message else {
            return Ok(());
        };

        let alpha = self.alpha();
        let (screen_width, screen_height) = canvas.logical_size();
        let scale = self.style.text_scale;
        let padding = self.style.padding;

        let box_width = text_width(message, scale) + padding * 2;
        let box_height = GLYPH_HEIGHT * scale + padding * 2;
        let box_x = screen_width.saturating_sub(box_width) / 2;
        let box_y = screen_height.saturating_sub(self.style.bottom_margin + box_height);

        let background = self.style.background_color;
        let text = self.style.text_color;

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(background.r, background.g, background.b, alpha / 4 * 3));
        canvas.fill_rect(Rect::new(box_x as i32, box_y as i32, box_width, box_height))?;

        draw_centered_text(
            canvas,
            message,
            (screen_width / 2) as i32,
            (box_y + padding) as i32,
            Color::RGBA(text.r, text.g, text.b, alpha),
            scale,
        )?;
        canvas.set_blend_mode(BlendMode::None);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let toast = Toast::new(Duration::from_secs(1));
        assert!(!toast.is_visible());
        assert_eq!(toast.alpha(), 0);
    }

    #[test]
    fn test_expires_after_duration() {
        let mut toast = Toast::new(Duration::from_millis(3_500));
        toast.show("TIMES UP! YOUR SCORE: 4");
        assert_eq!(toast.message(), Some("TIMES UP! YOUR SCORE: 4"));

        toast.update(Duration::from_millis(2_000));
        assert!(toast.is_visible());
        assert_eq!(toast.alpha(), 255);

        toast.update(Duration::from_millis(1_000));
        assert!(toast.alpha() < 255);

        toast.update(Duration::from_millis(500));
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_show_restarts_timer() {
        let mut toast = Toast::new(Duration::from_millis(1_000));
        toast.show("FIRST");
        toast.update(Duration::from_millis(900));

        toast.show("SECOND");
        toast.update(Duration::from_millis(500));
        assert_eq!(toast.message(), Some("SECOND"));
    }
}
