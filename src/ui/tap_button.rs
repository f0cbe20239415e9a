//! The tap button
//!
//! A filled rectangle with a caption. `bounce()` plays a short grow-and-settle
//! animation as tap feedback; `contains()` does the click hit test against
//! the button's resting rectangle.

use crate::text::{draw_centered_text, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::f32::consts::PI;
use std::time::Duration;

/// Configuration for the button appearance
#[derive(Debug, Clone)]
pub struct TapButtonStyle {
    pub fill_color: Color,
    pub border_color: Color,
    pub caption_color: Color,
    pub caption_scale: u32,

    /// Peak extra size during a bounce (0.2 = 20% larger)
    pub bounce_amount: f32,
    pub bounce_duration: Duration,
}

impl Default for TapButtonStyle {
    fn default() -> Self {
        TapButtonStyle {
            fill_color: Color::RGB(98, 0, 238),
            border_color: Color::RGB(187, 134, 252),
            caption_color: Color::RGB(255, 255, 255),
            caption_scale: 4,
            bounce_amount: 0.2,
            bounce_duration: Duration::from_millis(400),
        }
    }
}

pub struct TapButton {
    caption: String,
    bounds: Rect,
    style: TapButtonStyle,
    bounce_elapsed: Option<Duration>,
}

impl TapButton {
    /// Creates a button of `width` x `height` centered on (`center_x`, `center_y`)
    pub fn new(caption: &str, center_x: i32, center_y: i32, width: u32, height: u32) -> Self {
        TapButton {
            caption: caption.to_string(),
            bounds: Rect::from_center((center_x, center_y), width, height),
            style: TapButtonStyle::default(),
            bounce_elapsed: None,
        }
    }

    /// Whether a click at (`x`, `y`) lands on the button
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds.contains_point((x, y))
    }

    pub fn bounce(&mut self) {
        self.bounce_elapsed = Some(Duration::ZERO);
    }

    pub fn update(&mut self, delta: Duration) {
        if let Some(elapsed) = self.bounce_elapsed {
            let elapsed = elapsed + delta;
            self.bounce_elapsed = if elapsed >= self.style.bounce_duration {
                None
            } else {
                Some(elapsed)
            };
        }
    }

    /// Size multiplier for the current frame (1.0 at rest)
    ///
    /// A damped sine: grows quickly, overshoots back once, settles at 1.0.
    pub fn current_scale(&self) -> f32 {
        let Some(elapsed) = self.bounce_elapsed else {
            return 1.0;
        };

        let total = self.style.bounce_duration.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }

        let t = (elapsed.as_secs_f32() / total).clamp(0.0, 1.0);
        1.0 + self.style.bounce_amount * (2.0 * PI * t).sin() * (1.0 - t)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let scale = self.current_scale();
        let width = (self.bounds.width() as f32 * scale).round() as u32;
        let height = (self.bounds.height() as f32 * scale).round() as u32;
        let rect = Rect::from_center(self.bounds.center(), width, height);

        canvas.set_draw_color(self.style.fill_color);
        canvas.fill_rect(rect)?;

        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(rect)?;
        canvas.draw_rect(Rect::from_center(
            rect.center(),
            rect.width().saturating_sub(4),
            rect.height().saturating_sub(4),
        ))?;

        let caption_y = rect.center().y() - (GLYPH_HEIGHT * self.style.caption_scale) as i32 / 2;
        draw_centered_text(
            canvas,
            &self.caption,
            rect.center().x(),
            caption_y,
            self.style.caption_color,
            self.style.caption_scale,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test() {
        let button = TapButton::new("TAP ME", 180, 320, 200, 100);
        assert!(button.contains(180, 320));
        assert!(button.contains(81, 271));
        assert!(!button.contains(79, 320));
        assert!(!button.contains(180, 400));
    }

    #[test]
    fn test_rest_scale() {
        let button = TapButton::new("TAP ME", 0, 0, 10, 10);
        assert_eq!(button.current_scale(), 1.0);
    }

    #[test]
    fn test_bounce_grows_then_settles() {
        let mut button = TapButton::new("TAP ME", 0, 0, 10, 10);
        button.bounce();

        button.update(Duration::from_millis(80));
        assert!(button.current_scale() > 1.05);

        button.update(Duration::from_millis(400));
        assert_eq!(button.current_scale(), 1.0);
    }
}
