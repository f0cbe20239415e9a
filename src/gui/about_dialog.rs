//! About Dialog Component
//!
//! Modal overlay with the game title, version and a short description.
//! Stays open until dismissed with Escape, Enter or a click.

use crate::game::events::{about_title, ABOUT_MESSAGE};
use crate::text::draw_centered_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

#[derive(Debug, Clone)]
pub struct AboutDialogStyle {
    pub overlay_alpha: u8,
    pub background_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub message_color: Color,
    pub hint_color: Color,
}

impl Default for AboutDialogStyle {
    fn default() -> Self {
        AboutDialogStyle {
            overlay_alpha: 180,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            title_color: Color::RGB(220, 220, 240),
            message_color: Color::RGB(180, 180, 190),
            hint_color: Color::RGB(120, 120, 130),
        }
    }
}

pub struct AboutDialog {
    /// Title line; `None` while the dialog is closed
    title: Option<String>,
    style: AboutDialogStyle,
}

impl AboutDialog {
    pub fn new() -> Self {
        AboutDialog {
            title: None,
            style: AboutDialogStyle::default(),
        }
    }

    pub fn open(&mut self, version: &str) {
        self.title = Some(about_title(version));
    }

    pub fn close(&mut self) {
        self.title = None;
    }

    pub fn is_open(&self) -> bool {
        self.title.is_some()
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let Some(title) = &self.title else {
            return Ok(());
        };

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        let (screen_width, screen_height) = canvas.logical_size();
        let width = screen_width.saturating_sub(40);
        let height = 220;
        let x = (screen_width - width) / 2;
        let y = screen_height.saturating_sub(height) / 2;
        let center_x = (screen_width / 2) as i32;

        let dialog_rect = Rect::new(x as i32, y as i32, width, height);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(dialog_rect)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(dialog_rect)?;

        draw_centered_text(canvas, title, center_x, y as i32 + 24, self.style.title_color, 2)?;

        let mut line_y = y as i32 + 80;
        for line in ABOUT_MESSAGE {
            draw_centered_text(canvas, line, center_x, line_y, self.style.message_color, 2)?;
            line_y += 24;
        }

        draw_centered_text(
            canvas,
            "ESC TO CLOSE",
            center_x,
            (y + height) as i32 - 24,
            self.style.hint_color,
            1,
        )?;

        Ok(())
    }
}

impl Default for AboutDialog {
    fn default() -> Self {
        Self::new()
    }
}
