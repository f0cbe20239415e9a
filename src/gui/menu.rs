//! Base Menu Component
//!
//! A reusable overlay menu: darkened backdrop, centered box, title and a
//! list of items with keyboard selection. Wrapped by [`OptionsMenu`] for
//! type-safe option handling.
//!
//! [`OptionsMenu`]: super::OptionsMenu

use crate::text::draw_centered_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Menu box width in pixels
    pub width: u32,

    /// Menu box height in pixels
    pub height: u32,

    pub background_color: Color,
    pub border_color: Color,

    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    pub title_color: Color,
    pub item_color: Color,
    pub selected_item_color: Color,
    pub highlight_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 280,
            height: 200,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            overlay_alpha: 180,
            title_color: Color::RGB(220, 220, 240),
            item_color: Color::RGB(160, 160, 170),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(80, 100, 140),
        }
    }
}

/// A stateful overlay menu
///
/// # Example
///
/// ```rust
/// use crate::gui::Menu;
///
/// let mut menu = Menu::new("MENU", &["ABOUT", "CLOSE"]);
/// menu.select_next();
/// menu.render(&mut canvas)?;
/// let selected = menu.selected_index();
/// ```
pub struct Menu {
    title: String,
    items: Vec<String>,
    selected_index: usize,
    style: MenuStyle,
}

impl Menu {
    pub fn new(title: &str, items: &[&str]) -> Self {
        Menu {
            title: title.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
            selected_index: 0,
            style: MenuStyle::default(),
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Back to the first item
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Render the menu at screen center
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        // Darken whatever is underneath
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        // Logical size, not the physical window size
        let (screen_width, screen_height) = canvas.logical_size();
        let menu_x = screen_width.saturating_sub(self.style.width) / 2;
        let menu_y = screen_height.saturating_sub(self.style.height) / 2;
        let center_x = (menu_x + self.style.width / 2) as i32;

        let menu_rect = Rect::new(menu_x as i32, menu_y as i32, self.style.width, self.style.height);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(menu_rect)?;

        // Double border
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(menu_rect)?;
        canvas.draw_rect(Rect::new(
            menu_x as i32 + 2,
            menu_y as i32 + 2,
            self.style.width - 4,
            self.style.height - 4,
        ))?;

        draw_centered_text(canvas, &self.title, center_x, menu_y as i32 + 24, self.style.title_color, 3)?;

        let item_height = 40;
        let item_start_y = menu_y as i32 + 80;

        for (i, item) in self.items.iter().enumerate() {
            let item_y = item_start_y + i as i32 * item_height;
            let is_selected = i == self.selected_index;

            if is_selected {
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(Rect::new(
                    menu_x as i32 + 15,
                    item_y - 8,
                    self.style.width - 30,
                    30,
                ))?;
            }

            let text_color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };

            draw_centered_text(canvas, item, center_x, item_y, text_color, 2)?;
        }

        Ok(())
    }
}
