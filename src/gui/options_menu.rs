//! Options Menu Component
//!
//! The in-game menu with two options:
//! - About: Shows the about dialog
//! - Close: Returns to the game

use super::Menu;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Options in the options menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuOption {
    About,
    Close,
}

/// Type-safe wrapper around the base [`Menu`]
pub struct OptionsMenu {
    menu: Menu,
}

impl OptionsMenu {
    pub fn new() -> Self {
        OptionsMenu {
            menu: Menu::new("MENU", &["ABOUT", "CLOSE"]),
        }
    }

    /// Navigate up (wraps to bottom)
    pub fn navigate_up(&mut self) {
        self.menu.select_previous();
    }

    /// Navigate down (wraps to top)
    pub fn navigate_down(&mut self) {
        self.menu.select_next();
    }

    pub fn selected_option(&self) -> MenuOption {
        match self.menu.selected_index() {
            0 => MenuOption::About,
            _ => MenuOption::Close,
        }
    }

    /// Select the first option again (called whenever the menu opens)
    pub fn reset(&mut self) {
        self.menu.reset_selection();
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.menu.render(canvas)
    }
}

impl Default for OptionsMenu {
    fn default() -> Self {
        Self::new()
    }
}
