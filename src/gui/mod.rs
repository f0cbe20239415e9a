//! Screen-Space GUI System
//!
//! Overlays that sit above the HUD at fixed screen positions.
//!
//! # Available Components
//!
//! - [`Menu`] - Base overlay menu with keyboard selection
//! - [`OptionsMenu`] - About / Close menu
//! - [`AboutDialog`] - Title, version and description
//! - [`Toast`] - Transient non-blocking message (end-of-round score)
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{OptionsMenu, MenuOption};
//!
//! let mut options_menu = OptionsMenu::new();
//! options_menu.navigate_down();
//! options_menu.render(&mut canvas)?;
//!
//! match options_menu.selected_option() {
//!     MenuOption::About => { /* ... */ }
//!     MenuOption::Close => { /* ... */ }
//! }
//! ```

pub mod about_dialog;
pub mod menu;
pub mod options_menu;
pub mod toast;

pub use about_dialog::AboutDialog;
pub use menu::Menu;
pub use options_menu::{MenuOption, OptionsMenu};
pub use toast::Toast;
