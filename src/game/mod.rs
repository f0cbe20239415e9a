// Game module - round state, its controller, and the display side of it
//
// This module contains:
// - state.rs: GameState and Snapshot value types, countdown constants
// - controller.rs: GameController (tap/tick/expiry lifecycle)
// - events.rs: DisplayEvent queue items and label text
// - ui_manager.rs: UIManager, applies DisplayEvents to the SDL2 widgets

pub mod controller;
pub mod events;
pub mod state;
pub mod ui_manager;

pub use controller::{CountdownSettings, GameController};
pub use events::DisplayEvent;
pub use state::Snapshot;
pub use ui_manager::UIManager;
