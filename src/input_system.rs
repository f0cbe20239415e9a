use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Actions the player can perform
///
/// Decouples raw SDL2 input from what the game does with it.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    // === Play ===
    Tap,
    /// Left click at logical coordinates; a tap if it lands on the button
    Click(i32, i32),

    // === Menu Navigation ===
    OpenMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    MenuConfirm,
    CloseAbout,

    // === Window lifecycle ===
    Suspend,
    Restore,

    // === System ===
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Normal play: tapping, opening the menu
    Playing,
    /// Options menu is open
    OptionsMenu,
    /// About dialog is open
    AboutDialog,
}

/// Overlay flags needed to pick the input context
pub struct UIState {
    pub options_menu_open: bool,
    pub about_open: bool,
}

/// Translates SDL2 events into [`GameAction`]s for the game loop
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    /// Call before `poll_events()` each frame
    ///
    /// The about dialog sits above the options menu, so it wins.
    pub fn update_context(&mut self, ui_state: &UIState) {
        self.context = if ui_state.about_open {
            InputContext::AboutDialog
        } else if ui_state.options_menu_open {
            InputContext::OptionsMenu
        } else {
            InputContext::Playing
        };
    }

    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(GameAction::Quit);
                }
                Event::Window { win_event, .. } => {
                    self.handle_window_event(win_event, &mut actions);
                }
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    self.handle_keydown(key, &mut actions);
                }
                Event::MouseButtonDown {
                    mouse_btn, x, y, ..
                } => {
                    self.handle_mouse_down(mouse_btn, x, y, &mut actions);
                }
                _ => {}
            }
        }

        actions
    }

    fn handle_window_event(&self, win_event: WindowEvent, actions: &mut Vec<GameAction>) {
        match win_event {
            WindowEvent::Minimized => actions.push(GameAction::Suspend),
            WindowEvent::Restored => actions.push(GameAction::Restore),
            _ => {}
        }
    }

    fn handle_keydown(&self, key: Keycode, actions: &mut Vec<GameAction>) {
        match self.context {
            InputContext::Playing => self.handle_playing_keys(key, actions),
            InputContext::OptionsMenu => self.handle_menu_keys(key, actions),
            InputContext::AboutDialog => self.handle_about_keys(key, actions),
        }
    }

    fn handle_playing_keys(&self, key: Keycode, actions: &mut Vec<GameAction>) {
        match key {
            Keycode::Space => actions.push(GameAction::Tap),
            Keycode::Escape | Keycode::M => actions.push(GameAction::OpenMenu),
            _ => {}
        }
    }

    fn handle_menu_keys(&self, key: Keycode, actions: &mut Vec<GameAction>) {
        match key {
            Keycode::Escape | Keycode::M => actions.push(GameAction::CloseMenu),
            Keycode::Up => actions.push(GameAction::MenuUp),
            Keycode::Down => actions.push(GameAction::MenuDown),
            Keycode::Return | Keycode::Space => actions.push(GameAction::MenuConfirm),
            _ => {}
        }
    }

    fn handle_about_keys(&self, key: Keycode, actions: &mut Vec<GameAction>) {
        match key {
            Keycode::Escape | Keycode::Return | Keycode::Space => {
                actions.push(GameAction::CloseAbout);
            }
            _ => {}
        }
    }

    fn handle_mouse_down(&self, button: MouseButton, x: i32, y: i32, actions: &mut Vec<GameAction>) {
        if button != MouseButton::Left {
            return;
        }

        match self.context {
            InputContext::Playing => actions.push(GameAction::Click(x, y)),
            InputContext::AboutDialog => actions.push(GameAction::CloseAbout),
            // Menu is keyboard-driven
            InputContext::OptionsMenu => {}
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(input: &InputSystem, key: Keycode) -> Vec<GameAction> {
        let mut actions = Vec::new();
        input.handle_keydown(key, &mut actions);
        actions
    }

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Playing);
    }

    #[test]
    fn test_context_priority() {
        let mut input = InputSystem::new();

        input.update_context(&UIState {
            options_menu_open: true,
            about_open: false,
        });
        assert_eq!(input.context, InputContext::OptionsMenu);

        input.update_context(&UIState {
            options_menu_open: true,
            about_open: true,
        });
        assert_eq!(input.context, InputContext::AboutDialog);

        input.update_context(&UIState {
            options_menu_open: false,
            about_open: false,
        });
        assert_eq!(input.context, InputContext::Playing);
    }

    #[test]
    fn test_playing_keys() {
        let input = InputSystem::new();
        assert_eq!(keys(&input, Keycode::Space), vec![GameAction::Tap]);
        assert_eq!(keys(&input, Keycode::Escape), vec![GameAction::OpenMenu]);
        assert!(keys(&input, Keycode::Up).is_empty());
    }

    #[test]
    fn test_space_confirms_in_menu() {
        let mut input = InputSystem::new();
        input.context = InputContext::OptionsMenu;
        assert_eq!(keys(&input, Keycode::Space), vec![GameAction::MenuConfirm]);
        assert_eq!(keys(&input, Keycode::Down), vec![GameAction::MenuDown]);
        assert_eq!(keys(&input, Keycode::Escape), vec![GameAction::CloseMenu]);
    }

    #[test]
    fn test_clicks_depend_on_context() {
        let mut input = InputSystem::new();
        let mut actions = Vec::new();

        input.handle_mouse_down(MouseButton::Left, 10, 20, &mut actions);
        assert_eq!(actions, vec![GameAction::Click(10, 20)]);

        actions.clear();
        input.handle_mouse_down(MouseButton::Right, 10, 20, &mut actions);
        assert!(actions.is_empty());

        input.context = InputContext::AboutDialog;
        input.handle_mouse_down(MouseButton::Left, 10, 20, &mut actions);
        assert_eq!(actions, vec![GameAction::CloseAbout]);

        actions.clear();
        input.context = InputContext::OptionsMenu;
        input.handle_mouse_down(MouseButton::Left, 10, 20, &mut actions);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_window_events() {
        let input = InputSystem::new();
        let mut actions = Vec::new();
        input.handle_window_event(WindowEvent::Minimized, &mut actions);
        input.handle_window_event(WindowEvent::Restored, &mut actions);
        input.handle_window_event(WindowEvent::Shown, &mut actions);
        assert_eq!(actions, vec![GameAction::Suspend, GameAction::Restore]);
    }
}
