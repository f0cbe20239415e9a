// UIManager struct
//
// Holds every widget on screen and turns the controller's DisplayEvents into
// widget updates. This is the only place that knows how a display event looks.

use std::time::Duration;

use sdl2::render::Canvas;
use sdl2::video::Window;

use super::events::{game_over_message, score_label, time_left_label, DisplayEvent};
use crate::gui::{AboutDialog, OptionsMenu, Toast};
use crate::input_system::UIState;
use crate::ui::{Label, LabelStyle, TapButton};

pub struct UIManager {
    pub score_label: Label,
    pub time_label: Label,
    pub tap_button: TapButton,
    pub options_menu: OptionsMenu,
    pub options_menu_open: bool,
    pub about_dialog: AboutDialog,
    pub toast: Toast,
}

impl UIManager {
    /// Lay out the widgets for a `width` x `height` logical screen
    pub fn new(width: u32, height: u32, toast_duration: Duration) -> Self {
        let center_x = (width / 2) as i32;
        let height = height as i32;

        UIManager {
            score_label: Label::new(center_x, height / 8, LabelStyle::default()),
            time_label: Label::new(center_x, height / 8 + 40, LabelStyle::default()),
            tap_button: TapButton::new("TAP ME", center_x, height / 2, 200, 90),
            options_menu: OptionsMenu::new(),
            options_menu_open: false,
            about_dialog: AboutDialog::new(),
            toast: Toast::new(toast_duration),
        }
    }

    pub fn apply(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::ScoreChanged(score) => self.score_label.set_text(score_label(score)),
            DisplayEvent::TimeChanged(seconds) => self.time_label.set_text(time_left_label(seconds)),
            DisplayEvent::ScoreEmphasized => self.score_label.emphasize(),
            DisplayEvent::TapFeedback => self.tap_button.bounce(),
            DisplayEvent::GameOver { final_score } => self.toast.show(game_over_message(final_score)),
            DisplayEvent::ShowAbout { version } => self.about_dialog.open(&version),
        }
    }

    pub fn open_options_menu(&mut self) {
        self.options_menu.reset();
        self.options_menu_open = true;
    }

    pub fn ui_state(&self) -> UIState {
        UIState {
            options_menu_open: self.options_menu_open,
            about_open: self.about_dialog.is_open(),
        }
    }

    pub fn update(&mut self, delta: Duration) {
        self.score_label.update(delta);
        self.time_label.update(delta);
        self.tap_button.update(delta);
        self.toast.update(delta);
    }

    /// HUD first, then overlays from lowest to highest
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.score_label.render(canvas)?;
        self.time_label.render(canvas)?;
        self.tap_button.render(canvas)?;
        self.toast.render(canvas)?;

        if self.options_menu_open {
            self.options_menu.render(canvas)?;
        }
        self.about_dialog.render(canvas)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> UIManager {
        UIManager::new(360, 640, Duration::from_millis(3_500))
    }

    #[test]
    fn test_labels_follow_events() {
        let mut ui = manager();
        ui.apply(DisplayEvent::ScoreChanged(4));
        ui.apply(DisplayEvent::TimeChanged(7));

        assert_eq!(ui.score_label.text(), "YOUR SCORE: 4");
        assert_eq!(ui.time_label.text(), "TIME LEFT: 7");
    }

    #[test]
    fn test_effects_follow_events() {
        let mut ui = manager();
        ui.apply(DisplayEvent::ScoreEmphasized);
        ui.apply(DisplayEvent::TapFeedback);

        assert!(ui.score_label.is_blinking());
        ui.update(Duration::from_millis(50));
        assert!(ui.tap_button.current_scale() > 1.0);
    }

    #[test]
    fn test_game_over_shows_toast() {
        let mut ui = manager();
        ui.apply(DisplayEvent::GameOver { final_score: 9 });
        assert_eq!(ui.toast.message(), Some("TIMES UP! YOUR SCORE: 9"));
    }

    #[test]
    fn test_about_opens_dialog_and_changes_context() {
        let mut ui = manager();
        ui.open_options_menu();
        ui.apply(DisplayEvent::ShowAbout {
            version: "0.1.0".to_string(),
        });

        let state = ui.ui_state();
        assert!(state.about_open);
        assert!(state.options_menu_open);
    }

    #[test]
    fn test_tap_button_is_centered() {
        let ui = manager();
        assert!(ui.tap_button.contains(180, 320));
        assert!(!ui.tap_button.contains(180, 80));
    }
}
