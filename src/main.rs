use std::time::{Duration, Instant};

mod config;
mod game;
mod gui;
mod input_system;
mod instance_state;
mod text;
mod timer;
mod ui;

use config::GameConfig;
use game::{CountdownSettings, GameController, UIManager};
use gui::MenuOption;
use input_system::{GameAction, InputSystem};
use instance_state::{InstanceState, InstanceStateError};
use sdl2::pixels::Color;

// Portrait layout, phone-like aspect
const GAME_WIDTH: u32 = 360;
const GAME_HEIGHT: u32 = 640;

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / GAME_WIDTH as i32;
            let max_scale_h = usable_h / GAME_HEIGHT as i32;

            max_scale_w.min(max_scale_h).clamp(1, 3) as u32
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

/// Rebuild the round after the window comes back
///
/// Without a usable snapshot the round starts over instead.
fn restore_controller(instance_state: &mut InstanceState, settings: CountdownSettings) -> GameController {
    match instance_state.restore() {
        Ok(snapshot) => GameController::restored(settings, snapshot),
        Err(InstanceStateError::Missing) => {
            log::info!("No instance state to restore, starting a new round");
            GameController::fresh(settings)
        }
        Err(e) => {
            log::warn!("Discarding instance state: {}", e);
            GameController::fresh(settings)
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let config = GameConfig::load().map_err(|e| format!("Failed to load config: {}", e))?;
    let settings = config.countdown_settings();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_scale = config
        .window_scale
        .unwrap_or_else(|| calculate_window_scale(&video_subsystem));
    let window_width = GAME_WIDTH * window_scale;
    let window_height = GAME_HEIGHT * window_scale;

    log::info!("Window scale: {}x (window: {}x{})", window_scale, window_width, window_height);

    let window = video_subsystem
        .window("Timefighter", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size scales rendering and mouse coordinates together
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT).map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;

    let mut ui = UIManager::new(
        GAME_WIDTH,
        GAME_HEIGHT,
        Duration::from_millis(config.toast_duration_ms),
    );
    let mut input_system = InputSystem::new();
    let mut instance_state = InstanceState::new();

    // None while the window is minimized: the round only survives as a snapshot
    let mut controller = Some(GameController::fresh(settings));

    log::info!("Controls: click the button or press SPACE to tap, ESC or M for the menu");

    let frame_time = Duration::new(0, 1_000_000_000u32 / 60);
    let mut last_frame = Instant::now();

    'running: loop {
        let now = Instant::now();
        let delta = now - last_frame;
        last_frame = now;

        input_system.update_context(&ui.ui_state());

        for action in input_system.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Tap => {
                    if let Some(game) = controller.as_mut() {
                        game.on_tap();
                    }
                }
                GameAction::Click(x, y) => {
                    if ui.tap_button.contains(x, y) {
                        if let Some(game) = controller.as_mut() {
                            game.on_tap();
                        }
                    }
                }
                GameAction::OpenMenu => ui.open_options_menu(),
                GameAction::CloseMenu => ui.options_menu_open = false,
                GameAction::MenuUp => ui.options_menu.navigate_up(),
                GameAction::MenuDown => ui.options_menu.navigate_down(),
                GameAction::MenuConfirm => {
                    ui.options_menu_open = false;
                    if ui.options_menu.selected_option() == MenuOption::About {
                        if let Some(game) = controller.as_mut() {
                            game.show_about();
                        }
                    }
                }
                GameAction::CloseAbout => ui.about_dialog.close(),
                GameAction::Suspend => {
                    if let Some(game) = controller.take() {
                        if let Err(e) = instance_state.save(&game.suspend()) {
                            log::warn!("Failed to save instance state: {}", e);
                        }
                    }
                }
                GameAction::Restore => {
                    if controller.is_none() {
                        controller = Some(restore_controller(&mut instance_state, settings));
                    }
                }
            }
        }

        if let Some(game) = controller.as_mut() {
            game.update(delta);
            for event in game.drain_events() {
                ui.apply(event);
            }
        }
        ui.update(delta);

        canvas.set_draw_color(Color::RGB(18, 18, 24));
        canvas.clear();
        ui.render(&mut canvas)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(frame_time);
    }

    if let Some(game) = controller {
        log::info!(
            "Quitting with score {} (round running: {})",
            game.state().score,
            game.is_started()
        );
    }

    Ok(())
}
