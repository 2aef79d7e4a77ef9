//! Native window loop.

use crate::app::App;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::shortcuts::ShortcutRegistry;
use kurbo::Point;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, ScaleMode, Window, WindowOptions};

const TARGET_FPS: usize = 60;

fn open_window(title: &str, (width, height): (usize, usize)) -> AppResult<Window> {
    let options = WindowOptions {
        resize: true,
        scale_mode: ScaleMode::UpperLeft,
        ..WindowOptions::default()
    };
    let mut window =
        Window::new(title, width, height, options).map_err(|e| AppError::Window(e.to_string()))?;
    window.set_target_fps(TARGET_FPS);
    log::debug!("Opened {}x{} window", width, height);
    Ok(window)
}

/// Run the application until the window is closed.
pub fn run(config: AppConfig) -> AppResult<()> {
    let mut app = App::new(config)?;
    ShortcutRegistry::print_all();

    let mut frame_size = app.frame_size();
    let mut window = open_window(&app.config().title, frame_size)?;

    while window.is_open() {
        let (width, height) = window.get_size();
        app.set_viewport(width, height);

        let ctrl = window.is_key_down(Key::LeftCtrl) || window.is_key_down(Key::RightCtrl);
        let shift = window.is_key_down(Key::LeftShift) || window.is_key_down(Key::RightShift);
        for key in window.get_keys_pressed(KeyRepeat::No) {
            let name = format!("{:?}", key);
            if let Some(action) = ShortcutRegistry::lookup(&name, ctrl, shift, &app.ui_state()) {
                log::debug!("Shortcut {} -> {:?}", name, action);
                if let Err(e) = app.apply(action) {
                    log::error!("{}", e);
                }
            }
        }

        let position = window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x as f64, y as f64));
        let pressed = window.get_mouse_down(MouseButton::Left);
        if let Err(e) = app.pointer(position, pressed) {
            log::error!("{}", e);
        }

        // A new canvas clamped above the window size needs a bigger window.
        if app.frame_size() != frame_size {
            frame_size = app.frame_size();
            let (width, height) = window.get_size();
            if frame_size.0 > width || frame_size.1 > height {
                window = open_window(&app.config().title, frame_size)?;
            }
        }

        let (width, height) = frame_size;
        window
            .update_with_buffer(&app.compose_frame(), width, height)
            .map_err(|e| AppError::Window(e.to_string()))?;
    }

    log::info!("Window closed");
    Ok(())
}
