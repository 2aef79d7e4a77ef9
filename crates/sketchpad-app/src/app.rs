//! Application state: a drawing session plus its toolbar and export target.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::export::ExportStore;
use crate::ui::{TOOLBAR_WIDTH, ToolbarButton, UiAction, UiState, render_toolbar, toolbar_height};
use kurbo::Point;
use sketchpad_core::{CanvasSize, PointerTracker, RasterSurface, Session, SurfaceOrigin};
use sketchpad_render::PixmapSurface;
use std::path::PathBuf;

/// Frame background outside the canvas and toolbar (0x00RRGGBB).
const FRAME_BACKGROUND: u32 = 0x00D9_D9D9;

/// The sketchpad application.
pub struct App {
    config: AppConfig,
    session: Session<PixmapSurface>,
    tracker: PointerTracker,
    /// Opened on first export.
    export: Option<ExportStore>,
    prev_pressed: bool,
    /// Window client size; new canvases fill it.
    viewport: (usize, usize),
}

impl App {
    /// Create the application with a fresh canvas sized from `config`.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let size = config.canvas_size();
        let surface = PixmapSurface::with_style(size, config.render_style())?;
        let mut session = Session::with_surface(surface)
            .with_origin(SurfaceOrigin::new(TOOLBAR_WIDTH as f64, 0.0));
        session.set_tool(config.default_tool);
        log::info!(
            "Canvas {}x{}, tool {}",
            size.width,
            size.height,
            config.default_tool.name()
        );
        let mut app = Self {
            config,
            session,
            tracker: PointerTracker::new(),
            export: None,
            prev_pressed: false,
            viewport: (0, 0),
        };
        app.viewport = app.frame_size();
        Ok(app)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &Session<PixmapSurface> {
        &self.session
    }

    /// Toolbar state for the current session.
    pub fn ui_state(&self) -> UiState {
        UiState {
            tool: self.session.tool(),
            can_undo: self.session.can_undo(),
            can_redo: self.session.can_redo(),
            next_canvas: self.next_canvas_size(),
        }
    }

    /// Record the window's client size.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.viewport = (width, height);
    }

    /// Size of a new canvas filling the viewport beside the toolbar.
    pub fn next_canvas_size(&self) -> CanvasSize {
        let (width, height) = self.viewport;
        let width = width.saturating_sub(TOOLBAR_WIDTH as usize);
        CanvasSize::new(
            u32::try_from(width).unwrap_or(u32::MAX),
            u32::try_from(height).unwrap_or(u32::MAX),
        )
        .clamped()
    }

    /// Feed one pointer sample in window coordinates.
    ///
    /// `window_pos` is `None` when the cursor is outside the window. A press
    /// that lands on a toolbar button triggers its action and never reaches
    /// the canvas.
    pub fn pointer(&mut self, window_pos: Option<Point>, pressed: bool) -> AppResult<()> {
        let press_edge = pressed && !self.prev_pressed;
        self.prev_pressed = pressed;

        let mut result = Ok(());
        if press_edge && !self.session.is_drawing() {
            if let Some(button) = window_pos.and_then(ToolbarButton::hit_test) {
                if button.is_enabled(&self.ui_state()) {
                    result = self.apply(button.action(&self.ui_state()));
                }
            }
        }

        let canvas_pos = match (window_pos, self.session.canvas_size()) {
            (Some(pos), Some(size)) if self.session.origin.contains(pos, size) => Some(pos),
            _ => None,
        };
        if let Some(event) = self.tracker.sample(canvas_pos, pressed) {
            log::trace!("{:?}", event);
            self.session.handle_pointer_event(event);
        }
        result
    }

    /// Run a toolbar or keyboard action.
    pub fn apply(&mut self, action: UiAction) -> AppResult<()> {
        match action {
            UiAction::SetTool(tool) => self.session.set_tool(tool),
            UiAction::Undo => {
                self.session.undo();
            }
            UiAction::Redo => {
                self.session.redo();
            }
            UiAction::NewCanvas(size) => self.session.new_canvas(size)?,
            UiAction::Export => {
                self.export()?;
            }
            UiAction::CancelGesture => self.session.cancel_gesture(),
        }
        Ok(())
    }

    /// Encode the committed drawing as PNG and write it to the export directory.
    ///
    /// A gesture in progress is left out of the image.
    pub fn export(&mut self) -> AppResult<PathBuf> {
        let surface = self.session.surface().ok_or(AppError::NoSurface)?;
        let png_data = if self.session.is_drawing() {
            let mut committed = surface.clone();
            self.session.history().replay(&mut committed);
            committed.to_rgba_image().encode_png()?
        } else {
            surface.to_rgba_image().encode_png()?
        };

        let store = match self.export.take() {
            Some(store) => store,
            None => match &self.config.export_dir {
                Some(dir) => ExportStore::new(dir.clone())?,
                None => ExportStore::default_location()?,
            },
        };
        let path = store.save_png(&png_data);
        self.export = Some(store);
        path
    }

    /// Window size needed for the toolbar and canvas.
    pub fn frame_size(&self) -> (usize, usize) {
        let canvas = self.session.canvas_size().unwrap_or_default();
        let width = TOOLBAR_WIDTH + canvas.width;
        let height = canvas.height.max(toolbar_height());
        (width as usize, height as usize)
    }

    /// Compose toolbar and canvas into a `0x00RRGGBB` frame of `frame_size()`.
    pub fn compose_frame(&self) -> Vec<u32> {
        let (width, height) = self.frame_size();
        let mut frame = vec![FRAME_BACKGROUND; width * height];

        if let Some(toolbar) = render_toolbar(&self.ui_state(), height as u32) {
            let toolbar_width = toolbar.width() as usize;
            for (i, pixel) in toolbar.pixels().iter().enumerate() {
                let c = pixel.demultiply();
                let (x, y) = (i % toolbar_width, i / toolbar_width);
                frame[y * width + x] =
                    (u32::from(c.red()) << 16) | (u32::from(c.green()) << 8) | u32::from(c.blue());
            }
        }

        if let Some(surface) = self.session.surface() {
            let canvas_width = surface.size().width as usize;
            let x0 = TOOLBAR_WIDTH as usize;
            for (y, row) in surface.to_rgb_u32().chunks(canvas_width).enumerate() {
                let start = y * width + x0;
                frame[start..start + canvas_width].copy_from_slice(row);
            }
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchpad_core::ToolKind;

    fn app(dir: &tempfile::TempDir) -> App {
        App::new(AppConfig {
            export_dir: Some(dir.path().join("out")),
            ..AppConfig::default()
        })
        .unwrap()
    }

    /// Drag in canvas coordinates.
    fn drag(app: &mut App, from: (f64, f64), to: (f64, f64)) {
        let offset = TOOLBAR_WIDTH as f64;
        let from = Point::new(from.0 + offset, from.1);
        let to = Point::new(to.0 + offset, to.1);
        app.pointer(Some(from), false).unwrap();
        app.pointer(Some(from), true).unwrap();
        app.pointer(Some(to), true).unwrap();
        app.pointer(Some(to), false).unwrap();
    }

    fn click(app: &mut App, button: usize) {
        let center = ToolbarButton::rect(button).center();
        app.pointer(Some(center), true).unwrap();
        app.pointer(Some(center), false).unwrap();
    }

    #[test]
    fn test_new_app_uses_config() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(AppConfig {
            canvas_width: 640,
            default_tool: ToolKind::Pen,
            export_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        })
        .unwrap();
        assert_eq!(app.session().canvas_size(), Some(CanvasSize::new(640, 300)));
        assert_eq!(app.ui_state().tool, ToolKind::Pen);
        assert_eq!(app.frame_size(), (688, 300));
    }

    #[test]
    fn test_drag_commits_operation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        drag(&mut app, (10.0, 10.0), (60.0, 40.0));
        assert_eq!(app.session().history().len(), 1);
        assert!(app.ui_state().can_undo);
    }

    #[test]
    fn test_toolbar_click_does_not_draw() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        // Pen button.
        click(&mut app, 2);
        assert_eq!(app.ui_state().tool, ToolKind::Pen);
        assert!(app.session().history().is_empty());
        assert!(!app.session().is_drawing());
    }

    #[test]
    fn test_press_from_toolbar_needs_release() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        let toolbar = ToolbarButton::rect(0).center();
        app.pointer(Some(toolbar), true).unwrap();
        app.pointer(Some(Point::new(200.0, 100.0)), true).unwrap();
        assert!(!app.session().is_drawing());
        app.pointer(Some(Point::new(200.0, 100.0)), false).unwrap();
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_undo_redo_buttons() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        drag(&mut app, (10.0, 10.0), (60.0, 40.0));
        let drawn = app.session().surface().unwrap().data().to_vec();

        click(&mut app, 3);
        assert!(!app.ui_state().can_undo);
        assert!(app.ui_state().can_redo);
        click(&mut app, 4);
        assert_eq!(app.session().surface().unwrap().data(), &drawn[..]);
    }

    #[test]
    fn test_new_canvas_clears_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        drag(&mut app, (10.0, 10.0), (60.0, 40.0));
        app.apply(UiAction::NewCanvas(CanvasSize::default())).unwrap();
        assert!(app.session().history().is_empty());
        assert!(!app.ui_state().can_redo);
    }

    #[test]
    fn test_export_writes_sequential_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        drag(&mut app, (10.0, 10.0), (60.0, 40.0));
        let first = app.export().unwrap();
        app.apply(UiAction::Export).unwrap();

        assert_eq!(first.file_name().unwrap(), "sketch-0001.png");
        assert!(dir.path().join("out").join("sketch-0002.png").is_file());
        let data = std::fs::read(first).unwrap();
        assert_eq!(&data[1..4], b"PNG");
    }

    #[test]
    fn test_compose_frame_places_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir);
        let (width, height) = app.frame_size();
        let frame = app.compose_frame();
        assert_eq!(frame.len(), width * height);
        // Canvas background is white; the toolbar strip is not.
        assert_eq!(frame[TOOLBAR_WIDTH as usize + 5], 0x00FF_FFFF);
        assert_ne!(frame[0], 0x00FF_FFFF);
    }

    #[test]
    fn test_new_canvas_follows_viewport() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        assert_eq!(app.frame_size(), (548, 300));
        assert_eq!(app.next_canvas_size(), CanvasSize::new(500, 300));

        app.set_viewport(848, 400);
        drag(&mut app, (10.0, 10.0), (60.0, 40.0));
        // New-canvas button.
        click(&mut app, 5);
        assert_eq!(app.session().canvas_size(), Some(CanvasSize::new(800, 400)));
        assert_eq!(app.frame_size(), (848, 400));
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_new_canvas_size_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        app.set_viewport(100, 50);
        assert_eq!(app.next_canvas_size(), CanvasSize::new(300, 200));
        app.set_viewport(10_000, 10_000);
        assert_eq!(app.next_canvas_size(), CanvasSize::new(3840, 2160));
    }

    #[test]
    fn test_export_mid_gesture_leaves_out_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&dir);
        drag(&mut app, (10.0, 10.0), (60.0, 40.0));
        let committed = std::fs::read(app.export().unwrap()).unwrap();

        let offset = TOOLBAR_WIDTH as f64;
        app.pointer(Some(Point::new(offset + 100.0, 100.0)), true).unwrap();
        app.pointer(Some(Point::new(offset + 200.0, 150.0)), true).unwrap();
        assert!(app.session().is_drawing());

        let during = std::fs::read(app.export().unwrap()).unwrap();
        assert_eq!(during, committed);
        assert!(app.session().is_drawing());
    }
}
