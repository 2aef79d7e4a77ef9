//! Toolbar layout, hit testing and rendering.

use kurbo::{Point, Rect};
use sketchpad_core::{CanvasSize, ToolKind};
use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Width of the toolbar strip on the left of the canvas.
pub const TOOLBAR_WIDTH: u32 = 48;
/// Side of a square toolbar button.
pub const BUTTON_SIZE: f64 = 36.0;
/// Gap around toolbar buttons.
pub const BUTTON_MARGIN: f64 = 6.0;

/// Actions triggered from the toolbar or keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SetTool(ToolKind),
    Undo,
    Redo,
    /// Replace the canvas with a blank one of the given size.
    NewCanvas(CanvasSize),
    Export,
    CancelGesture,
}

/// State the toolbar reflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub tool: ToolKind,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Size a new canvas gets, following the window.
    pub next_canvas: CanvasSize,
}

/// A toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Tool(ToolKind),
    Undo,
    Redo,
    NewCanvas,
    Export,
}

impl ToolbarButton {
    /// Buttons top to bottom.
    pub const ALL: [ToolbarButton; 7] = [
        ToolbarButton::Tool(ToolKind::Rectangle),
        ToolbarButton::Tool(ToolKind::Line),
        ToolbarButton::Tool(ToolKind::Pen),
        ToolbarButton::Undo,
        ToolbarButton::Redo,
        ToolbarButton::NewCanvas,
        ToolbarButton::Export,
    ];

    pub fn action(self, state: &UiState) -> UiAction {
        match self {
            ToolbarButton::Tool(tool) => UiAction::SetTool(tool),
            ToolbarButton::Undo => UiAction::Undo,
            ToolbarButton::Redo => UiAction::Redo,
            ToolbarButton::NewCanvas => UiAction::NewCanvas(state.next_canvas),
            ToolbarButton::Export => UiAction::Export,
        }
    }

    /// Bounds of the button at `index` in window coordinates.
    pub fn rect(index: usize) -> Rect {
        let x0 = (TOOLBAR_WIDTH as f64 - BUTTON_SIZE) / 2.0;
        let y0 = BUTTON_MARGIN + index as f64 * (BUTTON_SIZE + BUTTON_MARGIN);
        Rect::new(x0, y0, x0 + BUTTON_SIZE, y0 + BUTTON_SIZE)
    }

    /// Button under a window-space point.
    pub fn hit_test(point: Point) -> Option<ToolbarButton> {
        Self::ALL
            .iter()
            .enumerate()
            .find(|(i, _)| Self::rect(*i).contains(point))
            .map(|(_, button)| *button)
    }

    /// Whether the button can currently be pressed.
    pub fn is_enabled(self, state: &UiState) -> bool {
        match self {
            ToolbarButton::Undo => state.can_undo,
            ToolbarButton::Redo => state.can_redo,
            ToolbarButton::Tool(_) | ToolbarButton::NewCanvas | ToolbarButton::Export => true,
        }
    }

    /// Whether the button is shown pressed.
    pub fn is_active(self, state: &UiState) -> bool {
        matches!(self, ToolbarButton::Tool(tool) if tool == state.tool)
    }

    /// Icon polylines in button-local coordinates (0..BUTTON_SIZE).
    fn icon(self) -> Vec<Vec<(f32, f32)>> {
        match self {
            ToolbarButton::Tool(ToolKind::Rectangle) => {
                vec![vec![(9.0, 11.0), (27.0, 11.0), (27.0, 25.0), (9.0, 25.0), (9.0, 11.0)]]
            }
            ToolbarButton::Tool(ToolKind::Line) => vec![vec![(9.0, 27.0), (27.0, 9.0)]],
            ToolbarButton::Tool(ToolKind::Pen) => {
                vec![vec![(8.0, 24.0), (13.0, 14.0), (18.0, 22.0), (23.0, 12.0), (28.0, 20.0)]]
            }
            ToolbarButton::Undo => vec![
                vec![(26.0, 24.0), (26.0, 16.0), (10.0, 16.0)],
                vec![(15.0, 11.0), (10.0, 16.0), (15.0, 21.0)],
            ],
            ToolbarButton::Redo => vec![
                vec![(10.0, 24.0), (10.0, 16.0), (26.0, 16.0)],
                vec![(21.0, 11.0), (26.0, 16.0), (21.0, 21.0)],
            ],
            ToolbarButton::NewCanvas => vec![
                vec![(18.0, 9.0), (18.0, 27.0)],
                vec![(9.0, 18.0), (27.0, 18.0)],
            ],
            ToolbarButton::Export => vec![
                vec![(18.0, 8.0), (18.0, 21.0)],
                vec![(13.0, 16.0), (18.0, 21.0), (23.0, 16.0)],
                vec![(9.0, 23.0), (9.0, 28.0), (27.0, 28.0), (27.0, 23.0)],
            ],
        }
    }
}

/// Height the toolbar needs to show every button.
pub fn toolbar_height() -> u32 {
    let n = ToolbarButton::ALL.len() as f64;
    (BUTTON_MARGIN + n * (BUTTON_SIZE + BUTTON_MARGIN)).ceil() as u32
}

/// Render the toolbar strip. Returns `None` for a zero height.
pub fn render_toolbar(state: &UiState, height: u32) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(TOOLBAR_WIDTH, height)?;
    pixmap.fill(Color::from_rgba8(240, 242, 245, 255));

    let mut fill = Paint::default();
    let mut ink = Paint::default();
    ink.anti_alias = true;
    let stroke = Stroke {
        width: 2.0,
        line_cap: LineCap::Round,
        ..Stroke::default()
    };

    for (i, button) in ToolbarButton::ALL.iter().enumerate() {
        let rect = ToolbarButton::rect(i);
        let (background, foreground) = if button.is_active(state) {
            (Color::from_rgba8(24, 144, 255, 255), Color::from_rgba8(255, 255, 255, 255))
        } else if button.is_enabled(state) {
            (Color::from_rgba8(255, 255, 255, 255), Color::from_rgba8(38, 38, 38, 255))
        } else {
            (Color::from_rgba8(250, 250, 250, 255), Color::from_rgba8(191, 191, 191, 255))
        };

        fill.set_color(background);
        if let Some(r) = tiny_skia::Rect::from_xywh(
            rect.x0 as f32,
            rect.y0 as f32,
            rect.width() as f32,
            rect.height() as f32,
        ) {
            pixmap.fill_rect(r, &fill, Transform::identity(), None);
        }

        ink.set_color(foreground);
        let offset = Transform::from_translate(rect.x0 as f32, rect.y0 as f32);
        for polyline in button.icon() {
            let mut pb = PathBuilder::new();
            let mut points = polyline.into_iter();
            let Some((x, y)) = points.next() else { continue };
            pb.move_to(x, y);
            for (x, y) in points {
                pb.line_to(x, y);
            }
            if let Some(path) = pb.finish() {
                pixmap.stroke_path(&path, &ink, &stroke, offset, None);
            }
        }
    }
    Some(pixmap)
}
