//! Drawing session: the state shared by the canvas, toolbar and history UI.

use crate::geometry::{CanvasSize, SurfaceOrigin};
use crate::history::History;
use crate::input::PointerEvent;
use crate::surface::{RasterSurface, SurfaceResult};
use crate::tools::{ToolKind, ToolManager};
use kurbo::Point;

/// Runtime state of one canvas.
///
/// Owned by the application and passed by reference to whatever needs it.
/// The surface is optional: until one is attached (or after it is detached)
/// every drawing entry point is a silent no-op.
pub struct Session<S: RasterSurface> {
    surface: Option<S>,
    history: History,
    tools: ToolManager<S>,
    /// Placement of the surface in input coordinates.
    pub origin: SurfaceOrigin,
}

impl<S: RasterSurface> Default for Session<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RasterSurface> Session<S> {
    /// Create a session with no surface attached.
    pub fn new() -> Self {
        Self {
            surface: None,
            history: History::new(),
            tools: ToolManager::new(),
            origin: SurfaceOrigin::ZERO,
        }
    }

    /// Create a session drawing on `surface`.
    pub fn with_surface(surface: S) -> Self {
        let mut session = Self::new();
        session.surface = Some(surface);
        session
    }

    /// Set where the surface sits in input coordinates.
    pub fn with_origin(mut self, origin: SurfaceOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// The surface, if one is attached.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Attach a surface and repaint the visible history onto it.
    pub fn attach_surface(&mut self, mut surface: S) {
        self.tools.abandon();
        self.history.replay(&mut surface);
        self.surface = Some(surface);
    }

    /// Detach the surface, abandoning any gesture.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.tools.abandon();
        self.surface.take()
    }

    /// Size of the attached surface.
    pub fn canvas_size(&self) -> Option<CanvasSize> {
        self.surface.as_ref().map(|surface| surface.size())
    }

    /// Committed history (read-only).
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current tool.
    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    /// Set the tool used by the next gesture.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool != self.tools.current_tool {
            log::debug!("Tool -> {}", tool.name());
        }
        self.tools.set_tool(tool);
    }

    /// Check if a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.tools.is_drawing()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Dispatch a pointer event in raw input coordinates.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
            PointerEvent::Leave { position } => self.pointer_leave(position),
        }
    }

    pub fn pointer_down(&mut self, raw: Point) {
        let Some(surface) = self.surface.as_mut() else {
            log::trace!("Pointer down dropped: no surface");
            return;
        };
        let position = self.origin.resolve(raw);
        self.tools.pointer_down(surface, &mut self.history, position);
    }

    pub fn pointer_move(&mut self, raw: Point) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let position = self.origin.resolve(raw);
        self.tools.pointer_move(surface, position);
    }

    pub fn pointer_up(&mut self, raw: Point) {
        let Some(surface) = self.surface.as_mut() else {
            log::trace!("Pointer up dropped: no surface");
            return;
        };
        let position = self.origin.resolve(raw);
        self.tools.pointer_up(surface, &mut self.history, position);
    }

    /// The pointer left the surface; finishes the gesture as if released.
    pub fn pointer_leave(&mut self, raw: Point) {
        if self.tools.is_drawing() {
            log::debug!("Pointer left the surface; finishing gesture");
        }
        self.pointer_up(raw);
    }

    /// Abandon the gesture in progress, erasing its preview.
    pub fn cancel_gesture(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            self.tools.cancel(surface, &self.history);
        }
    }

    /// Undo the last visible operation.
    /// Returns true if undo was performed.
    pub fn undo(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        if self.tools.is_drawing() {
            log::debug!("Undo ignored while drawing");
            return false;
        }
        self.history.undo(surface)
    }

    /// Redo the next undone operation.
    /// Returns true if redo was performed.
    pub fn redo(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        if self.tools.is_drawing() {
            log::debug!("Redo ignored while drawing");
            return false;
        }
        self.history.redo(surface)
    }

    /// Replace the canvas with a fresh surface of `size` and empty history.
    ///
    /// `size` is raised to the minimum canvas size. On failure the current
    /// canvas is left untouched.
    pub fn new_canvas(&mut self, size: CanvasSize) -> SurfaceResult<()> {
        let size = size.clamped();
        let mut surface = match &self.surface {
            Some(current) => current.with_size(size)?,
            None => S::create(size)?,
        };
        self.tools.abandon();
        self.history.reset(&mut surface);
        self.surface = Some(surface);
        log::info!("New canvas {}x{}", size.width, size.height);
        Ok(())
    }
}
