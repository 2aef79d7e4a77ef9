//! Tool system: the active tool and the gesture state machine.

use crate::geometry::Position;
use crate::history::History;
use crate::operation::{Operation, paint};
use crate::surface::RasterSurface;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Rectangle,
    Line,
    Pen,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 3] = [ToolKind::Rectangle, ToolKind::Line, ToolKind::Pen];

    /// Get display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Line => "Line",
            ToolKind::Pen => "Pen",
        }
    }

    /// Whether the tool previews against a snapshot taken at gesture start.
    pub fn uses_snapshot(self) -> bool {
        match self {
            ToolKind::Rectangle | ToolKind::Line => true,
            ToolKind::Pen => false,
        }
    }
}

/// A gesture in progress.
pub(crate) struct ActiveGesture<Snap> {
    /// Working copy, separate from the committed log.
    operation: Operation,
    /// Surface before the gesture; restored before every preview repaint.
    snapshot: Option<Snap>,
}

impl<Snap> ActiveGesture<Snap> {
    /// The operation being built.
    fn operation(&self) -> &Operation {
        &self.operation
    }
}

/// State of a tool interaction.
pub(crate) enum ToolState<Snap> {
    /// Tool is idle, waiting for interaction.
    Idle,
    /// A gesture is being drawn.
    Drawing(ActiveGesture<Snap>),
}

/// Manages the current tool and drives gestures on a surface.
pub struct ToolManager<S: RasterSurface> {
    /// Tool used by the next gesture.
    pub current_tool: ToolKind,
    state: ToolState<S::Snapshot>,
}

impl<S: RasterSurface> Default for ToolManager<S> {
    fn default() -> Self {
        Self {
            current_tool: ToolKind::default(),
            state: ToolState::Idle,
        }
    }
}

impl<S: RasterSurface> fmt::Debug for ToolManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolManager")
            .field("current_tool", &self.current_tool)
            .field("working", &self.working_operation())
            .finish()
    }
}

impl<S: RasterSurface> ToolManager<S> {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tool for subsequent gestures. A gesture already in progress
    /// keeps the tool it started with.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
    }

    /// Check if a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, ToolState::Drawing(_))
    }

    /// Operation of the gesture in progress.
    pub fn working_operation(&self) -> Option<&Operation> {
        match &self.state {
            ToolState::Drawing(gesture) => Some(gesture.operation()),
            ToolState::Idle => None,
        }
    }

    /// Start a gesture at `position`.
    ///
    /// A gesture still in progress is finished at its last position first.
    pub fn pointer_down(&mut self, surface: &mut S, history: &mut History, position: Position) {
        if let Some(last) = self.working_operation().and_then(last_position) {
            log::debug!("Pointer down during an active gesture; finishing it first");
            self.pointer_up(surface, history, last);
        }

        let operation = Operation::begin(self.current_tool, position);
        let snapshot = self.current_tool.uses_snapshot().then(|| surface.snapshot());
        log::trace!("Begin {:?} gesture at {:?}", self.current_tool, position);
        self.state = ToolState::Drawing(ActiveGesture { operation, snapshot });
    }

    /// Update the gesture preview. Ignored when idle.
    pub fn pointer_move(&mut self, surface: &mut S, position: Position) {
        let ToolState::Drawing(gesture) = &mut self.state else {
            log::trace!("Ignoring pointer move without an active gesture");
            return;
        };
        advance(surface, gesture, position);
    }

    /// Finish the gesture at `position` and commit it.
    /// Returns true if an operation was committed.
    pub fn pointer_up(&mut self, surface: &mut S, history: &mut History, position: Position) -> bool {
        let ToolState::Drawing(mut gesture) = std::mem::replace(&mut self.state, ToolState::Idle) else {
            log::trace!("Ignoring pointer up without an active gesture");
            return false;
        };

        // A pen click with no movement still records a zero-length segment.
        let at_tail = matches!(
            &gesture.operation,
            Operation::Path(path) if path.positions.len() > 1 && path.last() == Some(position)
        );
        if !at_tail {
            advance(surface, &mut gesture, position);
        }

        let ActiveGesture { operation, snapshot } = gesture;
        drop(snapshot);
        history.commit(operation);
        true
    }

    /// Abandon the gesture without committing, erasing its preview.
    pub fn cancel(&mut self, surface: &mut S, history: &History) {
        let ToolState::Drawing(gesture) = std::mem::replace(&mut self.state, ToolState::Idle) else {
            return;
        };
        match &gesture.snapshot {
            Some(snapshot) => surface.restore(snapshot),
            // Pen segments were painted incrementally; rebuild from the log.
            None => history.replay(surface),
        }
        log::debug!("Cancelled {:?} gesture", gesture.operation.kind());
    }

    /// Drop any gesture without touching a surface.
    pub fn abandon(&mut self) {
        self.state = ToolState::Idle;
    }
}

/// Repaint the preview with `position` as the live endpoint and record it.
fn advance<S: RasterSurface>(surface: &mut S, gesture: &mut ActiveGesture<S::Snapshot>, position: Position) {
    if let Some(snapshot) = &gesture.snapshot {
        surface.restore(snapshot);
    }
    paint(surface, &gesture.operation, Some(position));
    match &mut gesture.operation {
        Operation::Point(op) => op.end = position,
        Operation::Path(path) => path.push(position),
    }
}

fn last_position(operation: &Operation) -> Option<Position> {
    match operation {
        Operation::Point(op) => Some(op.end),
        Operation::Path(path) => path.last(),
    }
}
