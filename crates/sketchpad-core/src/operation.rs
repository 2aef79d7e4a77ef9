//! Drawing operations and the engine that paints them.
//!
//! [`paint`] is the only place operations turn into strokes. Live preview
//! and history replay both go through it, so a replayed canvas matches what
//! was drawn interactively.

use crate::geometry::Position;
use crate::surface::RasterSurface;
use crate::tools::ToolKind;
use kurbo::{Line, Rect};

/// Tools whose operation is defined by two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    Rectangle,
    Line,
}

/// An operation defined by two corners or endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOperation {
    pub kind: PointKind,
    pub start: Position,
    pub end: Position,
}

impl PointOperation {
    /// Start a point operation with both ends at `position`.
    pub fn new(kind: PointKind, position: Position) -> Self {
        Self {
            kind,
            start: position,
            end: position,
        }
    }

    fn stroke_to(&self, end: Position) -> Stroke {
        match self.kind {
            PointKind::Rectangle => Stroke::Rect(Rect::from_points(self.start, end)),
            PointKind::Line => Stroke::Segment(Line::new(self.start, end)),
        }
    }
}

/// A pen polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathOperation {
    pub positions: Vec<Position>,
}

impl PathOperation {
    /// Start a path at `position`.
    pub fn new(position: Position) -> Self {
        Self {
            positions: vec![position],
        }
    }

    /// Most recently recorded position.
    pub fn last(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    /// Append a position to the path.
    pub fn push(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Consecutive segments of the path, in drawing order.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.positions.windows(2).map(|w| Line::new(w[0], w[1]))
    }
}

/// A committed or in-progress drawing action.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Point(PointOperation),
    Path(PathOperation),
}

impl Operation {
    /// Working operation for a gesture starting at `position` with `tool`.
    pub fn begin(tool: ToolKind, position: Position) -> Self {
        match tool {
            ToolKind::Rectangle => Operation::Point(PointOperation::new(PointKind::Rectangle, position)),
            ToolKind::Line => Operation::Point(PointOperation::new(PointKind::Line, position)),
            ToolKind::Pen => Operation::Path(PathOperation::new(position)),
        }
    }

    /// Tool that produced this operation.
    pub fn kind(&self) -> ToolKind {
        match self {
            Operation::Point(op) => match op.kind {
                PointKind::Rectangle => ToolKind::Rectangle,
                PointKind::Line => ToolKind::Line,
            },
            Operation::Path(_) => ToolKind::Pen,
        }
    }

    /// Strokes that render this operation.
    ///
    /// With `live_end`, point operations use it in place of `end`, and a
    /// path yields only the segment from its last position to `live_end`.
    pub fn strokes(&self, live_end: Option<Position>) -> Vec<Stroke> {
        match (self, live_end) {
            (Operation::Point(op), live) => vec![op.stroke_to(live.unwrap_or(op.end))],
            (Operation::Path(path), Some(live)) => path
                .last()
                .map(|last| Stroke::Segment(Line::new(last, live)))
                .into_iter()
                .collect(),
            (Operation::Path(path), None) => path.segments().map(Stroke::Segment).collect(),
        }
    }
}

/// A rendering primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    /// Outline of an axis-aligned rectangle.
    Rect(Rect),
    /// Straight segment.
    Segment(Line),
}

/// Paint `operation` onto `surface`, optionally with a live endpoint.
pub fn paint<S: RasterSurface>(surface: &mut S, operation: &Operation, live_end: Option<Position>) {
    for stroke in operation.strokes(live_end) {
        surface.stroke(&stroke);
    }
}
