//! Linear undo/redo history of committed operations.

use crate::operation::{Operation, paint};
use crate::surface::RasterSurface;

/// Ordered log of committed operations with a cursor.
///
/// Operations at indices `<= cursor` are visible on the surface; those after
/// it can be redone. Committing while operations are redoable discards them,
/// so the log never branches.
///
/// Undo clears the surface and replays every operation still visible, since
/// a raster surface has no way to take back a single stroke.
#[derive(Debug, Clone, Default)]
pub struct History {
    operations: Vec<Operation>,
    /// Number of applied operations (`cursor + 1`).
    applied: usize,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the last applied operation, `None` when nothing is applied.
    pub fn cursor(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// Number of operations in the log, including redoable ones.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// All operations in the log.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Operations currently shown on the surface.
    pub fn visible(&self) -> &[Operation] {
        &self.operations[..self.applied]
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.applied < self.operations.len()
    }

    /// Append an operation, discarding anything redoable.
    pub fn commit(&mut self, operation: Operation) {
        let discarded = self.operations.len() - self.applied;
        if discarded > 0 {
            log::debug!("Discarding {} redoable operation(s)", discarded);
        }
        self.operations.truncate(self.applied);
        self.operations.push(operation);
        self.applied = self.operations.len();
        log::debug!("Committed operation {} ({:?})", self.applied - 1, self.operations[self.applied - 1].kind());
    }

    /// Hide the last applied operation.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo<S: RasterSurface>(&mut self, surface: &mut S) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.applied -= 1;
        self.replay(surface);
        log::debug!("Undo -> cursor {:?}", self.cursor());
        true
    }

    /// Re-apply the next redoable operation.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo<S: RasterSurface>(&mut self, surface: &mut S) -> bool {
        if !self.can_redo() {
            return false;
        }
        paint(surface, &self.operations[self.applied], None);
        self.applied += 1;
        log::debug!("Redo -> cursor {:?}", self.cursor());
        true
    }

    /// Clear the surface and paint every visible operation.
    pub fn replay<S: RasterSurface>(&self, surface: &mut S) {
        surface.clear();
        for operation in self.visible() {
            paint(surface, operation, None);
        }
    }

    /// Empty the log and clear the surface.
    pub fn reset<S: RasterSurface>(&mut self, surface: &mut S) {
        self.clear();
        surface.clear();
    }

    /// Empty the log without touching any surface.
    pub fn clear(&mut self) {
        self.operations.clear();
        self.applied = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{PathOperation, PointKind, PointOperation, Stroke};
    use crate::testing::RecordingSurface;
    use kurbo::{Line, Point, Rect};

    fn line(x: f64) -> Operation {
        Operation::Point(PointOperation {
            kind: PointKind::Line,
            start: Point::new(x, 0.0),
            end: Point::new(x, 10.0),
        })
    }

    /// Commit and paint, the way a finished gesture leaves the surface.
    fn draw(history: &mut History, surface: &mut RecordingSurface, op: Operation) {
        paint(surface, &op, None);
        history.commit(op);
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_cursor_follows_commits() {
        let mut history = History::new();
        for i in 0..5 {
            history.commit(line(i as f64));
            assert_eq!(history.cursor(), Some(history.len() - 1));
        }
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn test_undo_replays_prefix() {
        let mut history = History::new();
        let mut surface = RecordingSurface::default();
        draw(&mut history, &mut surface, line(1.0));
        draw(&mut history, &mut surface, line(2.0));

        assert!(history.undo(&mut surface));
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(surface.clears, 1);
        assert_eq!(
            surface.strokes,
            vec![Stroke::Segment(Line::new((1.0, 0.0), (1.0, 10.0)))]
        );

        assert!(history.undo(&mut surface));
        assert_eq!(history.cursor(), None);
        assert!(surface.strokes.is_empty());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_undo_redo_restores_surface() {
        let mut history = History::new();
        let mut surface = RecordingSurface::default();
        draw(&mut history, &mut surface, line(1.0));
        draw(
            &mut history,
            &mut surface,
            Operation::Path(PathOperation {
                positions: vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)],
            }),
        );
        let before = surface.strokes.clone();
        let cursor = history.cursor();

        assert!(history.undo(&mut surface));
        assert!(history.redo(&mut surface));

        assert_eq!(history.cursor(), cursor);
        assert_eq!(surface.strokes, before);
    }

    #[test]
    fn test_commit_after_undo_truncates() {
        let (a, b, c, d) = (line(1.0), line(2.0), line(3.0), line(4.0));
        let mut history = History::new();
        let mut surface = RecordingSurface::default();
        draw(&mut history, &mut surface, a.clone());
        draw(&mut history, &mut surface, b);
        draw(&mut history, &mut surface, c);

        history.undo(&mut surface);
        history.undo(&mut surface);
        assert_eq!(history.cursor(), Some(0));

        draw(&mut history, &mut surface, d.clone());
        assert_eq!(history.operations(), &[a, d]);
        assert_eq!(history.cursor(), Some(1));
        assert!(!history.redo(&mut surface));
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = History::new();
        let mut surface = RecordingSurface::default();
        assert!(!history.undo(&mut surface));
        assert_eq!(history.cursor(), None);
        assert!(history.is_empty());
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn test_redo_at_end_is_noop() {
        let mut history = History::new();
        let mut surface = RecordingSurface::default();
        draw(&mut history, &mut surface, line(1.0));
        let before = surface.clone();
        assert!(!history.redo(&mut surface));
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(surface, before);
    }

    #[test]
    fn test_redo_paints_single_operation() {
        let mut history = History::new();
        let mut surface = RecordingSurface::default();
        let rect = Operation::Point(PointOperation {
            kind: PointKind::Rectangle,
            start: Point::new(10.0, 10.0),
            end: Point::new(50.0, 40.0),
        });
        draw(&mut history, &mut surface, rect);
        history.undo(&mut surface);
        let clears = surface.clears;

        assert!(history.redo(&mut surface));
        assert_eq!(surface.clears, clears);
        assert_eq!(surface.strokes, vec![Stroke::Rect(Rect::new(10.0, 10.0, 50.0, 40.0))]);
    }

    #[test]
    fn test_reset() {
        let mut history = History::new();
        let mut surface = RecordingSurface::default();
        draw(&mut history, &mut surface, line(1.0));
        draw(&mut history, &mut surface, line(2.0));
        history.undo(&mut surface);

        history.reset(&mut surface);
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(!history.can_redo());
        assert!(surface.strokes.is_empty());
    }
}
