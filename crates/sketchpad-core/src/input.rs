//! Pointer events delivered by the input layer.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in raw input coordinates.
///
/// A gesture is a `Down`, any number of `Move`s, then an `Up` or `Leave`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// The pointer left the drawing surface.
    Leave { position: Point },
}

/// Derives pointer events from polled button/position state.
///
/// Windowing backends that only expose "is the button held" and "where is
/// the cursor" feed one sample per frame; transitions become events.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    pressed: bool,
    last_position: Option<Point>,
    /// Set when a press began off the area or a gesture left it; cleared on release.
    awaiting_release: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample. `position` is `None` when the cursor is outside the
    /// tracked area; `pressed` is the primary button state.
    pub fn sample(&mut self, position: Option<Point>, pressed: bool) -> Option<PointerEvent> {
        if !pressed {
            self.awaiting_release = false;
        }
        if self.awaiting_release {
            return None;
        }
        let event = match (self.pressed, pressed, position) {
            (false, true, Some(position)) => Some(PointerEvent::Down { position }),
            (false, true, None) => {
                self.awaiting_release = true;
                return None;
            }
            (true, true, Some(position)) if Some(position) != self.last_position => {
                Some(PointerEvent::Move { position })
            }
            (true, true, Some(_)) => None,
            (true, true, None) => {
                let position = self.last_position.unwrap_or(Point::ZERO);
                self.pressed = false;
                self.last_position = None;
                self.awaiting_release = true;
                return Some(PointerEvent::Leave { position });
            }
            (true, false, p) => {
                let position = p.or(self.last_position).unwrap_or(Point::ZERO);
                Some(PointerEvent::Up { position })
            }
            (false, false, _) => None,
        };
        self.pressed = pressed;
        self.last_position = if pressed { position } else { None };
        event
    }
}
