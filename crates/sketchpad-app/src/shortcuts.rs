//! Keyboard shortcut registry and documentation.

use crate::ui::{UiAction, UiState};
use sketchpad_core::ToolKind;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    pub action: UiAction,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        action: UiAction,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            action,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+S").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    fn matches(&self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.ctrl == ctrl && self.shift == shift && self.key.eq_ignore_ascii_case(key)
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts. `state` sizes the new-canvas action.
    pub fn all(state: &UiState) -> Vec<Shortcut> {
        vec![
            Shortcut::new("R", false, false, "Rectangle tool", UiAction::SetTool(ToolKind::Rectangle)),
            Shortcut::new("L", false, false, "Line tool", UiAction::SetTool(ToolKind::Line)),
            Shortcut::new("P", false, false, "Pen tool", UiAction::SetTool(ToolKind::Pen)),
            Shortcut::new("Z", true, false, "Undo", UiAction::Undo),
            Shortcut::new("Z", true, true, "Redo", UiAction::Redo),
            Shortcut::new("Y", true, false, "Redo", UiAction::Redo),
            Shortcut::new("N", true, false, "New canvas", UiAction::NewCanvas(state.next_canvas)),
            Shortcut::new("S", true, false, "Export to PNG", UiAction::Export),
            Shortcut::new("Escape", false, false, "Cancel current stroke", UiAction::CancelGesture),
        ]
    }

    /// Action bound to a key with the given modifiers.
    pub fn lookup(key: &str, ctrl: bool, shift: bool, state: &UiState) -> Option<UiAction> {
        Self::all(state)
            .into_iter()
            .find(|shortcut| shortcut.matches(key, ctrl, shift))
            .map(|shortcut| shortcut.action)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all(&UiState::default()) {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
