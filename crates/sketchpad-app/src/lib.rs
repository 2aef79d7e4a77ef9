//! Sketchpad Application
//!
//! The application shell: configuration, shortcuts, toolbar, export and the
//! native window loop around a [`sketchpad_core::Session`].

mod app;
mod config;
mod error;
mod export;
mod shortcuts;
mod ui;

#[cfg(feature = "native")]
mod window;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use export::ExportStore;
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{ToolbarButton, UiAction, UiState, render_toolbar};

#[cfg(feature = "native")]
pub use window::run;
