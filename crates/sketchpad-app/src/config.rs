//! Application configuration.

use crate::error::{AppError, AppResult};
use peniko::Color;
use serde::{Deserialize, Serialize};
use sketchpad_core::{CanvasSize, ToolKind};
use sketchpad_render::RenderStyle;
use std::path::{Path, PathBuf};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Application configuration, loaded from JSON. Missing fields use defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Tool selected at startup.
    pub default_tool: ToolKind,
    /// Stroke width in pixels.
    pub line_width: f32,
    /// Stroke color as `[r, g, b, a]`.
    pub ink: [u8; 4],
    /// Canvas background as `[r, g, b, a]`.
    pub background: [u8; 4],
    /// Where exported PNGs are stored; defaults to the user data directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let size = CanvasSize::default();
        Self {
            title: "Sketchpad".to_string(),
            canvas_width: size.width,
            canvas_height: size.height,
            default_tool: ToolKind::default(),
            line_width: 1.0,
            ink: [0, 0, 0, 255],
            background: [255, 255, 255, 255],
            export_dir: None,
        }
    }
}

impl AppConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the file named by `SKETCHPAD_CONFIG`, or use defaults.
    pub fn from_env() -> AppResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Canvas size, raised to the minimum canvas size.
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.canvas_width, self.canvas_height).clamped()
    }

    /// Style for the canvas surface.
    pub fn render_style(&self) -> RenderStyle {
        let [r, g, b, a] = self.ink;
        let ink = Color::from_rgba8(r, g, b, a);
        let [r, g, b, a] = self.background;
        let background = Color::from_rgba8(r, g, b, a);
        RenderStyle::default()
            .with_ink(ink)
            .with_background(background)
            .with_line_width(self.line_width)
    }
}
