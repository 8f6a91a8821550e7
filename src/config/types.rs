//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-related settings.
///
/// Controls the tool state the surface starts with. Users change these at
/// runtime through the toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected when the overlay first opens (pen, marker, eraser)
    #[serde(default)]
    pub default_tool: Tool,

    /// Default ink color - a named color (red, green, blue, yellow, orange, pink,
    /// white, black), a hex string like `"#1e90ff"`, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size in pixels (valid range: 1 - 100)
    #[serde(default = "default_size")]
    pub default_size: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            default_color: default_color(),
            default_size: default_size(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of raster snapshots kept for undo (0 = unlimited).
    /// When exceeded, the oldest snapshots are dropped.
    #[serde(default)]
    pub max_snapshots: usize,

    /// Gzip-compress snapshots in memory. Trades CPU per stroke for a much
    /// smaller footprint on large viewports.
    #[serde(default)]
    pub compress_snapshots: bool,
}

/// Viewport used when the host does not report one (headless replay).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ViewportConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: i32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Where rendered PNGs are written when no explicit path is given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Directory for exported images (defaults to the current directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Filename template (supports chrono format specifiers, e.g. `%Y-%m-%d`)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_size() -> u32 {
    5
}

fn default_width() -> i32 {
    1280
}

fn default_height() -> i32 {
    720
}

pub(super) fn default_filename_template() -> String {
    "pagescribe_%Y-%m-%d_%H%M%S".to_string()
}
