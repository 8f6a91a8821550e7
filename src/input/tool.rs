//! Drawing tool selection.

use crate::draw::{BLACK, Color, StrokeStyle};
use cairo::Operator;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opacity applied to marker ink.
pub const MARKER_OPACITY: f64 = 0.5;

/// Drawing tool selection.
///
/// The active tool determines how a freehand stroke is composited onto the
/// raster. Tools are chosen from the toolbar, which identifies each one by
/// the lowercase name returned from [`Tool::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Opaque ink at the selected size (default)
    #[default]
    Pen,
    /// Half-transparent ink at twice the selected size
    Marker,
    /// Removes pixels along the stroke, ignoring the selected color
    Eraser,
}

/// Error returned when a toolbar control carries an unknown tool identifier.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tool '{0}'")]
pub struct UnknownTool(pub String);

impl Tool {
    /// Identifier used by toolbar controls and the config file.
    pub fn id(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Marker => "marker",
            Tool::Eraser => "eraser",
        }
    }

    /// Line width for a stroke drawn at `size`.
    pub fn stroke_width(self, size: u32) -> f64 {
        match self {
            Tool::Marker => size as f64 * 2.0,
            Tool::Pen | Tool::Eraser => size as f64,
        }
    }

    pub fn opacity(self) -> f64 {
        match self {
            Tool::Marker => MARKER_OPACITY,
            Tool::Pen | Tool::Eraser => 1.0,
        }
    }

    pub fn operator(self) -> Operator {
        match self {
            Tool::Eraser => Operator::DestOut,
            Tool::Pen | Tool::Marker => Operator::Over,
        }
    }

    /// Resolves the paint settings for a stroke with this tool.
    ///
    /// The eraser ignores `color` and punches fully transparent holes.
    pub fn stroke_style(self, color: Color, size: u32) -> StrokeStyle {
        let color = match self {
            Tool::Eraser => BLACK,
            Tool::Pen | Tool::Marker => color.with_opacity(self.opacity()),
        };
        StrokeStyle {
            width: self.stroke_width(size),
            color,
            operator: self.operator(),
        }
    }
}

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "marker" => Ok(Tool::Marker),
            "eraser" => Ok(Tool::Eraser),
            _ => Err(UnknownTool(s.to_string())),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
