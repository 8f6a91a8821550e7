//! Recorded host-event scripts and their replay against a surface.
//!
//! A script is a JSON document listing host events in dispatch order:
//!
//! ```json
//! {
//!   "viewport": { "width": 320, "height": 240 },
//!   "events": [
//!     { "type": "toggle" },
//!     { "type": "select_color", "color": "#ff0000" },
//!     { "type": "pointer_down", "x": 10, "y": 10 },
//!     { "type": "pointer_move", "x": 200, "y": 120 },
//!     { "type": "pointer_up" },
//!     { "type": "undo" }
//!   ]
//! }
//! ```

use crate::draw::Viewport;
use crate::input::{PointerEvent, Tool};
use crate::surface::DrawingSurface;
use crate::toolbar::Toolbar;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A recorded session: optional viewport plus events in dispatch order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Viewport the recording was made at
    #[serde(default)]
    pub viewport: Option<Viewport>,
    pub events: Vec<HostEvent>,
}

/// One event as the host would dispatch it to the surface.
///
/// Control events carry the raw string the control exposes, exactly as a
/// toolbar's data attribute or input value would.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    Toggle,
    SelectTool {
        tool: String,
    },
    SelectColor {
        color: String,
    },
    SetSize {
        value: String,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        touch: bool,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        touch: bool,
    },
    PointerUp,
    PointerLeave,
    Undo,
    Clear,
    Resize {
        width: i32,
        height: i32,
    },
}

impl HostEvent {
    fn pointer(x: f64, y: f64, touch: bool) -> PointerEvent {
        if touch {
            PointerEvent::touch(x, y)
        } else {
            PointerEvent::mouse(x, y)
        }
    }
}

impl Script {
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("Invalid script JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&source).with_context(|| format!("Failed to parse script {}", path.display()))
    }
}

/// Summary of a replayed script.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub events_applied: usize,
    pub strokes_completed: usize,
    pub history_len: usize,
    pub history_step: Option<usize>,
    pub active: bool,
    pub tool: Tool,
    pub color: String,
    pub size: u32,
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let step = self
            .history_step
            .map_or_else(|| "none".to_string(), |step| step.to_string());
        write!(
            f,
            "Replayed {} events ({} strokes): {} snapshots, cursor at {}, overlay {}, {} {} {}px",
            self.events_applied,
            self.strokes_completed,
            self.history_len,
            step,
            if self.active { "active" } else { "hidden" },
            self.tool,
            self.color,
            self.size
        )
    }
}

/// Feeds `events` to the surface in order.
pub fn replay<T: Toolbar>(surface: &mut DrawingSurface<T>, events: &[HostEvent]) -> ReplayReport {
    let mut strokes_completed = 0;

    for event in events {
        log::trace!("Replaying {event:?}");
        match event {
            HostEvent::Toggle => {
                surface.toggle();
            }
            HostEvent::SelectTool { tool } => {
                surface.select_tool(tool);
            }
            HostEvent::SelectColor { color } => {
                surface.select_color(color);
            }
            HostEvent::SetSize { value } => {
                surface.set_size(value);
            }
            HostEvent::PointerDown { x, y, touch } => {
                surface.pointer_down(&HostEvent::pointer(*x, *y, *touch));
            }
            HostEvent::PointerMove { x, y, touch } => {
                surface.pointer_move(&HostEvent::pointer(*x, *y, *touch));
            }
            HostEvent::PointerUp | HostEvent::PointerLeave => {
                let was_drawing = surface.is_drawing();
                if matches!(event, HostEvent::PointerUp) {
                    surface.pointer_up();
                } else {
                    surface.pointer_leave();
                }
                if was_drawing {
                    strokes_completed += 1;
                }
            }
            HostEvent::Undo => {
                surface.undo();
            }
            HostEvent::Clear => surface.clear(),
            HostEvent::Resize { width, height } => surface.resize(Viewport::new(*width, *height)),
        }
    }

    let state = surface.tool_state();
    let report = ReplayReport {
        events_applied: events.len(),
        strokes_completed,
        history_len: surface.history().len(),
        history_step: surface.history().step(),
        active: surface.is_active(),
        tool: state.tool,
        color: state.color.to_hex(),
        size: state.size,
    };
    log::info!("{report}");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::surface::PageElements;
    use crate::toolbar::ToolbarState;

    const SCRIPT: &str = r##"{
        "viewport": { "width": 64, "height": 48 },
        "events": [
            { "type": "toggle" },
            { "type": "select_tool", "tool": "marker" },
            { "type": "select_color", "color": "#ff0000" },
            { "type": "set_size", "value": "3" },
            { "type": "pointer_down", "x": 5, "y": 5 },
            { "type": "pointer_move", "x": 40, "y": 30 },
            { "type": "pointer_up" },
            { "type": "pointer_down", "x": 5, "y": 40, "touch": true },
            { "type": "pointer_move", "x": 60, "y": 40, "touch": true },
            { "type": "pointer_leave" },
            { "type": "undo" },
            { "type": "resize", "width": 80, "height": 60 },
            { "type": "clear" }
        ]
    }"##;

    #[test]
    fn parses_every_event_kind() {
        let script = Script::from_json(SCRIPT).unwrap();
        assert_eq!(script.viewport, Some(Viewport::new(64, 48)));
        assert_eq!(script.events.len(), 13);
        assert_eq!(
            script.events[7],
            HostEvent::PointerDown {
                x: 5.0,
                y: 40.0,
                touch: true
            }
        );
    }

    #[test]
    fn rejects_unknown_event_type() {
        let err = Script::from_json(r#"{ "events": [ { "type": "redo" } ] }"#).unwrap_err();
        assert!(err.to_string().contains("Invalid script JSON"));
    }

    #[test]
    fn replay_reports_final_state() {
        let script = Script::from_json(SCRIPT).unwrap();
        let page = PageElements::complete(script.viewport.unwrap(), ToolbarState::default());
        let mut surface = DrawingSurface::attach(page, &Config::default()).unwrap();

        let report = replay(&mut surface, &script.events);

        assert_eq!(report.events_applied, 13);
        assert_eq!(report.strokes_completed, 2);
        // blank + stroke + stroke, undo, then clear truncates the last stroke
        assert_eq!(report.history_len, 3);
        assert_eq!(report.history_step, Some(2));
        assert!(report.active);
        assert_eq!(report.tool, Tool::Marker);
        assert_eq!(report.color, "#ff0000");
        assert_eq!(report.size, 3);
        assert_eq!(surface.viewport(), Viewport::new(80, 60));
    }

    #[test]
    fn report_display_is_one_line() {
        let report = ReplayReport {
            events_applied: 2,
            strokes_completed: 0,
            history_len: 0,
            history_step: None,
            active: false,
            tool: Tool::Pen,
            color: "#000000".into(),
            size: 5,
        };
        let text = report.to_string();
        assert!(text.contains("cursor at none"));
        assert!(!text.contains('\n'));
    }
}
