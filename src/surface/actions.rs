use crate::draw::{Color, RasterError};
use crate::input::Tool;
use crate::toolbar::Toolbar;
use crate::util;

use super::DrawingSurface;
use super::core::report;

impl<T: Toolbar> DrawingSurface<T> {
    /// Handles activation of a tool control carrying `id` ("pen", "marker", "eraser").
    ///
    /// Unknown identifiers are ignored. Returns the tool now selected.
    pub fn select_tool(&mut self, id: &str) -> Tool {
        match id.parse::<Tool>() {
            Ok(tool) => self.apply_tool(tool),
            Err(err) => log::debug!("Ignoring tool control: {err}"),
        }
        self.tool_state.tool
    }

    /// Handles activation of a color swatch carrying `value`.
    ///
    /// Unparseable values are ignored. Picking a color while the eraser is
    /// selected switches to the pen, since erasing has no color.
    pub fn select_color(&mut self, value: &str) -> Color {
        match util::parse_color(value) {
            Some(color) => self.apply_color(color),
            None => log::debug!("Ignoring color control value '{value}'"),
        }
        self.tool_state.color
    }

    /// Handles input on the brush size control.
    ///
    /// Values are clamped to 1-100; non-numeric input leaves the size alone.
    pub fn set_size(&mut self, value: &str) -> u32 {
        match util::parse_brush_size(value) {
            Some(size) => {
                self.tool_state.size = size;
                log::debug!("Brush size set to {size}px");
            }
            None => log::debug!("Ignoring size control value '{value}'"),
        }
        self.tool_state.size
    }

    /// Switches the logical tool and the toolbar's tool indicator together.
    pub(super) fn apply_tool(&mut self, tool: Tool) {
        self.tool_state.tool = tool;
        self.toolbar.mark_tool(tool);
        log::debug!("Tool set to {tool}");
    }

    /// Switches the color and its indicator, leaving the eraser for the pen.
    pub(super) fn apply_color(&mut self, color: Color) {
        self.tool_state.color = color;
        self.toolbar.mark_color(color);
        if self.tool_state.tool == Tool::Eraser {
            self.apply_tool(Tool::Pen);
        }
        log::debug!(
            "Color set to {} ({})",
            color.to_hex(),
            util::color_to_name(&color)
        );
    }

    /// Steps back one snapshot and repaints it.
    ///
    /// No-op at the first snapshot or with an empty history; there is no redo.
    /// Returns true if the cursor moved.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            log::debug!("Nothing to undo");
            return false;
        };
        report(self.raster.restore(snapshot), "repaint undo snapshot");
        report(self.rebase_stroke(), "rebase open stroke");
        true
    }

    /// Wipes the raster and records the empty canvas as its own undo step.
    pub fn clear(&mut self) {
        report(self.clear_raster(), "clear raster");
    }

    fn clear_raster(&mut self) -> Result<(), RasterError> {
        self.raster.clear()?;
        self.rebase_stroke()?;
        self.save_state()
    }
}
