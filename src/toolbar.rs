//! Presentation seam between the drawing surface and the host's toolbar.
//!
//! The host owns the toolbar markup; the surface only tells it which state
//! to show. Every indicator change goes through the [`Toolbar`] trait so the
//! displayed state cannot drift from the surface's logical state.

use crate::draw::Color;
use crate::input::Tool;

/// Toggle control content while the overlay is hidden.
pub const TOGGLE_IDLE_GLYPH: &str = "🎨";
/// Toggle control content while the overlay is active.
pub const TOGGLE_ACTIVE_GLYPH: &str = "❌";

/// Visual state the drawing surface drives on the host toolbar.
pub trait Toolbar {
    /// Shows or hides the toolbar container.
    fn set_toolbar_visible(&mut self, visible: bool);

    /// Marks the canvas as accepting pointer input (or not).
    fn set_surface_active(&mut self, active: bool);

    /// Switches the toggle control between its idle and active affordance.
    fn set_toggle_active(&mut self, active: bool);

    /// Moves the "active" indicator to the control for `tool`.
    fn mark_tool(&mut self, tool: Tool);

    /// Moves the "active" indicator to the swatch for `color`.
    fn mark_color(&mut self, color: Color);
}

/// Plain in-memory toolbar that records what it was told to display.
///
/// Used by the headless host and handy for asserting indicator state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolbarState {
    pub toolbar_visible: bool,
    pub surface_active: bool,
    pub toggle_active: bool,
    pub active_tool: Option<Tool>,
    pub active_color: Option<Color>,
}

impl ToolbarState {
    /// Content the toggle control currently shows.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.toggle_active {
            TOGGLE_ACTIVE_GLYPH
        } else {
            TOGGLE_IDLE_GLYPH
        }
    }
}

impl Toolbar for ToolbarState {
    fn set_toolbar_visible(&mut self, visible: bool) {
        self.toolbar_visible = visible;
    }

    fn set_surface_active(&mut self, active: bool) {
        self.surface_active = active;
    }

    fn set_toggle_active(&mut self, active: bool) {
        self.toggle_active = active;
    }

    fn mark_tool(&mut self, tool: Tool) {
        self.active_tool = Some(tool);
    }

    fn mark_color(&mut self, color: Color) {
        self.active_color = Some(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_follows_toggle_state() {
        let mut toolbar = ToolbarState::default();
        assert_eq!(toolbar.toggle_glyph(), TOGGLE_IDLE_GLYPH);
        toolbar.set_toggle_active(true);
        assert_eq!(toolbar.toggle_glyph(), TOGGLE_ACTIVE_GLYPH);
    }
}
