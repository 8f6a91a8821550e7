use crate::draw::{RasterError, render_stroke};
use crate::input::{PointerEvent, PointerResponse};
use crate::toolbar::Toolbar;

use super::core::{OpenStroke, report};
use super::DrawingSurface;

impl<T: Toolbar> DrawingSurface<T> {
    /// Processes a pointer press (mouse down or touch start).
    ///
    /// # Behavior
    /// - Ignored while the overlay is hidden
    /// - Opens a new stroke at the pointer position
    /// - Asks the host to suppress scrolling for touch input
    pub fn pointer_down(&mut self, event: &PointerEvent) -> PointerResponse {
        if !self.active {
            return PointerResponse::Ignored;
        }
        let Some(position) = event.position() else {
            return PointerResponse::Ignored;
        };

        let base = match self.raster.copy_surface() {
            Ok(base) => base,
            Err(err) => {
                log::warn!("Failed to start stroke: {err}");
                return PointerResponse::Ignored;
            }
        };

        self.stroke = Some(OpenStroke {
            base,
            points: vec![position],
        });
        PointerResponse::handled(event)
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Ignored unless a stroke is open and the overlay is active
    /// - Extends the stroke to the pointer position and rasterizes it with the
    ///   current tool, color and size
    pub fn pointer_move(&mut self, event: &PointerEvent) -> PointerResponse {
        if !self.active || self.stroke.is_none() {
            return PointerResponse::Ignored;
        }
        let Some(position) = event.position() else {
            return PointerResponse::Ignored;
        };

        if let Some(stroke) = self.stroke.as_mut() {
            stroke.points.push(position);
        }
        report(self.rasterize_stroke(), "render stroke");
        PointerResponse::handled(event)
    }

    /// Processes a pointer release.
    ///
    /// Closes the open stroke, if any, and records it as one undo step no
    /// matter how many segments it has. Completes even if the overlay was
    /// hidden mid-stroke.
    pub fn pointer_up(&mut self) -> PointerResponse {
        if self.stroke.take().is_none() {
            return PointerResponse::Ignored;
        }
        report(self.save_state(), "record stroke");
        PointerResponse::Handled
    }

    /// Processes the pointer leaving the canvas; ends a stroke like a release.
    pub fn pointer_leave(&mut self) -> PointerResponse {
        self.pointer_up()
    }

    /// Repaints the stroke base, then strokes the whole path on top of it.
    ///
    /// Redrawing the full path instead of only the newest segment keeps
    /// marker ink at a uniform opacity where segments meet.
    fn rasterize_stroke(&mut self) -> Result<(), RasterError> {
        let Some(stroke) = self.stroke.as_ref() else {
            return Ok(());
        };

        let state = self.tool_state;
        let style = state.tool.stroke_style(state.color, state.size);

        self.raster.paint_surface(&stroke.base)?;
        let ctx = self.raster.context()?;
        render_stroke(&ctx, &stroke.points, &style)?;
        Ok(())
    }
}
