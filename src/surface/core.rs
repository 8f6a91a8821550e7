//! Drawing surface state and lifecycle.

use crate::config::Config;
use crate::draw::{Color, History, Raster, RasterError, Snapshot, Viewport};
use cairo::ImageSurface;
use crate::input::Tool;
use crate::toolbar::Toolbar;

/// Host page elements the surface binds to.
///
/// Each field is `None`/`false` when the host could not find the element.
/// Optional controls (tool buttons, swatches, size input, undo, clear) are
/// not listed: their absence only means the matching setter is never called.
pub struct PageElements<T> {
    /// The raster canvas, reported by its current viewport size
    pub canvas: Option<Viewport>,
    /// The toolbar container
    pub toolbar: Option<T>,
    /// Whether the visibility toggle control exists
    pub toggle_control: bool,
}

impl<T> PageElements<T> {
    /// A page with every required element present.
    pub fn complete(viewport: Viewport, toolbar: T) -> Self {
        Self {
            canvas: Some(viewport),
            toolbar: Some(toolbar),
            toggle_control: true,
        }
    }
}

/// Tool settings read at stroke time.
///
/// Changing these affects subsequent strokes only. Undo restores pixels,
/// not tool settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    pub tool: Tool,
    pub color: Color,
    /// Brush size in pixels (1 - 100)
    pub size: u32,
}

impl ToolState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            tool: config.drawing.default_tool,
            color: config.drawing.default_color.to_color(),
            size: crate::util::clamp_brush_size(config.drawing.default_size as i64),
        }
    }
}

/// A stroke between pointer-down and pointer-up.
pub(super) struct OpenStroke {
    /// Raster contents under the stroke; each move repaints from here
    pub(super) base: ImageSurface,
    /// Pointer positions in order, starting with the pointer-down position
    pub(super) points: Vec<(f64, f64)>,
}

/// Freehand drawing overlay bound to one raster and one toolbar.
///
/// Owns the raster, the undo history and the tool state. All mutation
/// happens through the event methods, which the host calls from its
/// single event-dispatch thread.
pub struct DrawingSurface<T: Toolbar> {
    pub(super) raster: Raster,
    pub(super) toolbar: T,
    pub(super) history: History,
    pub(super) tool_state: ToolState,
    pub(super) active: bool,
    pub(super) stroke: Option<OpenStroke>,
}

impl<T: Toolbar> DrawingSurface<T> {
    /// Binds a surface to the host page.
    ///
    /// Returns `None` without creating any state when a required element is
    /// missing or the raster cannot be allocated. The surface starts hidden
    /// with an empty history; the toolbar indicators are synced to the
    /// configured tool and color.
    pub fn attach(page: PageElements<T>, config: &Config) -> Option<Self> {
        let (Some(viewport), Some(mut toolbar), true) =
            (page.canvas, page.toolbar, page.toggle_control)
        else {
            log::debug!("Drawing surface not attached: required page element missing");
            return None;
        };

        let raster = match Raster::new(viewport) {
            Ok(raster) => raster,
            Err(err) => {
                log::debug!("Drawing surface not attached: {err}");
                return None;
            }
        };

        let tool_state = ToolState::from_config(config);
        toolbar.set_toolbar_visible(false);
        toolbar.set_surface_active(false);
        toolbar.set_toggle_active(false);
        toolbar.mark_tool(tool_state.tool);
        toolbar.mark_color(tool_state.color);

        log::debug!(
            "Drawing surface attached at {}x{}",
            viewport.width,
            viewport.height
        );

        Some(Self {
            raster,
            toolbar,
            history: History::new(
                config.history.max_snapshots,
                config.history.compress_snapshots,
            ),
            tool_state,
            active: false,
            stroke: None,
        })
    }

    /// Whether pointer input currently produces strokes.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    pub fn tool_state(&self) -> ToolState {
        self.tool_state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn toolbar(&self) -> &T {
        &self.toolbar
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn viewport(&self) -> Viewport {
        self.raster.viewport()
    }

    /// Copies the pixels currently displayed.
    pub fn capture(&mut self) -> Result<Snapshot, RasterError> {
        self.raster.snapshot()
    }

    /// Reads one displayed pixel as `[r, g, b, a]`.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<[u8; 4]>, RasterError> {
        self.raster.pixel(x, y)
    }

    /// Shows or hides the overlay and returns the new state.
    ///
    /// The first activation captures the blank initial snapshot, so undo
    /// always has a floor to return to. Hiding keeps pixels and history.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.toolbar.set_toolbar_visible(self.active);
        self.toolbar.set_surface_active(self.active);
        self.toolbar.set_toggle_active(self.active);

        if self.active && self.history.is_empty() {
            report(self.save_state(), "capture initial snapshot");
        }

        log::debug!(
            "Drawing overlay {}",
            if self.active { "activated" } else { "hidden" }
        );
        self.active
    }

    /// Resizes the raster to the new viewport.
    ///
    /// The fresh buffer is blank, so the snapshot at the history cursor is
    /// painted back immediately.
    pub fn resize(&mut self, viewport: Viewport) {
        report(self.resize_raster(viewport), "resize raster");
    }

    fn resize_raster(&mut self, viewport: Viewport) -> Result<(), RasterError> {
        self.raster.resize(viewport)?;
        if let Some(current) = self.history.current() {
            self.raster.restore(current)?;
        }
        log::debug!("Raster resized to {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    /// Re-captures the open stroke's base after the raster changed under it.
    ///
    /// Clear and undo may replace pixels between pointer-down and pointer-up;
    /// the next move must start from what they left behind.
    pub(super) fn rebase_stroke(&mut self) -> Result<(), RasterError> {
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.base = self.raster.copy_surface()?;
            log::debug!("Open stroke rebased onto the current raster");
        }
        Ok(())
    }

    /// Appends a snapshot of the whole raster to the history.
    pub(super) fn save_state(&mut self) -> Result<(), RasterError> {
        let snapshot = self.raster.snapshot()?;
        self.history.push(snapshot)?;
        log::debug!(
            "Saved snapshot {} of {}",
            self.history.step().map_or(0, |step| step + 1),
            self.history.len()
        );
        Ok(())
    }
}

/// Logs a failed raster operation. Event handlers never propagate errors.
pub(super) fn report(result: Result<(), RasterError>, action: &str) {
    if let Err(err) = result {
        log::warn!("Failed to {action}: {err}");
    }
}
