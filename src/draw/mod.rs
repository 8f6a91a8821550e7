//! Raster drawing primitives (Cairo-based).
//!
//! This module defines the pixel-level pieces of the overlay:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Raster`]: the viewport-sized image surface strokes are painted on
//! - [`Snapshot`]: a full copy of the raster, the unit of undo
//! - [`History`]: the linear undo history of snapshots
//! - Stroke rendering with per-tool compositing

pub mod color;
pub mod history;
pub mod raster;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use history::History;
pub use raster::{Raster, RasterError, Snapshot, Viewport};
pub use render::{StrokeStyle, render_stroke};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
