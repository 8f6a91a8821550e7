//! The drawing surface: raster, undo history and tool state in one owner.
//!
//! The host forwards toolbar control activations and pointer events to a
//! [`DrawingSurface`]; the surface paints strokes on its raster and keeps the
//! host's toolbar indicators in sync through the [`crate::toolbar::Toolbar`]
//! trait.

mod actions;
mod core;
mod pointer;

pub use self::core::{DrawingSurface, PageElements, ToolState};
