//! Freehand drawing overlay for a host page.
//!
//! A [`DrawingSurface`] owns a viewport-sized raster, a linear undo history of
//! raster snapshots and the active tool state (pen, marker or eraser, color and
//! brush size). Hosts forward toolbar activations and pointer events to it; the
//! surface keeps the host's indicators in sync through [`toolbar::Toolbar`].
//!
//! The `pagescribe` binary is a headless host that replays recorded event
//! scripts and saves the result as PNG.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod surface;
pub mod toolbar;
pub mod util;

pub use config::Config;
pub use surface::{DrawingSurface, PageElements};
