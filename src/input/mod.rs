//! Input types shared between the host and the drawing surface.
//!
//! This module describes what the host hands to the surface: pointer events
//! (mouse or touch) and the drawing tool a toolbar control selects.

pub mod events;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerResponse};
pub use tool::{Tool, UnknownTool};
