//! Generic pointer event types delivered by the host.

/// A pointer event as delivered by the host environment.
///
/// Mouse events carry client coordinates directly. Touch events carry the
/// list of active touch points; the first one drives the stroke.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Mouse button or movement at client coordinates
    Mouse { x: f64, y: f64 },
    /// Touch start/move with the currently active touch points
    Touch { touches: Vec<(f64, f64)> },
}

impl PointerEvent {
    pub fn mouse(x: f64, y: f64) -> Self {
        PointerEvent::Mouse { x, y }
    }

    /// Single-finger touch at the given client coordinates.
    pub fn touch(x: f64, y: f64) -> Self {
        PointerEvent::Touch {
            touches: vec![(x, y)],
        }
    }

    /// Position the event applies to, or `None` for a touch event with no
    /// active touch points.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            PointerEvent::Mouse { x, y } => Some((*x, *y)),
            PointerEvent::Touch { touches } => touches.first().copied(),
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, PointerEvent::Touch { .. })
    }
}

/// What the host should do after the surface handled a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerResponse {
    /// The surface did nothing with the event
    Ignored,
    /// The event drew or changed stroke state
    Handled,
    /// Handled, and the host must suppress its default action (touch scrolling)
    SuppressDefault,
}

impl PointerResponse {
    pub(crate) fn handled(event: &PointerEvent) -> Self {
        if event.is_touch() {
            PointerResponse::SuppressDefault
        } else {
            PointerResponse::Handled
        }
    }

    pub fn suppress_default(self) -> bool {
        self == PointerResponse::SuppressDefault
    }
}
