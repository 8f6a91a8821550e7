//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named or hex color, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color, as toolbar swatches carry it
/// default_color = "#1e90ff"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Returns the color if the specification can be resolved.
    pub fn resolve(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names default to black with a warning.
    pub fn to_color(&self) -> Color {
        self.resolve().unwrap_or_else(|| {
            warn!("Unknown color '{:?}', using black", self);
            BLACK
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{ORANGE, RED};

    #[test]
    fn resolves_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("red".into()).to_color(), RED);
        assert_eq!(ColorSpec::Name("#ff8000".into()).to_color(), ORANGE);
        assert_eq!(
            ColorSpec::Rgb([0, 0, 255]).to_color(),
            Color::new(0.0, 0.0, 1.0, 1.0)
        );
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        let spec = ColorSpec::Name("mauve-ish".into());
        assert!(spec.resolve().is_none());
        assert_eq!(spec.to_color(), BLACK);
    }
}
