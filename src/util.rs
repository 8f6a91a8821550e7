//! Parsing helpers for values carried by toolbar controls.
//!
//! This module provides:
//! - Color name and CSS hex parsing for color swatches and the config file
//! - Color-to-name mapping for log output
//! - Brush size parsing and clamping for the size input

use crate::draw::{Color, color::*};
use std::num::IntErrorKind;

/// Smallest accepted brush size in pixels.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest accepted brush size in pixels.
pub const MAX_BRUSH_SIZE: u32 = 100;

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a color value as carried by a swatch: a CSS hex string
/// (`#rrggbb`, `#rgb`, `#rrggbbaa`) or one of the predefined names.
pub fn parse_color(value: &str) -> Option<Color> {
    Color::from_hex(value).or_else(|| name_to_color(value))
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Returns "Custom" if the color doesn't match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Brush Size
// ============================================================================

/// Clamps a brush size to [`MIN_BRUSH_SIZE`]..=[`MAX_BRUSH_SIZE`].
pub fn clamp_brush_size(size: i64) -> u32 {
    size.clamp(MIN_BRUSH_SIZE as i64, MAX_BRUSH_SIZE as i64) as u32
}

/// Parses the size input's value into a clamped brush size.
///
/// Accepts a leading integer the way a numeric input reports it ("12",
/// " 7 ", "12.5" truncates to 12). Returns `None` when no integer can be read.
pub fn parse_brush_size(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);

    match trimmed[..end].parse::<i64>() {
        Ok(size) => Some(clamp_brush_size(size)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(MAX_BRUSH_SIZE),
            IntErrorKind::NegOverflow => Some(MIN_BRUSH_SIZE),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_accepts_hex_and_names() {
        assert_eq!(parse_color("#ff0000").unwrap(), RED);
        assert_eq!(parse_color("White").unwrap(), WHITE);
        assert!(parse_color("chartreuse").is_none());
        assert!(parse_color("").is_none());
    }

    #[test]
    fn color_to_name_matches_known_colors() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(color_to_name(&Color::new(0.42, 0.42, 0.42, 1.0)), "Custom");
    }

    #[test]
    fn brush_size_parses_leading_integer() {
        assert_eq!(parse_brush_size("12"), Some(12));
        assert_eq!(parse_brush_size(" 7 "), Some(7));
        assert_eq!(parse_brush_size("12.5"), Some(12));
        assert_eq!(parse_brush_size("+3"), Some(3));
    }

    #[test]
    fn brush_size_clamps_to_range() {
        assert_eq!(parse_brush_size("0"), Some(MIN_BRUSH_SIZE));
        assert_eq!(parse_brush_size("-20"), Some(MIN_BRUSH_SIZE));
        assert_eq!(parse_brush_size("250"), Some(MAX_BRUSH_SIZE));
        assert_eq!(parse_brush_size("99999999999999999999"), Some(MAX_BRUSH_SIZE));
    }

    #[test]
    fn brush_size_rejects_non_numeric_input() {
        assert_eq!(parse_brush_size(""), None);
        assert_eq!(parse_brush_size("abc"), None);
        assert_eq!(parse_brush_size("-"), None);
    }
}
