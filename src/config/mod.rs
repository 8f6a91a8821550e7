//! Configuration file support for pagescribe.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/pagescribe/config.toml`. Settings include the initial tool
//! state, undo history limits, the headless viewport, and export naming.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, HistoryConfig, OutputConfig, ViewportConfig};

use crate::util::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest viewport edge accepted from the config file.
const MAX_VIEWPORT_EDGE: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "marker"
/// default_color = "#1e90ff"
/// default_size = 8
///
/// [history]
/// max_snapshots = 50
/// compress_snapshots = true
///
/// [viewport]
/// width = 1920
/// height = 1080
///
/// [output]
/// directory = "/tmp/drawings"
/// filename_template = "sketch_%H%M%S"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial tool, color and brush size
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo history limits
    #[serde(default)]
    pub history: HistoryConfig,

    /// Fallback viewport for hosts that do not report one
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// PNG export naming
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by
    /// the default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_size`: 1 - 100
    /// - `viewport.width`, `viewport.height`: 1 - 16384
    /// - `default_color`: must name a known color or parse as hex
    /// - `filename_template`: must not be blank
    pub fn validate_and_clamp(&mut self) {
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.drawing.default_size) {
            warn!(
                "Invalid default_size {}, clamping to {}-{} range",
                self.drawing.default_size, MIN_BRUSH_SIZE, MAX_BRUSH_SIZE
            );
            self.drawing.default_size = self
                .drawing
                .default_size
                .clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        }

        if self.drawing.default_color.resolve().is_none() {
            warn!(
                "Invalid default_color {:?}, falling back to black",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("black".to_string());
        }

        for (name, edge) in [
            ("width", &mut self.viewport.width),
            ("height", &mut self.viewport.height),
        ] {
            if !(1..=MAX_VIEWPORT_EDGE).contains(&*edge) {
                warn!(
                    "Invalid viewport {} {}, clamping to 1-{} range",
                    name, edge, MAX_VIEWPORT_EDGE
                );
                *edge = (*edge).clamp(1, MAX_VIEWPORT_EDGE);
            }
        }

        if self.output.filename_template.trim().is_empty() {
            warn!("Empty output filename_template, using default");
            self.output.filename_template = types::default_filename_template();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pagescribe/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pagescribe");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a TOML document without validating it.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file, for editors and validators.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;
    use crate::input::Tool;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.drawing.default_tool, Tool::Pen);
        assert_eq!(config.drawing.default_size, 5);
        assert_eq!(config.history.max_snapshots, 0);
        assert!(!config.history.compress_snapshots);
        assert_eq!((config.viewport.width, config.viewport.height), (1280, 720));
        assert!(config.output.directory.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::from_toml(
            r##"
            [drawing]
            default_tool = "eraser"
            default_color = "#ff0000"
            default_size = 12

            [history]
            max_snapshots = 20
            compress_snapshots = true

            [viewport]
            width = 640
            height = 480

            [output]
            directory = "/tmp/out"
            filename_template = "pic_%H"
            "##,
        )
        .unwrap();

        assert_eq!(config.drawing.default_tool, Tool::Eraser);
        assert_eq!(config.drawing.default_color.to_color(), RED);
        assert_eq!(config.drawing.default_size, 12);
        assert_eq!(config.history.max_snapshots, 20);
        assert!(config.history.compress_snapshots);
        assert_eq!(config.viewport.width, 640);
        assert_eq!(config.output.directory, Some(PathBuf::from("/tmp/out")));
        assert_eq!(config.output.filename_template, "pic_%H");
    }

    #[test]
    fn rgb_array_color_is_accepted() {
        let config = Config::from_toml("[drawing]\ndefault_color = [255, 0, 0]\n").unwrap();
        assert_eq!(config.drawing.default_color, ColorSpec::Rgb([255, 0, 0]));
    }

    #[test]
    fn unknown_tool_is_a_parse_error() {
        assert!(Config::from_toml("[drawing]\ndefault_tool = \"crayon\"\n").is_err());
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.drawing.default_size = 0;
        config.drawing.default_color = ColorSpec::Name("not-a-color".into());
        config.viewport.width = -5;
        config.viewport.height = 100_000;
        config.output.filename_template = "   ".into();

        config.validate_and_clamp();

        assert_eq!(config.drawing.default_size, MIN_BRUSH_SIZE);
        assert_eq!(config.drawing.default_color, ColorSpec::Name("black".into()));
        assert_eq!(config.viewport.width, 1);
        assert_eq!(config.viewport.height, MAX_VIEWPORT_EDGE);
        assert_eq!(
            config.output.filename_template,
            types::default_filename_template()
        );
    }

    #[test]
    fn example_config_parses_cleanly() {
        let mut config = Config::from_toml(include_str!("../../config.example.toml")).unwrap();
        let before = format!("{config:?}");
        config.validate_and_clamp();
        assert_eq!(before, format!("{config:?}"));
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["drawing", "history", "viewport", "output"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
