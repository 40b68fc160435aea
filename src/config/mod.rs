//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sketchpad/config.toml`. Settings
//! include pen defaults, canvas geometry, and the stamp glyph palette.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{CanvasConfig, DrawingConfig, StampConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#000000"
/// thin_width = 1.0
/// thick_width = 10.0
///
/// [canvas]
/// width = 256
/// height = 256
/// export_scale = 4.0
///
/// [stamp]
/// glyphs = ["🧂", "🌠", "💛"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pen defaults (color, thin/thick widths)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas geometry and export scale
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Stamp tool glyph palette
    #[serde(default)]
    pub stamp: StampConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `thin_width`, `thick_width`: 0.5 - 50.0
    /// - `canvas.width`, `canvas.height`: 16 - 4096
    /// - `canvas.export_scale`: 0.25 - 16.0
    fn validate_and_clamp(&mut self) {
        if !(0.5..=50.0).contains(&self.drawing.thin_width) {
            log::warn!(
                "Invalid thin_width {:.1}, clamping to 0.5-50.0 range",
                self.drawing.thin_width
            );
            self.drawing.thin_width = self.drawing.thin_width.clamp(0.5, 50.0);
        }

        if !(0.5..=50.0).contains(&self.drawing.thick_width) {
            log::warn!(
                "Invalid thick_width {:.1}, clamping to 0.5-50.0 range",
                self.drawing.thick_width
            );
            self.drawing.thick_width = self.drawing.thick_width.clamp(0.5, 50.0);
        }

        if !(16..=4096).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-4096 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 4096);
        }

        if !(16..=4096).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 4096);
        }

        if !(0.25..=16.0).contains(&self.canvas.export_scale) {
            log::warn!(
                "Invalid export_scale {:.2}, clamping to 0.25-16.0 range",
                self.canvas.export_scale
            );
            self.canvas.export_scale = self.canvas.export_scale.clamp(0.25, 16.0);
        }

        // Empty glyph strings cannot be stamped; drop them
        let before = self.stamp.glyphs.len();
        self.stamp.glyphs.retain(|g| !g.is_empty());
        if self.stamp.glyphs.len() != before {
            log::warn!("Removed empty entries from stamp glyph palette");
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
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

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory (used by `sketchpad --init-config`).
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
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}
