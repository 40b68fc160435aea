//! Configuration type definitions.

use crate::draw::{self, Color};
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen defaults a fresh session starts with. The session can
/// change color and width at runtime through the tool controls.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default pen color as a hex string, e.g. `"#000000"`
    #[serde(default = "default_color")]
    pub default_color: Color,

    /// Pixel width of the thin pen setting (valid range: 0.5 - 50.0)
    #[serde(default = "default_thin_width")]
    pub thin_width: f64,

    /// Pixel width of the thick pen setting (valid range: 0.5 - 50.0)
    #[serde(default = "default_thick_width")]
    pub thick_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            thin_width: default_thin_width(),
            thick_width: default_thick_width(),
        }
    }
}

/// Canvas geometry settings.
///
/// The logical canvas is small (a few hundred pixels); exports scale it up.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Logical canvas width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Logical canvas height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Default export scale factor (valid range: 0.25 - 16.0).
    /// The reference setup exports a 256x256 canvas at 4x for a
    /// 1024x1024 image.
    #[serde(default = "default_export_scale")]
    pub export_scale: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            export_scale: default_export_scale(),
        }
    }
}

/// Stamp tool settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct StampConfig {
    /// Glyph palette offered by the host UI. Any string can still be
    /// selected at runtime (custom stickers); this is just the default set.
    #[serde(default = "default_glyphs")]
    pub glyphs: Vec<String>,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            glyphs: default_glyphs(),
        }
    }
}

fn default_color() -> Color {
    draw::BLACK
}

fn default_thin_width() -> f64 {
    1.0
}

fn default_thick_width() -> f64 {
    10.0
}

fn default_canvas_size() -> u32 {
    256
}

fn default_export_scale() -> f64 {
    4.0
}

fn default_glyphs() -> Vec<String> {
    vec!["🧂".to_string(), "🌠".to_string(), "💛".to_string()]
}
