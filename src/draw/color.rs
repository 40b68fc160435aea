//! RGBA color type, hex parsing, and predefined color constants.

use serde::{Deserialize, Serialize, de, ser};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
/// Colors cross the tool-control boundary as hex strings (`#rgb` or
/// `#rrggbb`), which is also how they serialize.
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let red: Color = "#ff0000".parse().unwrap();
/// assert_eq!(red, Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    /// The string has a digit count other than 3 or 6 after the `#`.
    #[error("color '{0}' must have 3 or 6 hex digits")]
    BadLength(String),
    /// A character after the `#` is not a hex digit.
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    /// Creates a new fully opaque color from RGB components.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a `#rgb` or `#rrggbb` hex string (case-insensitive).
    ///
    /// # Errors
    /// Returns a [`ColorParseError`] describing the first problem found.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        let channel = |hex: &str| -> Result<f64, ColorParseError> {
            let value = u8::from_str_radix(hex, 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))?;
            Ok(value as f64 / 255.0)
        };

        match digits.len() {
            // Short form: each digit doubles (#f0a -> #ff00aa)
            3 => {
                let mut parts = [0.0; 3];
                for (i, c) in digits.chars().enumerate() {
                    let doubled = format!("{c}{c}");
                    parts[i] = channel(&doubled)?;
                }
                Ok(Self::rgb(parts[0], parts[1], parts[2]))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }

    /// Formats this color as a `#rrggbb` hex string (alpha is dropped).
    pub fn to_hex(self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Predefined black color (the reference stroke default)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined white color
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined red color
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};
