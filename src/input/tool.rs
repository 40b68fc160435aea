//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// Exactly one tool is active at a time: selecting a stamp glyph switches to
/// [`Tool::Stamp`], and touching the stroke-width controls switches back to
/// [`Tool::Freehand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand strokes - follows the pointer drag path (default)
    Freehand,
    /// Stamp placement - a click places the active glyph
    Stamp,
}

/// The two pen widths, toggled by the width control.
///
/// The pixel value behind each name comes from configuration; commands
/// capture the resolved pixel width, not this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeWidth {
    /// Hairline pen (reference value 1px)
    Thin,
    /// Broad pen (reference value 10px)
    Thick,
}

impl StrokeWidth {
    /// Returns the other width.
    pub fn toggled(self) -> Self {
        match self {
            Self::Thin => Self::Thick,
            Self::Thick => Self::Thin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_between_the_two_widths() {
        assert_eq!(StrokeWidth::Thin.toggled(), StrokeWidth::Thick);
        assert_eq!(StrokeWidth::Thick.toggled(), StrokeWidth::Thin);
        assert_eq!(StrokeWidth::Thin.toggled().toggled(), StrokeWidth::Thin);
    }
}
