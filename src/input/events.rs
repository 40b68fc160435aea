//! Replayable input events.
//!
//! Every external stimulus the session reacts to - pointer input from the
//! host UI layer and tool-control requests from button collaborators - has
//! an event form here. A recorded script of these events fully determines a
//! drawing, which is what the CLI replays headlessly.

use crate::draw::Color;
use crate::input::tool::StrokeWidth;
use serde::{Deserialize, Serialize};

/// One input stimulus, as delivered by the host or read from a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum InputEvent {
    /// Primary button pressed at a surface position
    PointerDown {
        /// Surface X coordinate
        x: f64,
        /// Surface Y coordinate
        y: f64,
    },
    /// Pointer moved to a surface position
    PointerMove { x: f64, y: f64 },
    /// Primary button released at a surface position
    PointerUp { x: f64, y: f64 },
    /// Pointer entered the surface bounds
    PointerEnter { x: f64, y: f64 },
    /// Pointer left the surface bounds
    PointerLeave,
    /// Select a specific pen width (also re-selects the freehand tool)
    SetWidth {
        /// Which of the two widths to activate
        width: StrokeWidth,
    },
    /// Flip between the two pen widths (also re-selects the freehand tool)
    ToggleWidth,
    /// Change the pen color (hex string form, e.g. `"#ff0000"`)
    SetColor {
        /// New pen color
        color: Color,
    },
    /// Activate the stamp tool with the given glyph
    SelectGlyph {
        /// Emoji or short text to place on click
        glyph: String,
    },
    /// Undo the most recent command
    Undo,
    /// Redo the most recently undone command
    Redo,
    /// Wipe the drawing and both history stacks
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_round_trip_through_json() {
        let events = vec![
            InputEvent::PointerDown { x: 10.0, y: 10.0 },
            InputEvent::SetColor {
                color: "#ff0000".parse().unwrap(),
            },
            InputEvent::SelectGlyph {
                glyph: "🌠".to_string(),
            },
            InputEvent::Undo,
        ];

        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<InputEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events);
    }

    #[test]
    fn script_form_is_kebab_case_tagged() {
        let json = r#"[
            {"event": "pointer-down", "x": 1.0, "y": 2.0},
            {"event": "set-width", "width": "thick"},
            {"event": "clear"}
        ]"#;
        let events: Vec<InputEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0], InputEvent::PointerDown { x: 1.0, y: 2.0 });
        assert_eq!(
            events[1],
            InputEvent::SetWidth {
                width: StrokeWidth::Thick
            }
        );
        assert_eq!(events[2], InputEvent::Clear);
    }
}
