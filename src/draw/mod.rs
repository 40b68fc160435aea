//! Drawing primitives and the command model.
//!
//! This module defines the core types the sketchpad session is built from:
//! - [`Color`]: RGBA color with hex parsing and predefined constants
//! - [`Command`]: the closed set of replayable drawing commands
//! - [`CursorPreview`]: the ephemeral tool indicator, never part of history
//! - [`History`]: the two-stack undo/redo discipline
//! - [`Surface`]: the abstract paint target everything renders through

pub mod color;
pub mod command;
pub mod history;
pub mod preview;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use command::{Command, GLYPH_SIZE, Point};
pub use history::History;
pub use preview::{CursorPreview, PreviewKind};
pub use surface::{DrawOp, RecordingSurface, Scaled, Surface};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, RED, WHITE};
