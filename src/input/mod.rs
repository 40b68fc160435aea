//! Input handling: events, tool selection, and the session state machine.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::InputEvent;
pub use state::{DrawingState, InputState};
pub use tool::{StrokeWidth, Tool};
