//! Session input state: tool settings, pointer handling, repaint.

mod core;
mod pointer;
mod render;


pub use core::{DrawingState, InputState};
