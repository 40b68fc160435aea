//! Library exports for embedding the sketchpad core.
//!
//! Exposes the drawing command model, session state machine, and surface
//! abstraction so hosts (GUI shells, the bundled CLI, tests) can drive a
//! drawing session and paint it onto their own render targets.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;

pub use config::Config;
