//! Overlay module - draw directives for the JS renderer
//!
//! Re-exports only. All logic in submodules.

mod annotate;
mod commands;

pub use annotate::{annotate, Scene};
pub use commands::{colors, Color, DrawCommand};
