//! Event handling for the CLI frontend.
//!
//! The event loop interleaves fetch completions from the screen controller
//! with keyboard input, redrawing whenever the render instructions change.

mod input;
mod r#loop;

pub use r#loop::EventLoop;
