//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, and wires resize and
//! redraw events to the GPU layer and the application.

mod runtime;

pub use runtime::{RedrawMode, Runtime, RuntimeConfig};
