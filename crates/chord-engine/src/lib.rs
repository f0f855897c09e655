//! Chord engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the viewer binaries:
//! window/event-loop lifecycle, surface sizing, frame timing, and the
//! line render pipeline.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
