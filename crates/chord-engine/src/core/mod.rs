//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform
//! loop) and application code, and the per-frame context threaded through
//! each callback. State is passed explicitly; nothing here is ambient.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
