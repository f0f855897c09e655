//! GPU device + surface management.
//!
//! One window, one surface: this module owns the wgpu handles behind the
//! drawing surface and keeps the swapchain configured at the window's
//! physical resolution.

mod gpu;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
