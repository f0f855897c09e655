//! GPU rendering subsystem.
//!
//! One renderer lives here: `LineRenderer`, which strokes a single straight
//! segment. It owns its GPU resources (pipeline, uniform, vertex buffer).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform, so drawing
//!   stays density-independent.

mod ctx;
mod line;

pub use ctx::{RenderCtx, RenderTarget};
pub use line::LineRenderer;
