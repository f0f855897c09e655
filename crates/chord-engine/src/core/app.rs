use std::time::Duration;

use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the viewer binaries.
pub trait App {
    /// Called for window events the runtime does not consume itself.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame in continuous-redraw mode, before `on_frame`,
    /// with the time elapsed since the previous frame.
    ///
    /// Not called on the priming frame (no previous frame to measure
    /// against) and never called in resize-driven redraw mode. The default
    /// does nothing; implementors advance time-dependent state here.
    fn update(&mut self, dt: Duration) {
        let _ = dt;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
