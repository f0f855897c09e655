use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Current logical viewport: the window's physical size divided by the
    /// density ratio. Recomputed per pass, never cached.
    pub fn viewport(&self) -> Viewport {
        let phys = self.window.inner_size();
        Viewport::from_physical(phys.width, phys.height, self.window.scale_factor())
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,

    /// Frame timing; `None` for resize-driven redraws, which have no
    /// previous frame to measure against.
    pub time: Option<FrameTime>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready
    /// [`RenderCtx`] and [`RenderTarget`], then presents the frame.
    ///
    /// The clear covers the whole surface each frame, so redrawing an
    /// unchanged scene is idempotent.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                return self.recover(action);
            }
        };

        clear_surface(&mut frame, clear);

        let rctx = RenderCtx {
            device: self.gpu.device(),
            queue: self.gpu.queue(),
            surface_format: self.gpu.surface_format(),
            viewport: self.window.viewport(),
        };

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            };
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }

    /// Maps a surface-error action to loop control, scheduling the redraw
    /// that replaces the dropped frame when the surface was reconfigured.
    fn recover(&self, action: SurfaceErrorAction) -> AppControl {
        if action == SurfaceErrorAction::Fatal {
            return AppControl::Exit;
        }
        if retry_frame(action) {
            self.window.window.request_redraw();
        }
        AppControl::Continue
    }
}

/// A reconfigured surface has no frame on screen yet; the dropped frame must
/// be re-requested, or a resize-driven viewer stays blank until the next
/// external resize/expose event.
fn retry_frame(action: SurfaceErrorAction) -> bool {
    action == SurfaceErrorAction::Reconfigured
}

fn clear_surface(frame: &mut GpuFrame, clear: Color) {
    // Pass ends at scope exit, before the encoder is reused for drawing.
    let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("chord clear"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: &frame.view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color {
                    r: clear.r as f64,
                    g: clear.g as f64,
                    b: clear.b as f64,
                    a: clear.a as f64,
                }),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconfigured_surface_gets_a_replacement_frame() {
        assert!(retry_frame(SurfaceErrorAction::Reconfigured));
    }

    #[test]
    fn transient_and_fatal_errors_do_not_retry() {
        assert!(!retry_frame(SurfaceErrorAction::SkipFrame));
        assert!(!retry_frame(SurfaceErrorAction::Fatal));
    }
}
