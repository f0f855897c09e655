//! Static viewer: one diagonal line, redrawn only when the window resizes.

use anyhow::Result;
use winit::dpi::LogicalSize;

use chord_engine::core::{App, AppControl, FrameCtx};
use chord_engine::logging::init_logging;
use chord_engine::paint::Color;
use chord_engine::render::LineRenderer;
use chord_engine::window::{RedrawMode, Runtime, RuntimeConfig};

struct Viewer {
    line: LineRenderer,
}

impl App for Viewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        ctx.render(Color::WHITE, |rctx, target| {
            self.line.render_diagonal(rctx, target, Color::BLACK);
        })
    }
}

fn main() -> Result<()> {
    init_logging();

    let config = RuntimeConfig {
        title: "chord".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
        redraw: RedrawMode::OnResize,
    };

    Runtime::run(
        config,
        Viewer {
            line: LineRenderer::new(),
        },
    )
}
