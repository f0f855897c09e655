//! Animated viewer: the diagonal line drawn every display refresh while the
//! update step advances an orbital scene — a craft coasting in a circular
//! orbit around an Earth-mass planet. A once-per-second debug log reports
//! frame rate and the craft's state.

mod sim;

use std::time::Duration;

use anyhow::Result;
use glam::DVec2;
use winit::dpi::LogicalSize;

use chord_engine::core::{App, AppControl, FrameCtx};
use chord_engine::logging::init_logging;
use chord_engine::paint::Color;
use chord_engine::render::LineRenderer;
use chord_engine::window::{RedrawMode, Runtime, RuntimeConfig};

use sim::{Craft, Planet, Simulation};

/// Earth-mass planet at the origin; craft in low orbit at circular speed
/// (v = sqrt(G*M/r) ≈ 7673 m/s at 400 km altitude).
fn demo_scene() -> Simulation {
    let planet = Planet::new(5.972e24, DVec2::ZERO);
    let craft = Craft::new(
        22_000.0,
        3_000.0,
        25_000.0,
        DVec2::new(6.771e6, 0.0),
        DVec2::new(0.0, 7_673.0),
    );
    Simulation::new(vec![planet], vec![craft])
}

struct Viewer {
    line: LineRenderer,
    sim: Simulation,
    elapsed: Duration,
    frames: u32,
}

impl App for Viewer {
    fn update(&mut self, dt: Duration) {
        self.sim.advance(dt);

        self.elapsed += dt;
        self.frames += 1;

        if self.elapsed >= Duration::from_secs(1) {
            let craft = &self.sim.crafts()[0];
            log::debug!(
                "{} frames in {:.2?} ({:.1} fps); craft at ({:.0}, {:.0}) m, {:.0} m/s",
                self.frames,
                self.elapsed,
                self.frames as f64 / self.elapsed.as_secs_f64(),
                craft.position().x,
                craft.position().y,
                craft.velocity().length(),
            );
            self.elapsed = Duration::ZERO;
            self.frames = 0;
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        ctx.render(Color::WHITE, |rctx, target| {
            self.line.render_diagonal(rctx, target, Color::BLACK);
        })
    }
}

fn main() -> Result<()> {
    init_logging();

    let config = RuntimeConfig {
        title: "chord (animated)".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
        redraw: RedrawMode::Continuous,
    };

    Runtime::run(
        config,
        Viewer {
            line: LineRenderer::new(),
            sim: demo_scene(),
            elapsed: Duration::ZERO,
            frames: 0,
        },
    )
}
