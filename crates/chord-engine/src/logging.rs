//! Logger setup.
//!
//! Everything else logs through the `log` facade; the viewer binaries call
//! [`init_logging`] once at the top of `main`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` backend once; later calls are no-ops.
///
/// `RUST_LOG` selects the filter (e.g. `chord_engine=debug,wgpu=warn`);
/// without it the viewer logs at `info`.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.init();
    });
}
