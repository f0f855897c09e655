//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `tick()` once per frame callback; the first call primes the
//!   baseline and yields no `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
