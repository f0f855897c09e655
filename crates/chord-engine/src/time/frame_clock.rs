use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick.
    pub dt: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0 for the first post-priming frame.
    pub frame_index: u64,
}

/// Per-loop frame clock with an explicit priming state.
///
/// The clock is a two-state machine:
/// - *priming*: the first `tick` captures its timestamp as the baseline and
///   returns `None` — there is no previous frame to measure against, so the
///   caller must not update or draw on that callback;
/// - *running*: every subsequent `tick` returns `Some(FrameTime)` with
///   `dt = now - previous`, and stores `now` as the new baseline.
///
/// Deltas saturate at zero if a supplied timestamp goes backwards; they are
/// otherwise exact (no clamping), so `dt` always equals the difference of
/// consecutive tick timestamps.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the clock to the priming state.
    ///
    /// Useful after the loop was suspended (minimize, surface loss) so the
    /// stall does not surface as one huge delta.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Advances the clock using the current monotonic time.
    pub fn tick(&mut self) -> Option<FrameTime> {
        self.tick_at(Instant::now())
    }

    /// Advances the clock using a caller-supplied timestamp.
    ///
    /// This is the pure state transition behind `tick`; tests drive it with
    /// synthetic timestamps.
    pub fn tick_at(&mut self, now: Instant) -> Option<FrameTime> {
        let Some(last) = self.last else {
            self.last = Some(now);
            return None;
        };

        let dt = now.saturating_duration_since(last);
        self.last = Some(now);

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);

        Some(ft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── priming ───────────────────────────────────────────────────────────

    #[test]
    fn first_tick_primes_without_a_delta() {
        let mut clock = FrameClock::new();
        assert!(clock.tick_at(Instant::now()).is_none());
    }

    #[test]
    fn second_tick_measures_from_the_priming_timestamp() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();

        assert!(clock.tick_at(t0).is_none());

        let ft = clock.tick_at(t0 + Duration::from_millis(16)).unwrap();
        assert_eq!(ft.dt, Duration::from_millis(16));
        assert_eq!(ft.frame_index, 0);
    }

    // ── running ───────────────────────────────────────────────────────────

    #[test]
    fn deltas_are_differences_of_consecutive_timestamps() {
        // Callback timestamps 16, 33, 50 → deltas [prime, 17, 17].
        let mut clock = FrameClock::new();
        let base = Instant::now();

        assert!(clock.tick_at(base + Duration::from_millis(16)).is_none());

        let a = clock.tick_at(base + Duration::from_millis(33)).unwrap();
        let b = clock.tick_at(base + Duration::from_millis(50)).unwrap();

        assert_eq!(a.dt, Duration::from_millis(17));
        assert_eq!(b.dt, Duration::from_millis(17));
        assert_eq!(b.frame_index, a.frame_index + 1);
    }

    #[test]
    fn backwards_time_saturates_to_zero() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();

        clock.tick_at(t0 + Duration::from_millis(10));
        let ft = clock.tick_at(t0).unwrap();
        assert_eq!(ft.dt, Duration::ZERO);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_returns_to_priming() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();

        clock.tick_at(t0);
        clock.tick_at(t0 + Duration::from_millis(16));

        clock.reset();
        // A long stall across the reset is absorbed by re-priming.
        assert!(clock.tick_at(t0 + Duration::from_secs(60)).is_none());

        let ft = clock.tick_at(t0 + Duration::from_secs(60) + Duration::from_millis(16)).unwrap();
        assert_eq!(ft.dt, Duration::from_millis(16));
    }

    #[test]
    fn frame_index_survives_reset() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();

        clock.tick_at(t0);
        clock.tick_at(t0 + Duration::from_millis(1));
        clock.reset();
        clock.tick_at(t0 + Duration::from_millis(2));

        let ft = clock.tick_at(t0 + Duration::from_millis(3)).unwrap();
        assert_eq!(ft.frame_index, 1);
    }
}
