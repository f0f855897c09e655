/// Current surface size in logical pixels.
///
/// This is the single size every draw reads: the runtime recomputes it from
/// window state on each pass and threads it through the frame context, so
/// drawing code never queries the platform directly.
///
/// Invariant: `width` and `height` are non-negative and reflect the most
/// recent resize notification at the time any draw occurs.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Converts a physical (backing-store) size to logical pixels.
    ///
    /// `scale_factor` is the display's density ratio (physical pixels per
    /// logical pixel).
    #[inline]
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        debug_assert!(scale_factor > 0.0);
        Self {
            width: (width as f64 / scale_factor) as f32,
            height: (height as f64 / scale_factor) as f32,
        }
    }

    /// Returns the physical backing-store size for this viewport at the
    /// given density ratio, rounded to whole pixels.
    #[inline]
    pub fn to_physical(self, scale_factor: f64) -> (u32, u32) {
        (
            (self.width as f64 * scale_factor).round() as u32,
            (self.height as f64 * scale_factor).round() as u32,
        )
    }

    /// A viewport is drawable only when both extents are positive and finite.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── logical/physical conversion ───────────────────────────────────────

    #[test]
    fn from_physical_unit_scale_is_identity() {
        assert_eq!(Viewport::from_physical(800, 600, 1.0), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn from_physical_hidpi() {
        // 1600x1200 backing store at ratio 2 is an 800x600 logical viewport.
        assert_eq!(Viewport::from_physical(1600, 1200, 2.0), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn to_physical_hidpi() {
        // 800x600 logical at ratio 2 needs a 1600x1200 backing store.
        assert_eq!(Viewport::new(800.0, 600.0).to_physical(2.0), (1600, 1200));
    }

    #[test]
    fn to_physical_fractional_scale_rounds() {
        assert_eq!(Viewport::new(800.0, 600.0).to_physical(1.5), (1200, 900));
        assert_eq!(Viewport::new(801.0, 601.0).to_physical(1.25), (1001, 751));
    }

    #[test]
    fn physical_round_trip() {
        for scale in [1.0, 1.5, 2.0] {
            let v = Viewport::from_physical(1024, 768, scale);
            assert_eq!(v.to_physical(scale), (1024, 768));
        }
    }

    #[test]
    fn zero_size_is_representable() {
        // Minimized windows report 0x0; state is kept, drawing is skipped.
        let v = Viewport::from_physical(0, 0, 2.0);
        assert_eq!(v, Viewport::new(0.0, 0.0));
        assert!(!v.is_valid());
    }

    // ── is_valid ──────────────────────────────────────────────────────────

    #[test]
    fn is_valid_positive() {
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }

    #[test]
    fn is_valid_rejects_zero_and_non_finite() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, 0.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 600.0).is_valid());
        assert!(!Viewport::new(800.0, f32::INFINITY).is_valid());
    }
}
