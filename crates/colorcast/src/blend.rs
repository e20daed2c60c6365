//! Circular interpolation — bracket search and linear blending.
//!
//! Works entirely against the validated [`CastConfig`]: the breakpoint
//! sequence is sorted and extends past both ends of [0, 360) via the wrap
//! points, so for any normalized hue both bracketing breakpoints exist.

use std::collections::BTreeMap;

use colorcast_hsv::Hsv;

use crate::config::CastConfig;

impl CastConfig {
    /// Interpolate every theme's saturation/value at the given hue.
    ///
    /// The hue is normalized into [0, 360) with a true modulo, so negative
    /// and overflowing inputs wrap correctly. Each theme's components are
    /// blended linearly between the two bracketing breakpoints; the result
    /// carries the normalized hue alongside.
    ///
    /// Pure: the same config and hue always yield the same triples.
    #[must_use]
    pub fn sample(&self, hue_in: i32) -> BTreeMap<String, Hsv> {
        let hue = hue_in.rem_euclid(360);

        // Greatest breakpoint <= hue and smallest breakpoint >= hue. The
        // first point is negative and the last is >= 360, so both indices
        // are in range for any hue in [0, 360).
        let below = self.points.partition_point(|&p| p <= hue);
        let left = self.points[below - 1];
        let above = self.points.partition_point(|&p| p < hue);
        let right = self.points[above];

        // A degenerate bracket (hue lands exactly on a breakpoint) has
        // identical settings on both sides, so any factor gives the same
        // result; 1 keeps the arithmetic total instead of dividing by zero.
        let span = right - left;
        let factor = if span == 0 {
            1.0
        } else {
            f64::from(hue - left) / f64::from(span)
        };

        let left_settings = &self.settings[&left];
        let right_settings = &self.settings[&right];

        self.themes
            .iter()
            .map(|theme| {
                let lo = left_settings[theme];
                let hi = right_settings[theme];
                let saturation = (hi.saturation - lo.saturation).mul_add(factor, lo.saturation);
                let value = (hi.value - lo.value).mul_add(factor, lo.value);
                (theme.clone(), Hsv::new(f64::from(hue), saturation, value))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
