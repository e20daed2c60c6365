// SPDX-License-Identifier: MIT
//
// colorcast-hsv — HSV color math for the colorcast engine.
//
// Conversions run in f64 with hue in degrees and saturation/value as
// percentages (0–100). Bytes are produced as (p * 255.0 / 100.0).round(),
// multiplying before dividing so that exact halves stay exact: a value of
// 70% is 17850 / 100 = 178.5 and rounds away from zero to 179 (0xb3).
// Dividing the percentage down to [0, 1] first would land at 178.4999…
// and flip the byte.

// Single-character variable names (r, g, b, h, s, v, c, x, m) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
// The f64→u8 cast at the end of conversion is bounded by construction.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::fmt;

/// An HSV color: hue in degrees, saturation and value as percentages.
///
/// Hue is not normalized on construction; callers that need the canonical
/// [0, 360) range wrap it themselves. Saturation and value are expected in
/// [0, 100] — conversion clamps nothing, garbage in produces garbage out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue angle in degrees.
    pub hue: f64,
    /// Saturation percentage, 0–100.
    pub saturation: f64,
    /// Value (brightness) percentage, 0–100.
    pub value: f64,
}

impl Hsv {
    /// Create an HSV color from degrees and percentages.
    #[inline]
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self { hue, saturation, value }
    }

    /// Convert to 8-bit sRGB.
    ///
    /// Sector algorithm: chroma `c = v * s`, secondary component `x`
    /// scaled by the hue's distance into its 60° sector, offset `m = v - c`
    /// added to every channel.
    #[must_use]
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = self.hue.rem_euclid(360.0);
        // Percent domain: c and m stay in 0–100 until the final byte step.
        let c = self.value * self.saturation / 100.0;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = self.value - c;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        (to_byte(r + m), to_byte(g + m), to_byte(b + m))
    }

    /// Convert to a lower-case `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Derive HSV from 8-bit sRGB.
    ///
    /// Achromatic inputs (zero delta) report hue 0.
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let saturation = if max == 0.0 { 0.0 } else { delta / max * 100.0 };
        Self::new(hue, saturation, max * 100.0)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Percentage → byte, rounding halves away from zero.
fn to_byte(p: f64) -> u8 {
    (p * 255.0 / 100.0).round() as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
