// SPDX-License-Identifier: MIT
//
// HSL color model and hex conversion.
//
// Single-character variable names (r, g, b, h, s, l, c, x, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// This module implements the classic hexagonal (bi-cone) HSL model —
// the one CSS uses — rather than a perceptual space. Palette derivation
// works on hue angles and lightness percentages, and the hexagonal model
// keeps those axes exactly aligned with what users type into a color
// input.
//
// Conversion pipeline:
//
//   hex (#rrggbb) ↔ 8-bit RGB ↔ unit RGB ↔ HSL (degrees / percent)
//
// Hue lives in [0, 360), saturation and lightness in [0, 100]. The
// `Hsl` type enforces those ranges at construction; the raw kernels
// (`rgb_to_hsl`, `hsl_to_rgb`) are total functions that document their
// domain instead.

use std::fmt;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// - `h`: hue angle in degrees, `[0, 360)`. 0° = red, 120° = green,
///   240° = blue.
/// - `s`: saturation in percent, `[0, 100]`. 0 = gray, 100 = fully
///   saturated.
/// - `l`: lightness in percent, `[0, 100]`. 0 = black, 100 = white.
///
/// Values are normalized on construction: the hue wraps (negative
/// angles land back in range), saturation and lightness clamp.
///
/// # Examples
///
/// ```
/// use tinct_color::Hsl;
///
/// let cornflower = Hsl::from_hex("#667eea").unwrap();
/// let complement = cornflower.shift_hue(180.0);
/// let dimmed = cornflower.darken(20.0);
///
/// assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_hex(), "#ff0000");
/// ```
#[derive(Clone, Copy)]
pub struct Hsl {
    /// Hue angle in degrees: 0.0 to (not including) 360.0.
    pub h: f32,

    /// Saturation in percent: 0.0 (gray) to 100.0 (fully saturated).
    pub s: f32,

    /// Lightness in percent: 0.0 (black) to 100.0 (white).
    pub l: f32,
}

impl Hsl {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an HSL color, wrapping the hue into `[0, 360)` and
    /// clamping saturation and lightness to `[0, 100]`.
    #[must_use]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Create a pure gray at the given lightness (hue 0, saturation 0).
    #[must_use]
    pub fn gray(lightness: f32) -> Self {
        Self::new(0.0, 0.0, lightness)
    }

    /// Create a color from 8-bit RGB channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let (h, s, l) = rgb_to_hsl(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        );
        Self { h, s, l }
    }

    /// Parse a hex color string.
    ///
    /// Accepts exactly six hex digits, with or without a leading `#`,
    /// in either case (`#667eea`, `667EEA`). Anything else — wrong
    /// length, stray characters, shorthand forms — is rejected.
    ///
    /// # Errors
    ///
    /// Returns `None` if the string is not a valid 6-digit hex color.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let (r, g, b) = parse_hex(s)?;
        Some(Self::from_rgb8(r, g, b))
    }

    /// Pure black.
    pub const BLACK: Self = Self { h: 0.0, s: 0.0, l: 0.0 };

    /// Pure white.
    pub const WHITE: Self = Self { h: 0.0, s: 0.0, l: 100.0 };

    // ─── Operations ──────────────────────────────────────────────────────

    /// Shift the hue by `degrees`, wrapping around 360°.
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Increase lightness by `amount` percentage points (clamped to 100).
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Decrease lightness by `amount` percentage points (clamped to 0).
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        Self {
            l: (self.l - amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Whether this color is achromatic (no visible saturation).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s < 1e-3
    }

    // ─── Conversions out ─────────────────────────────────────────────────

    /// Convert to 8-bit RGB channels, rounded to nearest.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = hsl_to_rgb(self.h, self.s, self.l);
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a hex string: lowercase, zero-padded, `#`-prefixed.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Debug for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hsl::new({:.1}, {:.1}, {:.1})", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point. Achromatic
        // colors compare equal regardless of hue.
        const EPS: f32 = 1e-3;
        (self.s - other.s).abs() < EPS
            && (self.l - other.l).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Hsl {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Conversion Kernels ──────────────────────────────────────────────────────
//
// The raw math, kept as free functions so the boundary behavior (wrap,
// clamp, fallback) is testable without going through the `Hsl` type.

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Convert unit RGB (each channel in [0, 1]) to HSL
/// (degrees in [0, 360), percent in [0, 100]).
///
/// Equal max/min (gray) yields hue 0 and saturation 0. When two
/// channels tie for the maximum, the branch test runs in red, green,
/// blue order and the first match wins — an inherited property of this
/// formula family that round-trip behavior depends on, so it must not
/// be reordered.
#[must_use]
#[allow(clippy::float_cmp)] // max is one of r/g/b exactly; equality is intentional
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is undefined, default to 0.
        return (0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        let h = (g - b) / d;
        if h < 0.0 { h + 6.0 } else { h }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s * 100.0, l * 100.0)
}

/// Convert HSL (degrees, percent, percent) to unit RGB.
///
/// Uses the chroma / intermediate / match construction: each 60°-wide
/// hue sector selects which channels carry the chroma `c` and the
/// intermediate `x` before the lightness offset `m` is added.
///
/// The hue is NOT wrapped here — callers must pass `h` in [0, 360)
/// (the `Hsl` type guarantees this). A hue outside that range selects
/// no sector and falls back to the achromatic `(m, m, m)` gray.
#[must_use]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - 2.0f32.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if (0.0..60.0).contains(&h) => (c, x, 0.0),
        h if (60.0..120.0).contains(&h) => (x, c, 0.0),
        h if (120.0..180.0).contains(&h) => (0.0, c, x),
        h if (180.0..240.0).contains(&h) => (0.0, x, c),
        h if (240.0..300.0).contains(&h) => (x, 0.0, c),
        h if (300.0..360.0).contains(&h) => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    (r + m, g + m, b + m)
}

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// The standard sRGB piecewise transfer function. Needed by relative
/// luminance computation (WCAG 2.1), which is defined over linear
/// channel values.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a strict 6-digit hex color string into RGB bytes.
fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 {
        return None;
    }
    let bytes = s.as_bytes();
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some((r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
