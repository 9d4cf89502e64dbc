//! Swatch label legibility.
//!
//! Each rendered swatch shows its hex string on top of the swatch
//! color, so the label must be black on light swatches and white on
//! dark ones. "Light" and "dark" here are photometric, not HSL
//! lightness: WCAG 2.1 relative luminance, computed over linearized
//! sRGB channels. HSL lightness 50% can be anywhere from quite dark
//! (blue) to glaring (yellow); luminance gets the label right in both
//! cases.

use tinct_color::color::{hsl_to_rgb, srgb_to_linear};
use tinct_color::Hsl;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Hsl) -> f64 {
    let (r, g, b) = hsl_to_rgb(color.h, color.s, color.l);
    let r_lin = f64::from(srgb_to_linear(r));
    let g_lin = f64::from(srgb_to_linear(g));
    let b_lin = f64::from(srgb_to_linear(b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Label color for text drawn on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Black,
    White,
}

impl Label {
    /// The label's 8-bit RGB value, for rendering.
    #[must_use]
    pub const fn rgb8(self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::White => (255, 255, 255),
        }
    }
}

/// Luminance at which black and white text have equal WCAG contrast
/// against the background: (L + 0.05)² = 1.05 × 0.05.
const FLIP_POINT: f64 = 0.179;

/// Pick the higher-contrast label color for the given swatch.
#[must_use]
pub fn label_for(swatch: Hsl) -> Label {
    if relative_luminance(swatch) > FLIP_POINT {
        Label::Black
    } else {
        Label::White
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
