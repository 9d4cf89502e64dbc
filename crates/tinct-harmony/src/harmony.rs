//! Harmony rule engine — pure palette math.
//!
//! Each rule takes a base HSL color and derives four companions with a
//! fixed recipe of hue rotations and lightness steps. The first entry
//! of every derivation is the base itself, so a rule always yields a
//! complete 5-color palette. Hue arithmetic wraps around 360°;
//! lightness steps clamp to [0, 100]. Saturation is never touched.

use tinct_color::Hsl;

/// The kind of harmony rule used to derive a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// Adjacent hues: +/- 30 and +/- 60 degrees.
    Analogous,
    /// Opposite hue (180 degrees) plus lightness variants of both poles.
    Complementary,
    /// 120-degree spacing plus two lightness variants of the base.
    Triadic,
    /// 90-degree spacing (a square on the wheel) plus one dark variant.
    Tetradic,
    /// Single hue, lightness ladder only.
    Monochromatic,
}

impl HarmonyKind {
    /// Derive the full 5-color palette for this rule.
    ///
    /// The first entry is always `base`, followed by the four derived
    /// colors in rule order. The order is part of the contract —
    /// consumers render swatches in this exact sequence.
    #[must_use]
    pub fn derive(self, base: Hsl) -> [Hsl; 5] {
        derive(self, base)
    }

    /// Human-readable name of this rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Parse a rule from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|k| k.name() == lower).copied()
    }

    /// All available rules.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Analogous,
            Self::Complementary,
            Self::Triadic,
            Self::Tetradic,
            Self::Monochromatic,
        ]
    }
}

/// Core derivation dispatch.
fn derive(kind: HarmonyKind, base: Hsl) -> [Hsl; 5] {
    match kind {
        HarmonyKind::Analogous => [
            base,
            base.shift_hue(30.0),
            base.shift_hue(60.0),
            base.shift_hue(-30.0),
            base.shift_hue(-60.0),
        ],
        HarmonyKind::Complementary => [
            base,
            base.shift_hue(180.0),
            base.darken(20.0),
            base.lighten(20.0),
            base.shift_hue(180.0).darken(20.0),
        ],
        HarmonyKind::Triadic => [
            base,
            base.shift_hue(120.0),
            base.shift_hue(240.0),
            base.darken(15.0),
            base.lighten(15.0),
        ],
        HarmonyKind::Tetradic => [
            base,
            base.shift_hue(90.0),
            base.shift_hue(180.0),
            base.shift_hue(270.0),
            base.darken(15.0),
        ],
        HarmonyKind::Monochromatic => [
            base,
            base.darken(30.0),
            base.darken(15.0),
            base.lighten(15.0),
            base.lighten(30.0),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
