//! Palette assembly — from a base hex string to five labeled swatches.
//!
//! [`harmony`](crate::harmony) does the pure HSL math; this module
//! binds each derived value to the hex string a consumer actually
//! wants to read, copy, or render. The base swatch keeps the caller's
//! spelling untouched (case and `#` included); derived swatches are
//! always normalized lowercase `#rrggbb`.

use tinct_color::Hsl;

use crate::harmony::HarmonyKind;

/// One palette entry: a color plus its display hex string.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    /// The hex string shown to (and copied by) the user.
    pub hex: String,
    /// The underlying HSL value, kept for rendering and label math.
    pub hsl: Hsl,
}

/// A complete 5-swatch palette derived from one base color.
#[derive(Debug, Clone)]
pub struct Palette {
    kind: HarmonyKind,
    swatches: [Swatch; 5],
}

impl Palette {
    /// Derive a palette from a base hex color and a harmony rule.
    ///
    /// The first swatch is the base with the input string passed
    /// through verbatim; the remaining four follow the rule's fixed
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `None` if `base_hex` is not a valid 6-digit hex color.
    #[must_use]
    pub fn generate(base_hex: &str, kind: HarmonyKind) -> Option<Self> {
        let base = Hsl::from_hex(base_hex)?;
        let [b, d1, d2, d3, d4] = kind.derive(base);

        let swatch = |hsl: Hsl| Swatch { hex: hsl.to_hex(), hsl };
        let swatches = [
            Swatch { hex: base_hex.to_string(), hsl: b },
            swatch(d1),
            swatch(d2),
            swatch(d3),
            swatch(d4),
        ];

        Some(Self { kind, swatches })
    }

    /// The rule this palette was derived with.
    #[must_use]
    pub const fn kind(&self) -> HarmonyKind {
        self.kind
    }

    /// The five swatches, in derivation order.
    #[must_use]
    pub const fn swatches(&self) -> &[Swatch; 5] {
        &self.swatches
    }

    /// Iterate over the five hex strings, in derivation order.
    pub fn hex_strings(&self) -> impl Iterator<Item = &str> {
        self.swatches.iter().map(|s| s.hex.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
