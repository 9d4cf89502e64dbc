//! # tinct-harmony — palette derivation engine
//!
//! Turns one base color and one harmony rule into a five-swatch
//! palette. The derivation is pure arithmetic on HSL components; the
//! only non-determinism in the crate is the entropy-seeded constructor
//! of the random-base helper, which the derivation path never touches.
//!
//! # Architecture
//!
//! ```text
//! base hex + HarmonyKind
//!     │
//!     ▼
//! harmony.rs:  derive 5 HSL values (pure hue/lightness math)
//!     │
//!     ▼
//! palette.rs:  pair each value with its hex string (base kept verbatim)
//!     │
//!     ▼
//! contrast.rs: pick a readable label color per swatch (WCAG luminance)
//! ```
//!
//! `rand.rs` sits to the side: a minimal xorshift PRNG that mints
//! random base colors on demand.

// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// Entropy seeding folds a 64-bit timestamp into a 32-bit seed.
#![allow(clippy::cast_possible_truncation)]

pub mod contrast;
pub mod harmony;
pub mod palette;
pub mod rand;

pub use harmony::HarmonyKind;
pub use palette::{Palette, Swatch};
