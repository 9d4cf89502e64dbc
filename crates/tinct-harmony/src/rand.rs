//! Random base colors — the one non-deterministic corner of the crate.
//!
//! A fresh palette needs a starting point, and "surprise me" is a
//! first-class way to get one. The generator is a minimal xorshift
//! PRNG: deterministic given a seed (which is what tests use), with
//! entropy entering only through [`Xorshift32::from_entropy`]. The
//! derivation pipeline never calls into this module.

use std::time::{SystemTime, UNIX_EPOCH};

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. No external `rand` crate needed.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator from an explicit seed. A zero seed is bumped
    /// to 1 (xorshift has a fixed point at zero).
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Create a generator seeded from the system clock.
    ///
    /// This is the only place environmental randomness enters; every
    /// other function in the crate is a pure function of its inputs.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0x9e37_79b9, |d| (d.as_secs() as u32) ^ d.subsec_nanos());
        Self::new(seed)
    }

    /// Next 32-bit value.
    pub const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

/// Produce a random base color: a 24-bit value formatted as a
/// lowercase, zero-padded, `#`-prefixed hex string.
#[must_use]
pub fn random_hex(rng: &mut Xorshift32) -> String {
    let rgb = rng.next() & 0x00ff_ffff;
    format!("#{rgb:06x}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
