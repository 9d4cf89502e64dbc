// SPDX-License-Identifier: MIT
//
// tinct-color — HSL color core for tinct.
//
// The smallest useful model for palette work: a hue angle and two
// percentages. Hex strings come in, HSL values are manipulated, hex
// strings go back out. Everything in this crate is a pure function of
// its arguments; no I/O, no state, no dependencies.

pub mod color;

pub use color::Hsl;
