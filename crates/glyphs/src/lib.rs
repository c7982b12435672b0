//! `encoderize-glyphs` is a backend for the `encoderize` crate holding the
//! encoders driven by per-character lookup tables.
//!
//! - [MorseBand]: international Morse code as dots and dashes
//! - [CircuitTrace]: 5x7 letter bitmaps drawn as pads joined by traces
//! - [DotGrid]: letters hidden as highlighted cells in a regular dot grid
//! - [SemaphoreFlags]: flag semaphore, one flag-bearer per letter
//! - [A1z26Stripe]: alphabet positions as a line of numbers
//! - [BrailleStripe]: six-dot braille cells
//!
//! Characters missing from a table are skipped, never rejected.

mod a1z26;
mod braille;
mod circuit;
mod dot_grid;
mod morse;
mod semaphore;

pub use a1z26::{A1z26Stripe, alphabet_position};
pub use braille::{BrailleStripe, braille_dots};
pub use circuit::{Bitmap, CircuitTrace, pattern};
pub use dot_grid::DotGrid;
pub use morse::{MorseBand, morse};
pub use semaphore::{SemaphoreFlags, semaphore_angles};
