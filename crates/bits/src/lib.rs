//! `encoderize-bits` is a backend for the `encoderize` crate holding the
//! encoders that work from character codes rather than lookup tables.
//!
//! [BinaryStripe] and [ChevronStripe] expand every UTF-8 byte of the text
//! into eight bits, most significant first. [WaveformStripe] uses each
//! character's code point as the phase of a sine segment.

mod binary;
mod chevron;
mod waveform;

pub use binary::BinaryStripe;
pub use chevron::ChevronStripe;
pub use waveform::WaveformStripe;
