//! `encoderize` is a library for drawing text as a set of visual encodings
//! and writing them out as SVG.
//!
//! Supported encodings include:
//! - bit-level stripes (binary bars, chevrons) and a waveform, via [encoderize_bits]
//! - table-driven symbols (Morse, circuit traces, dot grid, semaphore,
//!   A1Z26, braille), via [encoderize_glyphs]
//! - Code 128 barcodes, via [encoderize_barcode]
//!
//! Every encoding is drawn with a [Palette], so the same text can be
//! rendered for light and dark backgrounds:
//!
//! ```
//! use encoderize::{EncoderSet, Encoding, Palette, to_document};
//!
//! let encoders = EncoderSet::default();
//! let canvas = encoders.encode(Encoding::MorseCodeBand, "SOS", &Palette::dark()).unwrap();
//! let svg = to_document(&canvas).to_string();
//! assert!(svg.contains("<circle"));
//! ```

use std::fmt;

use serde::Deserialize;

pub use encoderize_barcode::Code128Barcode;
pub use encoderize_bits::{BinaryStripe, ChevronStripe, WaveformStripe};
pub use encoderize_core::{
    Canvas, Color, ColorError, EncodeError, Encoder, Palette, Point, Shape, Stroke, Theme,
};
pub use encoderize_glyphs::{
    A1z26Stripe, BrailleStripe, CircuitTrace, DotGrid, MorseBand, SemaphoreFlags,
};

pub mod batch;
pub mod config;
mod error;
mod svg_output;

pub use config::{Config, ConfigError, load_config};
pub use error::Error;
pub use svg_output::{save, to_document};

/// One of the supported encodings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Encoding {
    BinaryStripe,
    MorseCodeBand,
    CircuitTraceSilhouette,
    DotGridSteganography,
    SemaphoreFlags,
    A1z26Stripe,
    Code128Barcode,
    WaveformStripe,
    ChevronStripe,
    BrailleStripe,
}

impl Encoding {
    /// Every encoding, in the order output files are written.
    pub const ALL: [Encoding; 10] = [
        Encoding::BinaryStripe,
        Encoding::MorseCodeBand,
        Encoding::CircuitTraceSilhouette,
        Encoding::DotGridSteganography,
        Encoding::SemaphoreFlags,
        Encoding::A1z26Stripe,
        Encoding::Code128Barcode,
        Encoding::WaveformStripe,
        Encoding::ChevronStripe,
        Encoding::BrailleStripe,
    ];

    /// Name used for output files and config tables.
    pub const fn short_name(self) -> &'static str {
        match self {
            Encoding::BinaryStripe => "binary_stripe",
            Encoding::MorseCodeBand => "morse_code_band",
            Encoding::CircuitTraceSilhouette => "circuit_trace_silhouette",
            Encoding::DotGridSteganography => "dot_grid_steganography",
            Encoding::SemaphoreFlags => "semaphore_flags",
            Encoding::A1z26Stripe => "a1z26_stripe",
            Encoding::Code128Barcode => "code128_barcode",
            Encoding::WaveformStripe => "waveform_stripe",
            Encoding::ChevronStripe => "chevron_stripe",
            Encoding::BrailleStripe => "braille_stripe",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A configured instance of every encoder.
///
/// Field names match [Encoding::short_name], so an `[encoders]` config table
/// can override any encoder's geometry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderSet {
    pub binary_stripe: BinaryStripe,
    pub morse_code_band: MorseBand,
    pub circuit_trace_silhouette: CircuitTrace,
    pub dot_grid_steganography: DotGrid,
    pub semaphore_flags: SemaphoreFlags,
    pub a1z26_stripe: A1z26Stripe,
    pub code128_barcode: Code128Barcode,
    pub waveform_stripe: WaveformStripe,
    pub chevron_stripe: ChevronStripe,
    pub braille_stripe: BrailleStripe,
}

impl EncoderSet {
    /// The encoder responsible for the given encoding.
    pub fn encoder(&self, encoding: Encoding) -> &dyn Encoder {
        match encoding {
            Encoding::BinaryStripe => &self.binary_stripe,
            Encoding::MorseCodeBand => &self.morse_code_band,
            Encoding::CircuitTraceSilhouette => &self.circuit_trace_silhouette,
            Encoding::DotGridSteganography => &self.dot_grid_steganography,
            Encoding::SemaphoreFlags => &self.semaphore_flags,
            Encoding::A1z26Stripe => &self.a1z26_stripe,
            Encoding::Code128Barcode => &self.code128_barcode,
            Encoding::WaveformStripe => &self.waveform_stripe,
            Encoding::ChevronStripe => &self.chevron_stripe,
            Encoding::BrailleStripe => &self.braille_stripe,
        }
    }

    /// Encode the given text with the specified encoding.
    pub fn encode(
        &self,
        encoding: Encoding,
        text: &str,
        palette: &Palette,
    ) -> Result<Canvas, EncodeError> {
        self.encoder(encoding).encode(text, palette)
    }
}
