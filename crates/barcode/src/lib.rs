//! `encoderize-barcode` is a backend for the `encoderize` crate that draws
//! the text as a Code 128 barcode.
//!
//! Symbology is delegated to [barcoders]. The bars are rasterized to a PNG
//! and embedded in the drawing as a base64 `data:` URI.

use barcoders::sym::code128::Code128;
use base64::Engine;
use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape};
use image::{ImageEncoder, Rgba, RgbaImage};
use serde::Deserialize;

/// Code 128 start character selecting character set B (printable ASCII).
const CHARSET_B: char = 'Ɓ';

/// A Code 128 barcode as an embedded raster.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Code128Barcode {
    /// Width of one bar module in pixels.
    pub module_width: u32,
    /// Bar height in pixels.
    pub bar_height: u32,
    /// Blank modules on either side of the symbol.
    pub quiet_zone: u32,
}

impl Default for Code128Barcode {
    fn default() -> Self {
        Self {
            module_width: 2,
            bar_height: 100,
            quiet_zone: 10,
        }
    }
}

impl Code128Barcode {
    /// Encode the text into bar modules (1 = bar, 0 = space).
    ///
    /// Only printable ASCII is accepted. barcoders reads `À`, `Ɓ` and `Ć` as
    /// character set switches, so they are rejected here along with
    /// everything else set B cannot carry.
    pub fn modules(&self, text: &str) -> Result<Vec<u8>, EncodeError> {
        if let Some(c) = text.chars().find(|c| !(' '..='~').contains(c)) {
            return Err(EncodeError::Symbol(format!(
                "character {c:?} is not printable ASCII"
            )));
        }

        let symbol = Code128::new(&format!("{CHARSET_B}{text}"))
            .map_err(|e| EncodeError::Symbol(e.to_string()))?;
        Ok(symbol.encode())
    }

    /// Rasterize the modules with bars in the foreground color.
    pub fn rasterize(&self, modules: &[u8], palette: &Palette) -> RgbaImage {
        let quiet = self.quiet_zone as usize;
        let module_width = self.module_width.max(1) as usize;
        let columns = modules.len() + 2 * quiet;

        let bar = Rgba(palette.foreground.to_array());
        let space = Rgba(palette.background.to_array());

        RgbaImage::from_fn(
            (columns * module_width) as u32,
            self.bar_height,
            |x, _| {
                let module = (x as usize / module_width).checked_sub(quiet);
                match module.and_then(|m| modules.get(m)) {
                    Some(1) => bar,
                    _ => space,
                }
            },
        )
    }
}

/// Encode an image as PNG bytes.
fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    let mut png_bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png_bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ColorType::Rgba8,
        )
        .map_err(|e| EncodeError::Raster(e.to_string()))?;
    Ok(png_bytes)
}

impl Encoder for Code128Barcode {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let modules = self.modules(text)?;
        let raster = self.rasterize(&modules, palette);
        let png_bytes = encode_png(&raster)?;

        let (width, height) = (raster.width() as f32, raster.height() as f32);
        let mut canvas = Canvas::new(width, height);

        canvas.push(Shape::Image {
            origin: Point::new(0.0, 0.0),
            width,
            height,
            href: format!(
                "data:image/png;base64,{}",
                base64::engine::general_purpose::STANDARD.encode(&png_bytes)
            ),
        });

        Ok(canvas)
    }
}
