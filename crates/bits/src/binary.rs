use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape, bits};
use serde::Deserialize;

/// One bar slot per bit; set bits are drawn as solid bars, clear bits as gaps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinaryStripe {
    pub bar_width: f32,
    pub bar_height: f32,
    pub spacing: f32,
}

impl Default for BinaryStripe {
    fn default() -> Self {
        Self {
            bar_width: 20.0,
            bar_height: 200.0,
            spacing: 5.0,
        }
    }
}

impl Encoder for BinaryStripe {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let pitch = self.bar_width + self.spacing;
        let mut canvas = Canvas::new(bits(text).count() as f32 * pitch, self.bar_height);

        let mut x = 0.0;
        for bit in bits(text) {
            if bit {
                canvas.push(Shape::Rect {
                    origin: Point::new(x, 0.0),
                    width: self.bar_width,
                    height: self.bar_height,
                    fill: palette.foreground,
                });
            }
            x += pitch;
        }

        Ok(canvas)
    }
}
