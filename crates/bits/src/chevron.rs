use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape, bits};
use serde::Deserialize;

/// One triangle per bit: apex up for 1, apex down for 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChevronStripe {
    pub unit_width: f32,
    pub unit_height: f32,
    pub spacing: f32,
}

impl Default for ChevronStripe {
    fn default() -> Self {
        Self {
            unit_width: 30.0,
            unit_height: 30.0,
            spacing: 5.0,
        }
    }
}

impl ChevronStripe {
    fn chevron(&self, x: f32, up: bool) -> Vec<Point> {
        let (w, h) = (self.unit_width, self.unit_height);
        let (base, apex) = if up { (h, 0.0) } else { (0.0, h) };
        vec![
            Point::new(x, base),
            Point::new(x + w / 2.0, apex),
            Point::new(x + w, base),
        ]
    }
}

impl Encoder for ChevronStripe {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let pitch = self.unit_width + self.spacing;
        let mut canvas = Canvas::new(bits(text).count() as f32 * pitch, self.unit_height);

        for (i, bit) in bits(text).enumerate() {
            canvas.push(Shape::Polygon {
                points: self.chevron(i as f32 * pitch, bit),
                fill: palette.foreground,
            });
        }

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bit_is_drawn() {
        let canvas = ChevronStripe::default()
            .encode("Go", &Palette::light())
            .unwrap();
        assert_eq!(canvas.shapes.len(), 16);
        assert_eq!(canvas.width, 16.0 * 35.0);
        assert_eq!(canvas.height, 30.0);
    }

    #[test]
    fn apex_direction_follows_bit() {
        // '@' = 0100_0000: first chevron down, second up
        let canvas = ChevronStripe::default()
            .encode("@", &Palette::light())
            .unwrap();

        let apex = |i: usize| match &canvas.shapes[i] {
            Shape::Polygon { points, .. } => points[1],
            other => panic!("unexpected shape {other:?}"),
        };

        assert_eq!(apex(0), Point::new(15.0, 30.0));
        assert_eq!(apex(1), Point::new(35.0 + 15.0, 0.0));
    }
}
