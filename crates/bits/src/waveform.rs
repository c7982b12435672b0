use std::f32::consts::TAU;

use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape, Stroke};
use serde::Deserialize;

/// A single polyline across a fixed-size canvas.
///
/// Every character owns the same number of samples. Within its span the
/// curve runs one full sine period, phase-shifted by the character's code
/// point, so equal characters give equal segments wherever they appear.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveformStripe {
    pub width: f32,
    pub height: f32,
    pub samples_per_char: usize,
    pub margin: f32,
    pub stroke_width: f32,
}

impl Default for WaveformStripe {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 300.0,
            samples_per_char: 50,
            margin: 20.0,
            stroke_width: 4.0,
        }
    }
}

impl WaveformStripe {
    /// Sample points of the curve, left to right.
    pub fn points(&self, text: &str) -> Vec<Point> {
        let codes: Vec<u32> = text.chars().map(u32::from).collect();
        let span = self.samples_per_char;
        let total = codes.len() * span;

        let step = match total {
            0 | 1 => 0.0,
            n => self.width / (n - 1) as f32,
        };
        let mid = self.height / 2.0;
        let swing = mid - self.margin;

        (0..total)
            .map(|i| {
                let code = codes[i / span] as f32;
                let amplitude = (TAU * (i as f32 / span as f32) + code).sin();
                Point::new(i as f32 * step, mid - amplitude * swing)
            })
            .collect()
    }
}

impl Encoder for WaveformStripe {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let mut canvas = Canvas::new(self.width, self.height);
        let points = self.points(text);

        if !points.is_empty() {
            canvas.push(Shape::Polyline {
                points,
                stroke: Stroke {
                    color: palette.foreground,
                    width: self.stroke_width,
                },
            });
        }

        Ok(canvas)
    }
}
