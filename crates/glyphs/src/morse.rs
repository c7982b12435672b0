use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape};
use serde::Deserialize;

static MORSE: [&str; 26] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..", "--",
    "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..",
];

/// Look up the Morse pattern for a character.
///
/// Letters are case-insensitive. A space maps to `" "`, a single word gap.
/// Anything else maps to the empty pattern.
pub fn morse(character: char) -> &'static str {
    match character.to_ascii_uppercase() {
        c @ 'A'..='Z' => MORSE[(c as u8 - b'A') as usize],
        ' ' => " ",
        _ => "",
    }
}

/// Dots and dashes laid out left to right in one band.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MorseBand {
    pub dot_diameter: f32,
    pub dash_width: f32,
    pub height: f32,
    pub symbol_spacing: f32,
    pub letter_spacing: f32,
}

impl Default for MorseBand {
    fn default() -> Self {
        Self {
            dot_diameter: 16.0,
            dash_width: 48.0,
            height: 16.0,
            symbol_spacing: 8.0,
            letter_spacing: 16.0,
        }
    }
}

impl MorseBand {
    /// Horizontal advance after drawing one symbol.
    fn advance(&self, symbol: char) -> f32 {
        match symbol {
            '-' => self.dash_width + self.symbol_spacing,
            '.' | ' ' => self.dot_diameter + self.symbol_spacing,
            _ => 0.0,
        }
    }
}

impl Encoder for MorseBand {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let sequence: Vec<&str> = text.chars().map(morse).collect();

        let width: f32 = sequence
            .iter()
            .map(|code| code.chars().map(|s| self.advance(s)).sum::<f32>() + self.letter_spacing)
            .sum();

        let mut canvas = Canvas::new(width, self.height);
        let radius = self.dot_diameter / 2.0;
        let mut x = 0.0;

        for code in sequence {
            for symbol in code.chars() {
                match symbol {
                    '.' => canvas.push(Shape::Circle {
                        center: Point::new(x + radius, self.height / 2.0),
                        radius,
                        fill: palette.foreground,
                        stroke: None,
                    }),
                    '-' => canvas.push(Shape::Rect {
                        origin: Point::new(x, 0.0),
                        width: self.dash_width,
                        height: self.height,
                        fill: palette.foreground,
                    }),
                    _ => {}
                }
                x += self.advance(symbol);
            }
            x += self.letter_spacing;
        }

        Ok(canvas)
    }
}
