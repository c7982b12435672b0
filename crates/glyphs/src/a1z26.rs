use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape};
use serde::Deserialize;

/// 1-indexed position of an ASCII letter in the alphabet (case-insensitive).
pub fn alphabet_position(character: char) -> Option<u32> {
    character
        .is_ascii_alphabetic()
        .then(|| (character.to_ascii_uppercase() as u8 - b'A') as u32 + 1)
}

/// The letters of the text as alphabet positions on a single line of text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct A1z26Stripe {
    pub font_size: f32,
    pub padding: f32,
    pub delimiter: String,
    pub font_family: String,
}

impl Default for A1z26Stripe {
    fn default() -> Self {
        Self {
            font_size: 48.0,
            padding: 10.0,
            delimiter: "·".to_string(),
            font_family: "Arial".to_string(),
        }
    }
}

impl A1z26Stripe {
    /// The delimited number string, non-letters dropped.
    pub fn numbers(&self, text: &str) -> String {
        text.chars()
            .filter_map(alphabet_position)
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(&self.delimiter)
    }
}

impl Encoder for A1z26Stripe {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let numbers = self.numbers(text);

        // No font metrics available; approximate an average glyph at 0.6 em.
        let width = numbers.chars().count() as f32 * self.font_size * 0.6 + self.padding;
        let mut canvas = Canvas::new(width, self.font_size * 1.2);

        canvas.push(Shape::Text {
            origin: Point::new(self.padding, self.font_size),
            content: numbers,
            font_size: self.font_size,
            font_family: self.font_family.clone(),
            fill: palette.foreground,
        });

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions() {
        assert_eq!(alphabet_position('a'), Some(1));
        assert_eq!(alphabet_position('Z'), Some(26));
        assert_eq!(alphabet_position('!'), None);
        assert_eq!(alphabet_position('é'), None);
    }

    #[test]
    fn filters_and_joins() {
        let stripe = A1z26Stripe::default();
        assert_eq!(stripe.numbers("Hi!"), "8·9");
        assert_eq!(stripe.numbers("Go 2 it"), "7·15·9·20");
        assert_eq!(stripe.numbers("123"), "");
    }

    #[test]
    fn renders_one_text_element() {
        let canvas = A1z26Stripe::default()
            .encode("Hi!", &Palette::light())
            .unwrap();

        assert_eq!(canvas.shapes.len(), 1);
        match &canvas.shapes[0] {
            Shape::Text { content, origin, .. } => {
                assert_eq!(content, "8·9");
                assert_eq!(*origin, Point::new(10.0, 48.0));
            }
            other => panic!("expected text, got {other:?}"),
        }
        assert!((canvas.width - (3.0 * 48.0 * 0.6 + 10.0)).abs() < 1e-3);
        assert!((canvas.height - 57.6).abs() < 1e-3);
    }

    #[test]
    fn custom_delimiter() {
        let stripe = A1z26Stripe {
            delimiter: "-".to_string(),
            ..A1z26Stripe::default()
        };
        assert_eq!(stripe.numbers("abc"), "1-2-3");
    }
}
