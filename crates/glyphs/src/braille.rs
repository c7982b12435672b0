use encoderize_core::{Canvas, EncodeError, Encoder, Palette, Point, Shape};
use serde::Deserialize;

/// Raised dots per letter. Dots 1-3 run down the left column, 4-6 down the right.
static BRAILLE: [&[u8]; 26] = [
    &[1],             // A
    &[1, 2],          // B
    &[1, 4],          // C
    &[1, 4, 5],       // D
    &[1, 5],          // E
    &[1, 2, 4],       // F
    &[1, 2, 4, 5],    // G
    &[1, 2, 5],       // H
    &[2, 4],          // I
    &[2, 4, 5],       // J
    &[1, 3],          // K
    &[1, 2, 3],       // L
    &[1, 3, 4],       // M
    &[1, 3, 4, 5],    // N
    &[1, 3, 5],       // O
    &[1, 2, 3, 4],    // P
    &[1, 2, 3, 4, 5], // Q
    &[1, 2, 3, 5],    // R
    &[2, 3, 4],       // S
    &[2, 3, 4, 5],    // T
    &[1, 3, 6],       // U
    &[1, 2, 3, 6],    // V
    &[2, 4, 5, 6],    // W
    &[1, 3, 4, 6],    // X
    &[1, 3, 4, 5, 6], // Y
    &[1, 3, 5, 6],    // Z
];

/// Raised dots for a letter (case-insensitive); empty for anything else.
pub fn braille_dots(character: char) -> &'static [u8] {
    match character.to_ascii_uppercase() {
        c @ 'A'..='Z' => BRAILLE[(c as u8 - b'A') as usize],
        _ => &[],
    }
}

/// Column and row of a dot number within its 2x3 cell.
fn dot_position(dot: u8) -> (u8, u8) {
    let index = dot.saturating_sub(1);
    (index / 3, index % 3)
}

/// One braille cell per character, left to right.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrailleStripe {
    pub cell_size: f32,
    pub dot_radius: f32,
    pub spacing: f32,
}

impl Default for BrailleStripe {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            dot_radius: 8.0,
            spacing: 20.0,
        }
    }
}

impl Encoder for BrailleStripe {
    fn encode(&self, text: &str, palette: &Palette) -> Result<Canvas, EncodeError> {
        let cell = self.cell_size;
        let pitch = cell + self.spacing;

        let mut canvas = Canvas::new(text.chars().count() as f32 * pitch, cell);

        for (i, character) in text.chars().enumerate() {
            let left = i as f32 * pitch;

            for &dot in braille_dots(character) {
                let (col, row) = dot_position(dot);
                canvas.push(Shape::Circle {
                    center: Point::new(
                        left + col as f32 * (cell / 2.0) + cell / 4.0,
                        row as f32 * (cell / 3.0) + cell / 6.0,
                    ),
                    radius: self.dot_radius,
                    fill: palette.foreground,
                    stroke: None,
                });
            }
        }

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centers(canvas: &Canvas) -> Vec<Point> {
        canvas
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn dot_layout() {
        assert_eq!(dot_position(1), (0, 0));
        assert_eq!(dot_position(3), (0, 2));
        assert_eq!(dot_position(4), (1, 0));
        assert_eq!(dot_position(6), (1, 2));
    }

    #[test]
    fn a_is_top_left_dot() {
        let canvas = BrailleStripe::default()
            .encode("a", &Palette::light())
            .unwrap();
        assert_eq!(centers(&canvas), vec![Point::new(15.0, 10.0)]);
    }

    #[test]
    fn z_uses_dots_1_3_5_6() {
        assert_eq!(braille_dots('Z'), &[1, 3, 5, 6]);

        let canvas = BrailleStripe::default()
            .encode("Z", &Palette::light())
            .unwrap();
        assert_eq!(
            centers(&canvas),
            vec![
                Point::new(15.0, 10.0),
                Point::new(15.0, 50.0),
                Point::new(45.0, 30.0),
                Point::new(45.0, 50.0),
            ]
        );
    }

    #[test]
    fn unmapped_characters_are_empty_cells() {
        let canvas = BrailleStripe::default()
            .encode("?a", &Palette::light())
            .unwrap();
        assert_eq!(canvas.width, 2.0 * 80.0);
        assert_eq!(centers(&canvas), vec![Point::new(80.0 + 15.0, 10.0)]);
    }
}
